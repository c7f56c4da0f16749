//! Timeline configuration.
//!
//! Loaded from an optional JSON document; every field has a default so an
//! empty object (or no file at all) is a valid configuration.

use crate::date_format::DashConvention;
use crate::error::TimelineError;
use serde::{Deserialize, Serialize};

/// How the month header grid is generated.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthMode {
    /// Every month from the first file's start to the last file's end.
    #[default]
    Contiguous,
    /// Only months that some file's range touches.
    Sparse,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub dash_convention: DashConvention,
    pub month_mode: MonthMode,
    /// Filename data types (second `_` segment) whose files are spot samples.
    pub discrete_data_types: Vec<String>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            dash_convention: DashConvention::default(),
            month_mode: MonthMode::default(),
            discrete_data_types: vec!["CROP".to_string()],
        }
    }
}

impl TimelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, TimelineError> {
        serde_json::from_str(json).map_err(|e| TimelineError::InvalidConfig(e.to_string()))
    }

    /// Whether files of `data_type` should be drawn as individual sampling days.
    pub fn is_discrete_data_type(&self, data_type: &str) -> bool {
        self.discrete_data_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(data_type))
    }
}
