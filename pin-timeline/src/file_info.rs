//! Per-file date records, both as returned by a date-range source and as
//! held by a timeline view.

use crate::date_format::{normalize_date, DashConvention};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A filename split on `_` with its extension removed.
pub fn file_name_segments(file_name: &str) -> Vec<&str> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.split('_').collect()
}

/// A data file the timeline should show.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct FileRef {
    pub file_id: String,
    pub file_name: String,
}

impl FileRef {
    pub fn new(file_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        FileRef {
            file_id: file_id.into(),
            file_name: file_name.into(),
        }
    }

    pub fn name_segments(&self) -> Vec<&str> {
        file_name_segments(&self.file_name)
    }

    /// The data-type segment (`Project_DataType_Station_...`), if present.
    pub fn data_type(&self) -> Option<&str> {
        self.name_segments().get(1).copied()
    }
}

/// The date-range answer for one file, as produced by a source.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDateRange {
    pub total_days: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_dates: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_crop: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileDateRange {
    pub fn failed(message: impl Into<String>) -> Self {
        FileDateRange {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

/// One file's temporal extent, held in transient view state.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FileDateInfo {
    pub file_id: String,
    pub file_name: String,
    pub start_date_raw: Option<String>,
    pub end_date_raw: Option<String>,
    pub unique_dates: Option<Vec<String>>,
    pub is_discrete: bool,
    pub error: Option<String>,
}

impl FileDateInfo {
    pub fn from_range(file: &FileRef, range: FileDateRange) -> Self {
        FileDateInfo {
            file_id: file.file_id.clone(),
            file_name: file.file_name.clone(),
            start_date_raw: range.start_date,
            end_date_raw: range.end_date,
            unique_dates: range.unique_dates,
            is_discrete: range.is_crop.unwrap_or(false),
            error: range.error,
        }
    }

    pub fn from_error(file: &FileRef, error: impl Into<String>) -> Self {
        FileDateInfo::from_range(file, FileDateRange::failed(error))
    }

    pub fn start_date(&self, convention: DashConvention) -> Option<NaiveDate> {
        self.start_date_raw
            .as_deref()
            .and_then(|raw| normalize_date(raw, convention))
    }

    pub fn end_date(&self, convention: DashConvention) -> Option<NaiveDate> {
        self.end_date_raw
            .as_deref()
            .and_then(|raw| normalize_date(raw, convention))
    }

    /// Both endpoints, when both normalize.
    pub fn date_span(&self, convention: DashConvention) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date(convention)?, self.end_date(convention)?))
    }

    /// Sampling days that normalize, in source order.
    pub fn sampling_days(&self, convention: DashConvention) -> Vec<NaiveDate> {
        self.unique_dates
            .iter()
            .flatten()
            .filter_map(|raw| normalize_date(raw, convention))
            .collect()
    }
}
