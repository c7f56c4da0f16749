//! A complete Gantt-style layout: bounds plus every file's bars.

use crate::bounds::TimelineBounds;
use crate::config::TimelineConfig;
use crate::file_info::FileDateInfo;
use crate::geometry::{bars_for_file, BarGeometry};
use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct FileBars {
    pub file_id: String,
    pub bars: Vec<BarGeometry>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct TimelineLayout {
    pub bounds: TimelineBounds,
    /// In input order, one entry per file.
    pub files: Vec<FileBars>,
}

impl TimelineLayout {
    pub fn compute(files: &[FileDateInfo], config: &TimelineConfig) -> Self {
        let bounds = TimelineBounds::build(files, config);
        let files = files
            .iter()
            .map(|file| FileBars {
                file_id: file.file_id.clone(),
                bars: bars_for_file(&bounds, file, config),
            })
            .collect();
        TimelineLayout { bounds, files }
    }

    pub fn bars_for(&self, file_id: &str) -> Option<&[BarGeometry]> {
        self.files
            .iter()
            .find(|f| f.file_id == file_id)
            .map(|f| f.bars.as_slice())
    }
}
