//! Grouping of files that belong to the same project, data type and
//! station, with a merged date envelope per group.

use crate::date_format::DashConvention;
use crate::file_info::{file_name_segments, FileDateInfo};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Number of leading `_` segments that form a group key.
pub const GROUP_KEY_SEGMENTS: usize = 3;

/// `Project_DataType_Station` from a filename such as
/// `ProjA_FPOD_S1_2024.csv`. Names with fewer segments have no key.
pub fn group_key(file_name: &str) -> Option<String> {
    let segments = file_name_segments(file_name);
    let key = segments.get(..GROUP_KEY_SEGMENTS)?;
    if key.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(key.join("_"))
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FileGroup {
    pub key: String,
    pub file_ids: Vec<String>,
    /// Earliest start across members with valid dates.
    pub start: Option<NaiveDate>,
    /// Latest end across members with valid dates.
    pub end: Option<NaiveDate>,
}

impl FileGroup {
    fn new(key: String) -> Self {
        FileGroup {
            key,
            file_ids: Vec::new(),
            start: None,
            end: None,
        }
    }

    /// Add a member, widening the envelope to cover its range.
    pub fn fold(&mut self, file: &FileDateInfo, convention: DashConvention) {
        self.file_ids.push(file.file_id.clone());
        if let Some((start, end)) = file.date_span(convention) {
            self.start = Some(self.start.map_or(start, |s| s.min(start)));
            self.end = Some(self.end.map_or(end, |e| e.max(end)));
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize)]
pub struct Grouping {
    /// In order of each key's first appearance.
    pub groups: Vec<FileGroup>,
    /// Ids of files whose names yield no group key.
    pub ungrouped: Vec<String>,
}

pub fn group_files(files: &[FileDateInfo], convention: DashConvention) -> Grouping {
    let mut grouping = Grouping::default();
    let mut index: HashMap<String, usize> = HashMap::new();
    for file in files {
        let Some(key) = group_key(&file.file_name) else {
            grouping.ungrouped.push(file.file_id.clone());
            continue;
        };
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            grouping.groups.push(FileGroup::new(key));
            grouping.groups.len() - 1
        });
        grouping.groups[slot].fold(file, convention);
    }
    grouping
}
