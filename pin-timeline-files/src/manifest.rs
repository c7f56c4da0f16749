//! Date ranges already persisted alongside the file records, so no scan
//! is needed.

use anyhow::Context;
use chrono::NaiveDate;
use pin_timeline::date_format::format_display_date;
use pin_timeline::date_range::days_between;
use pin_timeline::{DateRangeSource, FileDateRange, FileRef};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One persisted file record.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
    pub id: String,
    pub file_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub unique_dates: Option<Vec<NaiveDate>>,
    #[serde(default)]
    pub is_discrete: bool,
}

impl ManifestRecord {
    fn to_range(&self) -> FileDateRange {
        let total_days = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(days_between(start, end) + 1),
            _ => None,
        };
        FileDateRange {
            total_days,
            start_date: self.start_date.as_ref().map(format_display_date),
            end_date: self.end_date.as_ref().map(format_display_date),
            unique_dates: self
                .unique_dates
                .as_ref()
                .map(|days| days.iter().map(format_display_date).collect()),
            is_crop: Some(self.is_discrete),
            error: None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ManifestSource {
    records: Vec<ManifestRecord>,
}

impl ManifestSource {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let records: Vec<ManifestRecord> = serde_json::from_str(json)?;
        log::info!("manifest: loaded {} file records", records.len());
        Ok(ManifestSource { records })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("parsing manifest {}", path.display()))
    }

    pub fn file_refs(&self) -> Vec<FileRef> {
        self.records
            .iter()
            .map(|r| FileRef::new(r.id.clone(), r.file_name.clone()))
            .collect()
    }
}

impl DateRangeSource for ManifestSource {
    async fn file_date_range(&self, file: &FileRef) -> anyhow::Result<FileDateRange> {
        self.records
            .iter()
            .find(|r| r.id == file.file_id)
            .map(ManifestRecord::to_range)
            .with_context(|| format!("file {} is not in the manifest", file.file_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"[
        {"id": "1", "fileName": "ProjA_FPOD_S1_2024.csv",
         "startDate": "2024-01-01", "endDate": "2024-01-05"},
        {"id": "2", "fileName": "ProjA_CROP_S1.csv",
         "startDate": "2024-01-02", "endDate": "2024-01-09",
         "uniqueDates": ["2024-01-02", "2024-01-09"], "isDiscrete": true},
        {"id": "3", "fileName": "pending.csv", "startDate": null, "endDate": null}
    ]"#;

    #[tokio::test]
    async fn test_manifest_serves_ranges() {
        let source = ManifestSource::from_json_str(MANIFEST).unwrap();
        let refs = source.file_refs();
        assert_eq!(refs.len(), 3);

        let first = source.file_date_range(&refs[0]).await.unwrap();
        assert_eq!(first.start_date.as_deref(), Some("01/01/2024"));
        assert_eq!(first.total_days, Some(5));
        assert_eq!(first.is_crop, Some(false));

        let crop = source.file_date_range(&refs[1]).await.unwrap();
        assert_eq!(crop.is_crop, Some(true));
        assert_eq!(
            crop.unique_dates,
            Some(vec!["02/01/2024".to_string(), "09/01/2024".to_string()])
        );

        let pending = source.file_date_range(&refs[2]).await.unwrap();
        assert_eq!(pending.start_date, None);
        assert_eq!(pending.total_days, None);
    }

    #[tokio::test]
    async fn test_unknown_file_is_an_error() {
        let source = ManifestSource::from_json_str(MANIFEST).unwrap();
        let err = source
            .file_date_range(&FileRef::new("99", "x.csv"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not in the manifest"));
    }

    #[test]
    fn test_malformed_manifest() {
        assert!(ManifestSource::from_json_str("{}").is_err());
    }
}
