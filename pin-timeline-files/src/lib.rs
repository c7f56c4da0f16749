//! Date-range sources for pin timelines.
//!
//! Two collaborators sit behind [`pin_timeline::DateRangeSource`]:
//!
//! - [`CsvDirectorySource`] scans each CSV export on demand
//! - [`manifest::ManifestSource`] serves ranges already stored with the
//!   file records
//!
//! # Usage
//!
//! ```no_run
//! use pin_timeline::{source::load_file_dates, TimelineConfig, TimelineLayout};
//! use pin_timeline_files::{list_csv_files, CsvDirectorySource};
//! use std::path::Path;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = TimelineConfig::default();
//! let files = list_csv_files(Path::new("data/pin-42"))?;
//! let source = CsvDirectorySource::new("data/pin-42", &config);
//! let infos = load_file_dates(&source, &files, |_| {}).await;
//! let layout = TimelineLayout::compute(&infos, &config);
//! # Ok(())
//! # }
//! ```

pub mod csv_scan;
pub mod manifest;

use anyhow::Context;
use pin_timeline::{DashConvention, DateRangeSource, FileDateRange, FileRef, TimelineConfig};
use std::path::{Path, PathBuf};

/// Scans `root/<file_name>` for every requested file.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    root: PathBuf,
    convention: DashConvention,
    discrete_data_types: Vec<String>,
}

impl CsvDirectorySource {
    pub fn new(root: impl Into<PathBuf>, config: &TimelineConfig) -> Self {
        CsvDirectorySource {
            root: root.into(),
            convention: config.dash_convention,
            discrete_data_types: config.discrete_data_types.clone(),
        }
    }

    /// Whether a file is a spot-sample export, judged by its data-type segment.
    pub fn is_discrete(&self, file: &FileRef) -> bool {
        file.data_type().is_some_and(|data_type| {
            self.discrete_data_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(data_type))
        })
    }
}

impl DateRangeSource for CsvDirectorySource {
    async fn file_date_range(&self, file: &FileRef) -> anyhow::Result<FileDateRange> {
        let path = self.root.join(&file.file_name);
        let csv_data = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        csv_scan::scan_csv_dates(&csv_data, self.convention, self.is_discrete(file))
    }
}

/// Every `*.csv` file directly inside `dir`, sorted by name. The file name
/// doubles as the id.
pub fn list_csv_files(dir: &Path) -> anyhow::Result<Vec<FileRef>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !path.is_file() || !is_csv {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    log::info!("Found {} CSV files in {}", names.len(), dir.display());
    Ok(names
        .into_iter()
        .map(|name| FileRef::new(name.clone(), name))
        .collect())
}
