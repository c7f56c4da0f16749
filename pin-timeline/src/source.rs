//! The seam to whatever knows a file's date range, and the sequential
//! loading loop that drives a timeline view from it.

use crate::config::TimelineConfig;
use crate::file_info::{FileDateInfo, FileDateRange, FileRef};
use crate::layout::TimelineLayout;
use log::{info, warn};

/// Anything that can report a file's date range: a CSV scan, a database
/// row, a remote storage service.
#[allow(async_fn_in_trait)]
pub trait DateRangeSource {
    async fn file_date_range(&self, file: &FileRef) -> anyhow::Result<FileDateRange>;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LoadProgress {
    pub completed: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

/// Fetch every file's date range, strictly one file at a time.
///
/// A failed lookup is recorded on that file's entry and loading carries on.
/// `on_progress` is called after each file.
pub async fn load_file_dates<S, F>(
    source: &S,
    files: &[FileRef],
    mut on_progress: F,
) -> Vec<FileDateInfo>
where
    S: DateRangeSource,
    F: FnMut(LoadProgress),
{
    let total = files.len();
    let mut infos = Vec::with_capacity(total);
    for (index, file) in files.iter().enumerate() {
        let entry = match source.file_date_range(file).await {
            Ok(range) => {
                if let Some(error) = &range.error {
                    warn!("No date range for {}: {}", file.file_name, error);
                }
                FileDateInfo::from_range(file, range)
            }
            Err(e) => {
                warn!("Failed to fetch date range for {}: {:#}", file.file_name, e);
                FileDateInfo::from_error(file, e.to_string())
            }
        };
        infos.push(entry);
        on_progress(LoadProgress {
            completed: index + 1,
            total,
        });
    }
    info!("Loaded date ranges for {} files", total);
    infos
}

/// Transient state of one timeline view.
///
/// Each `reset` starts a new generation; results loaded for an older
/// generation are discarded on `apply`, so a slow load for a file list
/// that has since changed never overwrites the current one.
#[derive(Debug, Default)]
pub struct TimelineSession {
    generation: u64,
    files: Vec<FileRef>,
    infos: Vec<FileDateInfo>,
}

impl TimelineSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file list. Returns the generation the caller must pass
    /// back to [`TimelineSession::apply`].
    pub fn reset(&mut self, files: Vec<FileRef>) -> u64 {
        self.generation += 1;
        self.files = files;
        self.infos.clear();
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    pub fn infos(&self) -> &[FileDateInfo] {
        &self.infos
    }

    /// Store loaded results if they belong to the current generation.
    pub fn apply(&mut self, generation: u64, infos: Vec<FileDateInfo>) -> bool {
        if generation != self.generation {
            info!(
                "Discarding {} stale results from generation {} (current {})",
                infos.len(),
                generation,
                self.generation
            );
            return false;
        }
        self.infos = infos;
        true
    }

    /// Reset to `files`, load them from `source` and apply the result.
    pub async fn load<S, F>(&mut self, source: &S, files: Vec<FileRef>, on_progress: F) -> bool
    where
        S: DateRangeSource,
        F: FnMut(LoadProgress),
    {
        let generation = self.reset(files);
        let infos = load_file_dates(source, &self.files, on_progress).await;
        self.apply(generation, infos)
    }

    pub fn layout(&self, config: &TimelineConfig) -> TimelineLayout {
        TimelineLayout::compute(&self.infos, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeSource {
        ranges: HashMap<String, FileDateRange>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn new(entries: &[(&str, &str, &str)]) -> Self {
            let ranges = entries
                .iter()
                .map(|(id, start, end)| {
                    (
                        id.to_string(),
                        FileDateRange {
                            start_date: Some(start.to_string()),
                            end_date: Some(end.to_string()),
                            ..Default::default()
                        },
                    )
                })
                .collect();
            FakeSource {
                ranges,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl DateRangeSource for FakeSource {
        async fn file_date_range(&self, file: &FileRef) -> anyhow::Result<FileDateRange> {
            self.calls.borrow_mut().push(file.file_id.clone());
            self.ranges
                .get(&file.file_id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no such file: {}", file.file_id))
        }
    }

    fn refs(ids: &[&str]) -> Vec<FileRef> {
        ids.iter()
            .map(|id| FileRef::new(*id, format!("{}.csv", id)))
            .collect()
    }

    #[tokio::test]
    async fn test_sequential_load_reports_progress_and_keeps_going() {
        let source = FakeSource::new(&[
            ("A", "2024-01-01", "2024-01-05"),
            ("B", "2024-01-10", "2024-01-12"),
        ]);
        let mut progress = Vec::new();
        let files = refs(&["A", "missing", "B"]);
        let infos = load_file_dates(&source, &files, |p| progress.push(p)).await;

        assert_eq!(*source.calls.borrow(), vec!["A", "missing", "B"]);
        assert_eq!(infos.len(), 3);
        assert!(infos[1].error.as_deref().unwrap().contains("no such file"));
        assert_eq!(infos[2].start_date_raw.as_deref(), Some("2024-01-10"));
        assert_eq!(
            progress.iter().map(|p| p.completed).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(progress[2].percent(), 100.0);
    }

    #[tokio::test]
    async fn test_session_layout() {
        let source = FakeSource::new(&[
            ("A", "2024-01-01", "2024-01-05"),
            ("B", "2024-01-10", "2024-01-12"),
        ]);
        let mut session = TimelineSession::new();
        assert!(session.load(&source, refs(&["A", "B"]), |_| {}).await);
        let layout = session.layout(&TimelineConfig::default());
        assert_eq!(layout.bounds.total_days, 12);
        assert_eq!(layout.files.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_generation_is_discarded() {
        let source = FakeSource::new(&[("A", "2024-01-01", "2024-01-05")]);
        let mut session = TimelineSession::new();
        let stale = session.reset(refs(&["A"]));
        let infos = load_file_dates(&source, session.files(), |_| {}).await;

        let current = session.reset(refs(&["B"]));
        assert!(!session.apply(stale, infos.clone()));
        assert!(session.infos().is_empty());
        assert!(session.apply(current, Vec::new()));
        assert_eq!(session.generation(), current);
    }

    #[test]
    fn test_progress_percent_with_no_files() {
        let progress = LoadProgress {
            completed: 0,
            total: 0,
        };
        assert_eq!(progress.percent(), 100.0);
    }
}
