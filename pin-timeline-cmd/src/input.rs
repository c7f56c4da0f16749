//! Turning command-line source arguments into configuration and loaded
//! file date records.

use crate::SourceArgs;
use anyhow::Context;
use log::info;
use pin_timeline::source::TimelineSession;
use pin_timeline::{LoadProgress, TimelineConfig};
use pin_timeline_files::manifest::ManifestSource;
use pin_timeline_files::{list_csv_files, CsvDirectorySource};

/// The configuration file (if any) with command-line overrides applied.
pub fn load_config(args: &SourceArgs) -> anyhow::Result<TimelineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            TimelineConfig::from_json_str(&json)?
        }
        None => TimelineConfig::default(),
    };
    if let Some(dash) = args.dash_convention {
        config.dash_convention = dash;
    }
    Ok(config)
}

fn log_progress(progress: LoadProgress) {
    info!(
        "Loaded {}/{} files ({:.0}%)",
        progress.completed,
        progress.total,
        progress.percent()
    );
}

/// Load every file named by `args` into a fresh session.
pub async fn load_session(
    args: &SourceArgs,
    config: &TimelineConfig,
) -> anyhow::Result<TimelineSession> {
    let mut session = TimelineSession::new();
    match (&args.dir, &args.manifest) {
        (Some(dir), _) => {
            let files = list_csv_files(dir)?;
            let source = CsvDirectorySource::new(dir, config);
            session.load(&source, files, log_progress).await;
        }
        (None, Some(path)) => {
            let source = ManifestSource::from_path(path)?;
            let files = source.file_refs();
            session.load(&source, files, log_progress).await;
        }
        (None, None) => anyhow::bail!("either --dir or --manifest is required"),
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pin_timeline::DashConvention;

    fn args() -> SourceArgs {
        SourceArgs {
            dir: None,
            manifest: None,
            config: None,
            dash_convention: None,
        }
    }

    #[test]
    fn test_default_config_without_file() {
        let config = load_config(&args()).unwrap();
        assert_eq!(config, TimelineConfig::default());
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut a = args();
        a.dash_convention = Some(DashConvention::YearDayMonth);
        let config = load_config(&a).unwrap();
        assert_eq!(config.dash_convention, DashConvention::YearDayMonth);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let mut a = args();
        a.config = Some("/definitely/not/here.json".into());
        let err = load_config(&a).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[tokio::test]
    async fn test_load_requires_a_source() {
        let err = load_session(&args(), &TimelineConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("--dir or --manifest"));
    }
}
