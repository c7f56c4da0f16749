//! The `groups` subcommand.

use crate::input::{load_config, load_session};
use crate::SourceArgs;
use pin_timeline::date_format::format_display_date;
use pin_timeline::grouping::{group_files, Grouping};
use std::fmt::Write;

pub async fn run_groups(args: &SourceArgs, json: bool) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let session = load_session(args, &config).await?;
    let grouping = group_files(session.infos(), config.dash_convention);
    if json {
        println!("{}", serde_json::to_string_pretty(&grouping)?);
    } else {
        print!("{}", render_groups(&grouping));
    }
    Ok(())
}

pub fn render_groups(grouping: &Grouping) -> String {
    let mut out = String::new();
    for group in &grouping.groups {
        let envelope = match (group.start, group.end) {
            (Some(start), Some(end)) => {
                format!("{} - {}", format_display_date(&start), format_display_date(&end))
            }
            _ => "no valid dates".to_string(),
        };
        let _ = writeln!(
            out,
            "{}  {} files  {}",
            group.key,
            group.file_ids.len(),
            envelope
        );
    }
    if !grouping.ungrouped.is_empty() {
        let _ = writeln!(out, "Ungrouped: {}", grouping.ungrouped.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pin_timeline::{DashConvention, FileDateInfo};

    fn info(name: &str, start: &str, end: &str) -> FileDateInfo {
        FileDateInfo {
            file_id: name.to_string(),
            file_name: name.to_string(),
            start_date_raw: Some(start.to_string()),
            end_date_raw: Some(end.to_string()),
            unique_dates: None,
            is_discrete: false,
            error: None,
        }
    }

    #[test]
    fn test_render_groups() {
        let infos = vec![
            info("ProjA_FPOD_S1_2024.csv", "2024-01-01", "2024-12-31"),
            info("ProjA_FPOD_S1_2025.csv", "2025-01-01", "2025-03-31"),
            info("onlyonepart.csv", "2024-01-01", "2024-01-02"),
        ];
        let grouping = group_files(&infos, DashConvention::YearMonthDay);
        let text = render_groups(&grouping);
        assert!(text.contains("ProjA_FPOD_S1  2 files  01/01/2024 - 31/03/2025"));
        assert!(text.contains("Ungrouped: onlyonepart.csv"));
    }
}
