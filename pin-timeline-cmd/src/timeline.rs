//! The `timeline` subcommand: load, lay out, print.

use crate::input::{load_config, load_session};
use crate::SourceArgs;
use log::info;
use pin_timeline::date_format::format_display_date;
use pin_timeline::duration::duration_days;
use pin_timeline::filter::DateWindow;
use pin_timeline::{
    normalize_date, DashConvention, FileDateInfo, MonthMode, TimelineConfig, TimelineError,
    TimelineLayout,
};
use std::fmt::Write;

fn parse_window_bound(
    raw: Option<&str>,
    convention: DashConvention,
) -> Result<Option<chrono::NaiveDate>, TimelineError> {
    raw.map(|s| {
        normalize_date(s, convention).ok_or_else(|| TimelineError::InvalidDate(s.to_string()))
    })
    .transpose()
}

pub async fn run_timeline(
    args: &SourceArgs,
    sparse_months: bool,
    (from, to): (Option<&str>, Option<&str>),
    json: bool,
) -> anyhow::Result<()> {
    let mut config = load_config(args)?;
    if sparse_months {
        config.month_mode = MonthMode::Sparse;
    }
    let window = DateWindow {
        from: parse_window_bound(from, config.dash_convention)?,
        to: parse_window_bound(to, config.dash_convention)?,
    };

    let session = load_session(args, &config).await?;
    let infos = window.apply(session.infos().to_vec(), config.dash_convention);
    info!(
        "{} of {} files inside the date window",
        infos.len(),
        session.infos().len()
    );

    let layout = TimelineLayout::compute(&infos, &config);
    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print!("{}", render_table(&layout, &infos, &config));
    }
    Ok(())
}

fn display_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| format_display_date(&d))
}

/// Plain-text rendering of a layout: a header summary followed by one row
/// per file.
pub fn render_table(
    layout: &TimelineLayout,
    infos: &[FileDateInfo],
    config: &TimelineConfig,
) -> String {
    let convention = config.dash_convention;
    let bounds = &layout.bounds;
    let mut out = String::new();

    if bounds.is_empty() {
        let _ = writeln!(out, "No files with valid dates.");
    } else {
        let _ = writeln!(
            out,
            "Timeline {} - {} ({} days)",
            display_or_dash(bounds.min_date),
            display_or_dash(bounds.max_date),
            bounds.total_days
        );
        let years: Vec<String> = bounds
            .years
            .iter()
            .map(|y| format!("{} ({} months)", y.year, y.month_count))
            .collect();
        let _ = writeln!(out, "Years:  {}", years.join(", "));
        let months: Vec<String> = bounds
            .months
            .iter()
            .map(|m| m.format("%b %Y").to_string())
            .collect();
        let _ = writeln!(out, "Months: {}", months.join(", "));
    }

    let name_width = infos
        .iter()
        .map(|i| i.file_name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<10}  {:<10}  {:>6}  {:>7}  {:>7}",
        "FILE", "START", "END", "DAYS", "LEFT%", "WIDTH%"
    );

    for (info, file_bars) in infos.iter().zip(&layout.files) {
        if let Some(error) = &info.error {
            let _ = writeln!(out, "{:<name_width$}  error: {}", info.file_name, error);
            continue;
        }
        let days = match (&info.start_date_raw, &info.end_date_raw) {
            (Some(start), Some(end)) => duration_days(start, end, convention)
                .map_or_else(|| "-".to_string(), |d| d.to_string()),
            _ => "-".to_string(),
        };
        let bar = file_bars.bars[0];
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<10}  {:<10}  {:>6}  {:>7.2}  {:>7.2}",
            info.file_name,
            display_or_dash(info.start_date(convention)),
            display_or_dash(info.end_date(convention)),
            days,
            bar.left_percent,
            bar.width_percent
        );
        if file_bars.bars.len() > 1 {
            let _ = writeln!(
                out,
                "{:<name_width$}  {} sampling days",
                "",
                file_bars.bars.len()
            );
        }
    }
    out
}
