//! Global timeline extent and the month/year header grid.

use crate::config::{MonthMode, TimelineConfig};
use crate::date_range::{days_between, MonthRange};
use crate::file_info::FileDateInfo;
use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

/// One year header cell covering `month_count` consecutive month cells.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct YearSpan {
    pub year: i32,
    pub start_month_index: usize,
    pub month_count: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TimelineBounds {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Inclusive day span from `min_date` through `max_date`.
    pub total_days: i64,
    /// First-of-month dates, ascending.
    pub months: Vec<NaiveDate>,
    pub years: Vec<YearSpan>,
}

impl TimelineBounds {
    /// Bounds for a timeline with nothing to show.
    pub fn empty() -> Self {
        TimelineBounds {
            min_date: None,
            max_date: None,
            total_days: 0,
            months: Vec::new(),
            years: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_date.is_none()
    }

    /// Compute bounds over every file whose start and end both normalize.
    /// Files with missing or unreadable dates are left out.
    pub fn build(files: &[FileDateInfo], config: &TimelineConfig) -> Self {
        let spans: Vec<(NaiveDate, NaiveDate)> = files
            .iter()
            .filter_map(|file| file.date_span(config.dash_convention))
            .collect();

        debug!(
            "bounds: {} of {} files have a valid date range",
            spans.len(),
            files.len()
        );

        let (Some(min_date), Some(max_date)) = (
            spans.iter().map(|(start, _)| *start).min(),
            spans.iter().map(|(_, end)| *end).max(),
        ) else {
            return TimelineBounds::empty();
        };

        let months: Vec<NaiveDate> = match config.month_mode {
            MonthMode::Contiguous => MonthRange::new(min_date, max_date).collect(),
            MonthMode::Sparse => spans
                .iter()
                .flat_map(|(start, end)| MonthRange::new(*start, *end))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        };
        let years = group_months_by_year(&months);

        TimelineBounds {
            min_date: Some(min_date),
            max_date: Some(max_date),
            total_days: days_between(min_date, max_date) + 1,
            months,
            years,
        }
    }
}

/// Run-length encode a month sequence by calendar year.
pub fn group_months_by_year(months: &[NaiveDate]) -> Vec<YearSpan> {
    let mut years: Vec<YearSpan> = Vec::new();
    for (index, month) in months.iter().enumerate() {
        match years.last_mut() {
            Some(span) if span.year == month.year() => span.month_count += 1,
            _ => years.push(YearSpan {
                year: month.year(),
                start_month_index: index,
                month_count: 1,
            }),
        }
    }
    years
}
