//! Proportional bar placement within a timeline.

use crate::bounds::TimelineBounds;
use crate::config::TimelineConfig;
use crate::date_range::days_between;
use crate::file_info::FileDateInfo;
use chrono::NaiveDate;
use serde::Serialize;

/// Smallest width of a continuous bar, in percent of the timeline.
pub const MIN_CONTINUOUS_WIDTH: f64 = 0.1;

/// Smallest width of a single sampling-day mark, in percent of the timeline.
pub const MIN_DISCRETE_WIDTH: f64 = 0.3;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct BarGeometry {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl BarGeometry {
    /// Drawn as nothing.
    pub const EMPTY: BarGeometry = BarGeometry {
        left_percent: 0.0,
        width_percent: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        self.width_percent == 0.0
    }
}

/// Timeline origin and length, when the bounds can place anything at all.
fn origin(bounds: &TimelineBounds) -> Option<(NaiveDate, f64)> {
    let min_date = bounds.min_date?;
    if bounds.total_days <= 0 {
        return None;
    }
    Some((min_date, bounds.total_days as f64))
}

fn offset_percent(min_date: NaiveDate, date: NaiveDate, total_days: f64) -> f64 {
    (days_between(min_date, date) as f64 / total_days * 100.0).max(0.0)
}

/// One bar spanning `start` through `end` inclusive.
pub fn continuous_bar(
    bounds: &TimelineBounds,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> BarGeometry {
    let (Some((min_date, total_days)), Some(start), Some(end)) = (origin(bounds), start, end)
    else {
        return BarGeometry::EMPTY;
    };
    let span_days = (days_between(start, end) + 1) as f64;
    BarGeometry {
        left_percent: offset_percent(min_date, start, total_days),
        width_percent: (span_days / total_days * 100.0).max(MIN_CONTINUOUS_WIDTH),
    }
}

/// One single-day mark per sampling day.
pub fn discrete_bars(bounds: &TimelineBounds, days: &[NaiveDate]) -> Vec<BarGeometry> {
    let Some((min_date, total_days)) = origin(bounds) else {
        return Vec::new();
    };
    let width_percent = (100.0 / total_days).max(MIN_DISCRETE_WIDTH);
    days.iter()
        .map(|day| BarGeometry {
            left_percent: offset_percent(min_date, *day, total_days),
            width_percent,
        })
        .collect()
}

/// Bars for one file: a mark per sampling day for discrete files that have
/// any, otherwise a single continuous bar. Never returns an empty vector;
/// a file with no usable data gets one [`BarGeometry::EMPTY`].
pub fn bars_for_file(
    bounds: &TimelineBounds,
    file: &FileDateInfo,
    config: &TimelineConfig,
) -> Vec<BarGeometry> {
    let convention = config.dash_convention;
    if file.is_discrete {
        let bars = discrete_bars(bounds, &file.sampling_days(convention));
        if !bars.is_empty() {
            return bars;
        }
    }
    vec![continuous_bar(
        bounds,
        file.start_date(convention),
        file.end_date(convention),
    )]
}
