//! Normalization of the textual dates produced by CSV exports and database
//! round-trips.

use crate::error::TimelineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical storage format: "YYYY-MM-DD"
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Display format used in timeline tables and emitted by date-range sources: "DD/MM/YYYY"
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// How a three-part dash-delimited date is read.
///
/// Older exports wrote `YYYY-DD-MM`; everything written since writes
/// `YYYY-MM-DD`. Both are still in circulation, so the reading is a
/// configuration choice rather than something inferred per string.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashConvention {
    /// `YYYY-MM-DD`
    #[default]
    YearMonthDay,
    /// Legacy `YYYY-DD-MM`
    YearDayMonth,
}

impl FromStr for DashConvention {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ymd" | "year_month_day" => Ok(DashConvention::YearMonthDay),
            "ydm" | "year_day_month" => Ok(DashConvention::YearDayMonth),
            other => Err(TimelineError::UnknownDashConvention(other.to_string())),
        }
    }
}

/// Parse a heterogeneous textual date into a calendar date.
///
/// Any time of day (after the first whitespace or `T`) is dropped, then the
/// date part is tried in order:
/// 1. `D/M/YYYY` (leading zeros optional)
/// 2. three numeric dash parts, read per `convention`
/// 3. ISO-8601 basic `YYYYMMDD` or ordinal `YYYY-DDD`
///
/// A date part that has the shape of form 1 or 2 is decided by that form
/// alone, so `31/02/2024` is `None` rather than whatever a looser parser
/// makes of it.
pub fn normalize_date(raw: &str, convention: DashConvention) -> Option<NaiveDate> {
    let date_part = raw
        .trim()
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or("");
    if date_part.is_empty() {
        return None;
    }

    if let Some([day, month, year]) = numeric_parts(date_part, '/') {
        return ymd(year, month, day);
    }

    if let Some([year, second, third]) = numeric_parts(date_part, '-') {
        return match convention {
            DashConvention::YearMonthDay => ymd(year, second, third),
            DashConvention::YearDayMonth => ymd(year, third, second),
        };
    }

    parse_iso(date_part)
}

/// Format a date as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Format a date as "DD/MM/YYYY"
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

fn numeric_parts(s: &str, delimiter: char) -> Option<[i64; 3]> {
    let parts: Vec<&str> = s.split(delimiter).collect();
    if parts.len() != 3 {
        return None;
    }
    let mut out = [0i64; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        let part = part.trim();
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }
    Some(out)
}

fn ymd(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
}

fn parse_iso(s: &str) -> Option<NaiveDate> {
    ["%Y%m%d", "%Y-%j"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}
