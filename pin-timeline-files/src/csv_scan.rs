//! On-demand date-range scan of a device/sensor CSV export.
//!
//! Exports vary in where they keep the timestamp, so the date column is the
//! first header with a `date`, `time`, `datetime` or `timestamp` word in it
//! (falling back to column 0).
//! Only the leading token of each cell is read, which drops any time of day.

use chrono::NaiveDate;
use log::debug;
use pin_timeline::date_format::{format_display_date, normalize_date, DashConvention};
use pin_timeline::date_range::days_between;
use pin_timeline::FileDateRange;
use std::collections::BTreeSet;

pub const NO_VALID_DATES: &str = "No valid dates found";

const DATE_HEADER_WORDS: [&str; 4] = ["date", "time", "datetime", "timestamp"];

/// Lowercased words of a header, split at punctuation, spaces and
/// camel-case humps: `"OBS DATE"`, `"obs_date"` and `"ObsDate"` all give
/// `["obs", "date"]`.
fn header_words(header: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in header.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Index of the column holding each row's timestamp.
pub fn find_date_column(headers: &csv::StringRecord) -> usize {
    headers
        .iter()
        .position(|h| {
            header_words(h)
                .iter()
                .any(|w| DATE_HEADER_WORDS.contains(&w.as_str()))
        })
        .unwrap_or(0)
}

/// Scan CSV text for the dates it covers.
///
/// Dates are reported as `DD/MM/YYYY`. Sampling days are listed only for
/// discrete files.
pub fn scan_csv_dates(
    csv_data: &str,
    convention: DashConvention,
    discrete: bool,
) -> anyhow::Result<FileDateRange> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let column = find_date_column(rdr.headers()?);
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut skipped = 0u32;

    for result in rdr.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                debug!("csv_scan: unreadable row: {}", e);
                skipped += 1;
                continue;
            }
        };
        let cell = record.get(column).unwrap_or("");
        let token = cell.split_whitespace().next().unwrap_or("");
        match normalize_date(token, convention) {
            Some(day) => {
                days.insert(day);
            }
            None => skipped += 1,
        }
    }

    debug!(
        "csv_scan: {} distinct days in column {}, {} rows skipped",
        days.len(),
        column,
        skipped
    );

    let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
        return Ok(FileDateRange::failed(NO_VALID_DATES));
    };

    Ok(FileDateRange {
        total_days: Some(days_between(first, last) + 1),
        start_date: Some(format_display_date(&first)),
        end_date: Some(format_display_date(&last)),
        unique_dates: discrete.then(|| days.iter().map(format_display_date).collect()),
        is_crop: Some(discrete),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const YMD: DashConvention = DashConvention::YearMonthDay;

    #[test]
    fn test_scan_continuous_export() {
        let csv_data = "\
ChunkEnd,DPM,Nall
2024-01-05 10:00:00,1,20
2024-01-03 00:00:00,0,18
not-a-date,0,0
2024-01-12 23:59:00,3,40
";
        let range = scan_csv_dates(csv_data, YMD, false).unwrap();
        assert_eq!(range.start_date.as_deref(), Some("03/01/2024"));
        assert_eq!(range.end_date.as_deref(), Some("12/01/2024"));
        assert_eq!(range.total_days, Some(10));
        assert_eq!(range.unique_dates, None);
        assert_eq!(range.is_crop, Some(false));
        assert_eq!(range.error, None);
    }

    #[test]
    fn test_scan_finds_named_date_column() {
        let csv_data = "\
site,Date,count
S1,05/02/2024,3
S1,01/02/2024,4
S1,05/02/2024,1
";
        let range = scan_csv_dates(csv_data, YMD, true).unwrap();
        assert_eq!(range.start_date.as_deref(), Some("01/02/2024"));
        assert_eq!(range.end_date.as_deref(), Some("05/02/2024"));
        assert_eq!(
            range.unique_dates,
            Some(vec!["01/02/2024".to_string(), "05/02/2024".to_string()])
        );
        assert_eq!(range.is_crop, Some(true));
    }

    #[test]
    fn test_scan_with_no_dates_reports_error() {
        let csv_data = "Date,value\nnope,1\n,2\n";
        let range = scan_csv_dates(csv_data, YMD, false).unwrap();
        assert_eq!(range.error.as_deref(), Some(NO_VALID_DATES));
        assert_eq!(range.start_date, None);
        assert_eq!(range.total_days, None);
    }

    #[test]
    fn test_find_date_column() {
        let headers = csv::StringRecord::from(vec!["id", "Timestamp", "value"]);
        assert_eq!(find_date_column(&headers), 1);
        let headers = csv::StringRecord::from(vec!["a", "b"]);
        assert_eq!(find_date_column(&headers), 0);
        let headers = csv::StringRecord::from(vec!["Site", "Validated", "LastUpdated", "OBS DATE"]);
        assert_eq!(find_date_column(&headers), 3);
        let headers = csv::StringRecord::from(vec!["Runtime", "sample_time"]);
        assert_eq!(find_date_column(&headers), 1);
        let headers = csv::StringRecord::from(vec!["id", "DateTime"]);
        assert_eq!(find_date_column(&headers), 1);
    }

    #[test]
    fn test_header_words() {
        assert_eq!(header_words("ObsDate"), vec!["obs", "date"]);
        assert_eq!(header_words("obs_date"), vec!["obs", "date"]);
        assert_eq!(header_words("TIMESTAMP"), vec!["timestamp"]);
        assert_eq!(header_words("Validated"), vec!["validated"]);
    }

    #[test]
    fn test_scan_skips_lookalike_headers() {
        let csv_data = "\
Site,Validated,Date
S1,yes,02/03/2024
S1,no,04/03/2024
";
        let range = scan_csv_dates(csv_data, YMD, false).unwrap();
        assert_eq!(range.error, None);
        assert_eq!(range.start_date.as_deref(), Some("02/03/2024"));
        assert_eq!(range.end_date.as_deref(), Some("04/03/2024"));
    }
}
