use pin_timeline::duration::duration_days;
use pin_timeline::DashConvention;

/// Inclusive day count as text, `unknown` when either date is unreadable.
pub fn describe_duration(start: &str, end: &str, convention: DashConvention) -> String {
    match duration_days(start, end, convention) {
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{} days", days),
        None => "unknown".to_string(),
    }
}
