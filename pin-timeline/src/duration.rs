use crate::date_format::{normalize_date, DashConvention};
use crate::date_range::days_between;

/// Inclusive day count from `start_raw` through `end_raw`.
///
/// Returns `None` when either string does not normalize. Reversed ranges
/// are passed through unclamped, so `end < start` gives zero or less.
pub fn duration_days(start_raw: &str, end_raw: &str, convention: DashConvention) -> Option<i64> {
    let start = normalize_date(start_raw, convention)?;
    let end = normalize_date(end_raw, convention)?;
    Some(days_between(start, end) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YMD: DashConvention = DashConvention::YearMonthDay;

    #[test]
    fn test_same_day_is_one() {
        assert_eq!(duration_days("05/01/2024", "05/01/2024", YMD), Some(1));
        assert_eq!(duration_days("2024-01-05", "5/1/2024", YMD), Some(1));
    }

    #[test]
    fn test_inclusive_span() {
        assert_eq!(duration_days("01/01/2024", "31/01/2024", YMD), Some(31));
        assert_eq!(duration_days("2023-01-01", "2023-12-31", YMD), Some(365));
    }

    #[test]
    fn test_reversed_range_is_not_symmetric() {
        let forward = duration_days("01/01/2024", "10/01/2024", YMD);
        let backward = duration_days("10/01/2024", "01/01/2024", YMD);
        assert_eq!(forward, Some(10));
        assert_eq!(backward, Some(-8));
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_unknown_when_either_side_invalid() {
        assert_eq!(duration_days("", "01/01/2024", YMD), None);
        assert_eq!(duration_days("01/01/2024", "99/99/9999", YMD), None);
    }
}
