use chrono::{Datelike, Months, NaiveDate};

/// Yields the first day of every calendar month from the month containing
/// the start date through the month containing the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct MonthRange {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl MonthRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        MonthRange {
            next: Some(first_of_month(start)),
            last: first_of_month(end),
        }
    }
}

impl Iterator for MonthRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|month| *month <= self.last)?;
        self.next = current.checked_add_months(Months::new(1));
        Some(current)
    }
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
