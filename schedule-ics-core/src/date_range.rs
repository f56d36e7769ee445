//! Closed date range for calendar export.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};

/// Inclusive range of calendar dates. `end` before `start` is allowed and
/// simply contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Parse both bounds from YYYY-MM-DD strings.
    /// Missing or unparseable bounds are a `MissingDateRange` error.
    pub fn from_args(start: Option<&str>, end: Option<&str>) -> CoreResult<Self> {
        let start = start.and_then(parse_date).ok_or(CoreError::MissingDateRange)?;
        let end = end.and_then(parse_date).ok_or(CoreError::MissingDateRange)?;
        Ok(DateRange { start, end })
    }

    /// Every date in the range, ascending.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_args_parses_iso_dates() {
        let range = DateRange::from_args(Some("2025-01-06"), Some("2025-01-12")).unwrap();
        assert_eq!(range.start, date(2025, 1, 6));
        assert_eq!(range.end, date(2025, 1, 12));
        assert_eq!(range.len(), 7);
    }

    #[test]
    fn from_args_requires_both_bounds() {
        assert!(matches!(
            DateRange::from_args(None, Some("2025-01-12")),
            Err(CoreError::MissingDateRange)
        ));
        assert!(matches!(
            DateRange::from_args(Some("2025-01-06"), None),
            Err(CoreError::MissingDateRange)
        ));
        assert!(matches!(
            DateRange::from_args(Some("2025-02-30"), Some("2025-03-01")),
            Err(CoreError::MissingDateRange)
        ));
        assert!(matches!(
            DateRange::from_args(Some(""), Some("2025-03-01")),
            Err(CoreError::MissingDateRange)
        ));
    }

    #[test]
    fn days_is_inclusive_and_ascending() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 1));
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1)
            ]
        );
    }

    #[test]
    fn single_day_range() {
        let range = DateRange::new(date(2025, 5, 5), date(2025, 5, 5));
        assert_eq!(range.days().count(), 1);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = DateRange::new(date(2025, 5, 10), date(2025, 5, 1));
        assert_eq!(range.days().count(), 0);
        assert!(range.is_empty());
    }
}
