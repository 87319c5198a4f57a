//! Validated date ranges.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::RangeError;

/// Validates a (start, end) pair, producing an inclusive [`DateRange`].
///
/// Pure check: ranges with `start > end` are rejected, never swapped.
///
/// # Errors
///
/// Returns [`RangeError::StartAfterEnd`] if start > end.
pub fn validate(start: NaiveDate, end: NaiveDate) -> Result<DateRange, RangeError> {
    DateRange::new(start, end)
}

/// An inclusive range of calendar dates with `start <= end`.
///
/// The fields are private so that every `DateRange` in circulation has
/// passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Creates the range covering `days` days up to and including `end`.
    #[must_use]
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let start = end - chrono::Duration::days(i64::from(days));
        Self { start, end }
    }

    /// Returns the first date of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the first instant of the range (start date, 00:00:00).
    #[must_use]
    pub fn first_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Returns the last instant of the range (end date, 23:59:59).
    #[must_use]
    pub fn last_instant(&self) -> NaiveDateTime {
        self.end
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| self.end.and_time(NaiveTime::MIN))
    }

    /// Returns the total number of calendar days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_new() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 31)).unwrap();

        assert_eq!(range.start(), date(2023, 1, 1));
        assert_eq!(range.end(), date(2023, 1, 31));
        assert_eq!(range.total_days(), 31);
    }

    #[test]
    fn test_start_after_end() {
        let err = validate(date(2023, 6, 1), date(2023, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            RangeError::StartAfterEnd {
                start: date(2023, 6, 1),
                end: date(2023, 1, 1),
            }
        );
    }

    #[test]
    fn test_single_day_is_valid() {
        let day = date(2024, 2, 29);
        assert_eq!(validate(day, day).unwrap(), DateRange::single_day(day));
        assert_eq!(DateRange::single_day(day).total_days(), 1);
    }

    #[test]
    fn test_trailing_days() {
        let range = DateRange::trailing_days(date(2024, 1, 1), 365);
        assert_eq!(range.start(), date(2023, 1, 1));
        assert!(range.contains(date(2023, 7, 4)));
        assert!(!range.contains(date(2024, 1, 2)));
    }

    #[test]
    fn test_instants() {
        let range = DateRange::single_day(date(2023, 1, 3));
        assert_eq!(range.first_instant().and_utc().timestamp(), 1_672_704_000);
        assert_eq!(range.last_instant().and_utc().timestamp(), 1_672_790_399);
    }

    proptest! {
        #[test]
        fn reversed_ranges_always_fail(a in 0i64..20_000, gap in 1i64..5_000) {
            let start = date(1990, 1, 1) + chrono::Duration::days(a + gap);
            let end = date(1990, 1, 1) + chrono::Duration::days(a);
            let is_start_after_end = matches!(
                validate(start, end),
                Err(RangeError::StartAfterEnd { .. })
            );
            prop_assert!(is_start_after_end);
        }
    }
}
