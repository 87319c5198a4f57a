//! Error types for quotescope input validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for rejected ticker input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The ticker was empty after trimming.
    #[error("Please enter a stock ticker symbol")]
    EmptyTicker,
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("End date must fall after start date ({start} > {end})")]
    StartAfterEnd {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Either kind of input rejection, reported before any fetch runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The ticker was rejected.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The date range was rejected.
    #[error(transparent)]
    Range(#[from] RangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message() {
        let err = RangeError::StartAfterEnd {
            start: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2023-06-01"));
        assert!(msg.contains("2023-01-01"));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = ValidationError::from(InputError::EmptyTicker);
        assert_eq!(err.to_string(), InputError::EmptyTicker.to_string());
    }
}
