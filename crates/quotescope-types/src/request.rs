//! Validated fetch inputs.

use chrono::NaiveDate;

use crate::{DateRange, Ticker, ValidationError, require_ticker, validate};

/// A ticker and date range that have both passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesRequest {
    /// Normalized ticker.
    pub ticker: Ticker,
    /// Validated range.
    pub range: DateRange,
}

impl SeriesRequest {
    /// Validates raw presentation-layer inputs.
    ///
    /// The ticker is checked before the range, so an empty ticker is reported
    /// even when the dates are also wrong.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn new(
        raw_ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let ticker = require_ticker(raw_ticker)?;
        let range = validate(start, end)?;
        Ok(Self { ticker, range })
    }
}

impl std::fmt::Display for SeriesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.ticker, self.range)
    }
}
