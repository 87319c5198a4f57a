//! Daily OHLCV bar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of price and volume data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price during the session.
    pub high: f64,
    /// Lowest price during the session.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
}

impl DailyBar {
    /// Creates a new daily bar.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if the session closed above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if the session closed below its open.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_bar() -> DailyBar {
        let date = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        DailyBar::new(date, 130.28, 130.90, 124.17, 125.07, 112_117_500)
    }

    #[test]
    fn test_range() {
        let bar = create_test_bar();
        assert!((bar.range() - 6.73).abs() < 1e-9);
    }

    #[test]
    fn test_body() {
        let bar = create_test_bar();
        assert!((bar.body() - 5.21).abs() < 1e-9);
    }

    #[test]
    fn test_bearish() {
        let bar = create_test_bar();
        assert!(bar.is_bearish());
        assert!(!bar.is_bullish());
    }

    #[test]
    fn test_doji_is_neither() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap();
        let bar = DailyBar::new(date, 10.0, 11.0, 9.0, 10.0, 1);
        assert!(!bar.is_bullish());
        assert!(!bar.is_bearish());
    }
}
