//! Date-ordered OHLCV series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{DailyBar, DateRange, Ticker};

/// Daily bars for one ticker over one requested range.
///
/// Bars are sorted by date ascending and dates are unique. A series is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OhlcvSeries {
    ticker: Ticker,
    range: DateRange,
    bars: Vec<DailyBar>,
}

impl OhlcvSeries {
    /// Builds a series from provider records in any order.
    ///
    /// When a date appears more than once, the record seen last wins.
    #[must_use]
    pub fn from_bars(
        ticker: Ticker,
        range: DateRange,
        bars: impl IntoIterator<Item = DailyBar>,
    ) -> Self {
        let by_date: BTreeMap<NaiveDate, DailyBar> =
            bars.into_iter().map(|bar| (bar.date, bar)).collect();
        Self {
            ticker,
            range,
            bars: by_date.into_values().collect(),
        }
    }

    /// Returns the ticker this series belongs to.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Returns the range that was requested.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the bars, ordered by date.
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the series has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the first trading date, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|bar| bar.date)
    }

    /// Returns the last trading date, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|bar| bar.date)
    }

    /// Iterates over closing prices in date order.
    pub fn closes(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.close)
    }

    /// Iterates over volumes in date order.
    pub fn volumes(&self) -> impl ExactSizeIterator<Item = u64> + '_ {
        self.bars.iter().map(|bar| bar.volume)
    }
}
