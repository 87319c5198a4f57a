//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a trailing window. The first
//! `period - 1` positions have no value.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use quotescope_types::OhlcvSeries;
use serde::Serialize;

/// Period used when the caller does not pick one.
pub const DEFAULT_SMA_PERIOD: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(period) => period,
    None => unreachable!(),
};

/// One SMA position, aligned to a bar of the source series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmaPoint {
    /// Date of the aligned bar.
    pub date: NaiveDate,
    /// Mean close over the trailing window, or `None` before a full window exists.
    pub value: Option<f64>,
}

/// SMA values with the same length and date order as the source series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSma {
    period: NonZeroUsize,
    points: Vec<SmaPoint>,
}

impl DerivedSma {
    /// Returns the window length.
    #[must_use]
    pub const fn period(&self) -> NonZeroUsize {
        self.period
    }

    /// Returns all positions, including the undefined leading ones.
    #[must_use]
    pub fn points(&self) -> &[SmaPoint] {
        &self.points
    }

    /// Returns the value at `index`, or `None` if undefined or out of range.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|point| point.value)
    }

    /// Iterates over the values, `None` marking positions without a full window.
    pub fn values(&self) -> impl ExactSizeIterator<Item = Option<f64>> + '_ {
        self.points.iter().map(|point| point.value)
    }

    /// Returns the number of positions that hold a value.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|point| point.value.is_some()).count()
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the source series was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Computes the simple moving average of closing prices.
///
/// Pure and cheap; callers recompute it whenever the period changes instead of
/// caching it.
#[must_use]
pub fn compute_sma(series: &OhlcvSeries, period: NonZeroUsize) -> DerivedSma {
    let window = period.get();
    let bars = series.bars();
    let mut points: Vec<SmaPoint> = bars
        .iter()
        .map(|bar| SmaPoint {
            date: bar.date,
            value: None,
        })
        .collect();

    if bars.len() >= window {
        let mut sum: f64 = bars[..window].iter().map(|bar| bar.close).sum();
        points[window - 1].value = Some(sum / window as f64);

        // Roll the window forward
        for i in window..bars.len() {
            sum += bars[i].close - bars[i - window].close;
            points[i].value = Some(sum / window as f64);
        }
    }

    DerivedSma { period, points }
}
