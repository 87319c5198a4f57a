//! Yahoo chart API response decoding.

use chrono::DateTime;
use quotescope_types::{DailyBar, Ticker};
use serde::Deserialize;

use crate::FetchError;

/// Top-level body of a v8 chart response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Clone, Deserialize)]
struct Chart {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartData {
    #[serde(default)]
    meta: Meta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Meta {
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

impl ChartResponse {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Malformed`] if the body is not a chart response.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Converts the response into daily bars.
    ///
    /// Rows missing any of open/high/low/close are skipped; a missing volume
    /// reads as zero. A response without timestamps means the range held no
    /// trading days and yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the body carries a provider error or lacks the
    /// expected structure.
    pub fn into_bars(self, ticker: &Ticker) -> Result<Vec<DailyBar>, FetchError> {
        if let Some(err) = self.chart.error {
            return Err(if err.code == "Not Found" {
                FetchError::SymbolNotFound {
                    ticker: ticker.to_string(),
                }
            } else {
                FetchError::Provider {
                    code: err.code,
                    description: err.description,
                }
            });
        }

        let Some(data) = self
            .chart
            .result
            .ok_or_else(|| FetchError::Malformed("empty result with no error".into()))?
            .into_iter()
            .next()
        else {
            return Ok(Vec::new());
        };

        let Some(timestamps) = data.timestamp else {
            return Ok(Vec::new());
        };

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Malformed("no quote data".into()))?;

        let offset = data.meta.gmtoffset;
        let mut bars = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            let (Some(open), Some(high), Some(low), Some(close)) = (
                value_at(&quote.open, i),
                value_at(&quote.high, i),
                value_at(&quote.low, i),
                value_at(&quote.close, i),
            ) else {
                tracing::debug!(%ticker, ts, "skipping incomplete row");
                continue;
            };

            let date = DateTime::from_timestamp(ts + offset, 0)
                .ok_or_else(|| FetchError::Malformed(format!("invalid timestamp: {ts}")))?
                .date_naive();
            let volume = value_at(&quote.volume, i).unwrap_or(0);

            bars.push(DailyBar::new(date, open, high, low, close, volume));
        }

        Ok(bars)
    }
}

fn value_at<T: Copy>(values: &[Option<T>], i: usize) -> Option<T> {
    values.get(i).copied().flatten()
}
