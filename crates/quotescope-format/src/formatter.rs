//! Output format abstraction.

use quotescope_types::{DailyBar, OhlcvSeries, Ticker};
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// Tab-separated values with the CSV header.
    Tsv,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Tsv => "tsv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Tsv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "tsv" => Ok(Self::Tsv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Default download file name for a ticker, e.g. `AAPL_data.csv`.
#[must_use]
pub fn export_file_name(ticker: &Ticker, format: OutputFormat) -> String {
    format!("{}_data.{}", ticker, format.extension())
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes daily bars to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_bars<W: Write + Send>(&self, bars: &[DailyBar], writer: W)
    -> Result<(), FormatError>;

    /// Writes a whole series to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_series<W: Write + Send>(
        &self,
        series: &OhlcvSeries,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_bars(series.bars(), writer)
    }

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
