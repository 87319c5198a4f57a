//! CSV output format.

use chrono::NaiveDate;
use quotescope_types::DailyBar;
use serde::Deserialize;
use std::io::{Read, Write};

use crate::{FormatError, Formatter};

/// Header row written before the data.
pub const CSV_HEADER: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

/// CSV formatter.
///
/// Dates are written as ISO 8601 (`YYYY-MM-DD`) and prices in their shortest
/// round-trip decimal form, so [`CsvFormatter::read_bars`] recovers the exact
/// values that were written.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }

    /// Parses bars previously written by a formatter with the same settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a row is malformed or a value does not parse.
    pub fn read_bars<R: Read>(&self, reader: R) -> Result<Vec<DailyBar>, FormatError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.include_header)
            .from_reader(reader);

        reader
            .deserialize::<CsvRow>()
            .map(|row| row.map(DailyBar::from).map_err(FormatError::from))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: u64,
}

impl From<CsvRow> for DailyBar {
    fn from(row: CsvRow) -> Self {
        Self::new(row.date, row.open, row.high, row.low, row.close, row.volume)
    }
}

impl Formatter for CsvFormatter {
    fn write_bars<W: Write + Send>(
        &self,
        bars: &[DailyBar],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = char::from(self.delimiter);

        if self.include_header {
            writeln!(writer, "{}", CSV_HEADER.join(&d.to_string()))?;
        }

        for bar in bars {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                bar.date.format("%Y-%m-%d"),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
