//! Fetch command implementation.
//!
//! Validates the request, fetches it once, renders the table and charts, and
//! optionally writes the data out.

use super::{default_start, fetch_spinner, parse_date};
use crate::display::{
    default_export_path, is_stdout, no_data_message, render_report, write_series,
};
use anyhow::{Context, Result};
use quotescope_lib::NO_DATA_REASON;
use quotescope_lib::prelude::*;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Options for a single fetch.
#[derive(Debug)]
pub(crate) struct FetchOptions {
    pub(crate) start: Option<String>,
    pub(crate) end: Option<String>,
    pub(crate) sma: NonZeroUsize,
    pub(crate) rows: usize,
    pub(crate) output: Option<PathBuf>,
    pub(crate) export: bool,
    pub(crate) format: OutputFormat,
    pub(crate) charts: bool,
    pub(crate) quiet: bool,
}

impl FetchOptions {
    /// Where to write the data, if anywhere.
    fn export_path(&self, ticker: &Ticker) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| self.export.then(|| default_export_path(ticker, self.format)))
    }
}

/// Fetch daily prices for a ticker and show them.
pub(crate) async fn fetch(ticker: &str, config: ClientConfig, options: FetchOptions) -> Result<()> {
    let end = parse_date(options.end.as_deref(), "end")?
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let start =
        parse_date(options.start.as_deref(), "start")?.unwrap_or_else(|| default_start(end));

    // Validation errors stop here, before any request is made
    let request = SeriesRequest::new(ticker, start, end)?;

    let provider = YahooProvider::with_config(config).context("Failed to build HTTP client")?;
    let mut fetcher = SeriesFetcher::new(provider);

    let spinner = fetch_spinner(&request, options.quiet);
    let result = fetcher.fetch_request(&request).await;
    spinner.finish_and_clear();

    let Some(series) = result.series() else {
        eprintln!("{}", no_data_message(result.reason().unwrap_or(NO_DATA_REASON)));
        return Ok(());
    };

    let export_path = options.export_path(series.ticker());
    let to_stdout = export_path.as_deref().is_some_and(is_stdout);

    // Exported data owns stdout when written there
    if !to_stdout {
        let sma = compute_sma(series, options.sma);
        let mut stdout = std::io::stdout().lock();
        render_report(&mut stdout, series, &sma, options.rows, options.charts)?;
        stdout.flush()?;
    }

    if let Some(path) = export_path {
        write_series(series, &path, options.format)?;
        if !to_stdout && !options.quiet {
            println!("\nSaved {} rows to: {}", series.len(), path.display());
        }
    }

    Ok(())
}
