//! Interactive session command.
//!
//! One fetcher lives for the whole session, so asking for the same ticker and
//! dates again is answered from its cache. Changing the SMA period only
//! recomputes the average over the series already on screen.

use super::{DEFAULT_LOOKBACK_DAYS, default_start, fetch_spinner};
use crate::display::{default_export_path, no_data_message, render_report, write_series};
use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, DateSelect, InquireError, Select, Text};
use quotescope_lib::NO_DATA_REASON;
use quotescope_lib::prelude::*;
use std::io::Write;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Arc;

/// Allowed SMA periods in the interactive prompt.
pub(crate) const SMA_BOUNDS: RangeInclusive<usize> = 10..=100;

const TABLE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Fetch,
    ChangeSma,
    Export,
    ClearCache,
    Quit,
}

impl Action {
    /// Menu entries; export is offered only once a series is loaded.
    fn menu(loaded: bool) -> Vec<Self> {
        let mut actions = vec![Self::Fetch, Self::ChangeSma];
        if loaded {
            actions.push(Self::Export);
        }
        actions.extend([Self::ClearCache, Self::Quit]);
        actions
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Fetch => "Fetch data",
            Self::ChangeSma => "Change SMA period",
            Self::Export => "Export data",
            Self::ClearCache => "Clear cache",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// State carried between prompts.
#[derive(Debug)]
struct SessionState {
    period: NonZeroUsize,
    quiet: bool,
    last_ticker: Option<String>,
    series: Option<Arc<OhlcvSeries>>,
}

/// Run the interactive session until the user quits or cancels.
pub(crate) async fn session(config: ClientConfig, sma: NonZeroUsize, quiet: bool) -> Result<()> {
    let provider = YahooProvider::with_config(config).context("Failed to build HTTP client")?;
    let mut fetcher = SeriesFetcher::new(provider);
    let mut state = SessionState {
        period: sma,
        quiet,
        last_ticker: None,
        series: None,
    };

    loop {
        let choice = Select::new("What next?", Action::menu(state.series.is_some())).prompt();
        let action = match choice {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Menu prompt failed"),
        };

        match action {
            Action::Fetch => {
                if let Some(series) = prompt_fetch(&mut fetcher, &mut state).await? {
                    show(&series, state.period)?;
                    state.series = Some(series);
                }
            }
            Action::ChangeSma => {
                state.period = prompt_sma(state.period)?;
                if let Some(series) = &state.series {
                    show(series, state.period)?;
                }
            }
            Action::Export => {
                if let Some(series) = &state.series {
                    prompt_export(series)?;
                }
            }
            Action::ClearCache => {
                fetcher.clear_cache();
                println!("Cache cleared.");
            }
            Action::Quit => break,
        }
    }

    let stats = fetcher.cache_stats();
    tracing::info!(
        provider = fetcher.provider().name(),
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        "session finished"
    );
    Ok(())
}

async fn prompt_fetch<P: HistoryProvider>(
    fetcher: &mut SeriesFetcher<P>,
    state: &mut SessionState,
) -> Result<Option<Arc<OhlcvSeries>>> {
    let mut ticker_prompt = Text::new("Ticker symbol:");
    if let Some(last) = &state.last_ticker {
        ticker_prompt = ticker_prompt.with_default(last);
    }
    let Some(raw) = cancellable(ticker_prompt.prompt(), "Ticker")? else {
        return Ok(None);
    };

    let today = chrono::Utc::now().date_naive();
    let start = DateSelect::new("Start date:")
        .with_default(default_start(today))
        .with_help_message(&format!("Defaults to {DEFAULT_LOOKBACK_DAYS} days ago"))
        .prompt();
    let Some(start) = cancellable(start, "Start date")? else {
        return Ok(None);
    };
    let end = DateSelect::new("End date:").with_default(today).prompt();
    let Some(end) = cancellable(end, "End date")? else {
        return Ok(None);
    };

    let request = match SeriesRequest::new(&raw, start, end) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(None);
        }
    };
    state.last_ticker = Some(request.ticker.to_string());

    let spinner = fetch_spinner(&request, state.quiet);
    let result = fetcher.fetch_request(&request).await;
    spinner.finish_and_clear();

    Ok(result.series().map_or_else(
        || {
            eprintln!("{}", no_data_message(result.reason().unwrap_or(NO_DATA_REASON)));
            None
        },
        |series| Some(Arc::clone(series)),
    ))
}

fn prompt_sma(current: NonZeroUsize) -> Result<NonZeroUsize> {
    let value = CustomType::<usize>::new("SMA period (trading days):")
        .with_default(current.get().clamp(*SMA_BOUNDS.start(), *SMA_BOUNDS.end()))
        .with_help_message(&format!(
            "Between {} and {}",
            SMA_BOUNDS.start(),
            SMA_BOUNDS.end()
        ))
        .with_validator(|value: &usize| -> Result<Validation, CustomUserError> {
            Ok(if sma_in_bounds(*value) {
                Validation::Valid
            } else {
                Validation::Invalid(
                    format!(
                        "Enter a period between {} and {}",
                        SMA_BOUNDS.start(),
                        SMA_BOUNDS.end()
                    )
                    .into(),
                )
            })
        })
        .prompt();
    let Some(value) = cancellable(value, "SMA")? else {
        return Ok(current);
    };

    NonZeroUsize::new(value).context("SMA period must be positive")
}

fn prompt_export(series: &OhlcvSeries) -> Result<()> {
    let format = Select::new("Format:", OutputFormat::all().to_vec()).prompt();
    let Some(format) = cancellable(format, "Format")? else {
        return Ok(());
    };
    let default = default_export_path(series.ticker(), format);
    let path = Text::new("Save to:")
        .with_default(&default.to_string_lossy())
        .prompt();
    let Some(path) = cancellable(path, "Path")? else {
        return Ok(());
    };

    let path = PathBuf::from(path);
    write_series(series, &path, format)?;
    println!("Saved {} rows to: {}", series.len(), path.display());
    Ok(())
}

fn show(series: &OhlcvSeries, period: NonZeroUsize) -> Result<()> {
    let sma = compute_sma(series, period);
    let mut stdout = std::io::stdout().lock();
    render_report(&mut stdout, series, &sma, TABLE_ROWS, true)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Esc at a prompt goes back to the menu instead of ending the session.
fn cancellable<T>(answer: Result<T, InquireError>, prompt: &str) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{prompt} prompt failed")),
    }
}

fn sma_in_bounds(value: usize) -> bool {
    SMA_BOUNDS.contains(&value)
}
