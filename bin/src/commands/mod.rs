//! CLI command implementations.

pub(crate) mod fetch;
pub(crate) mod session;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use quotescope_lib::prelude::*;
use std::time::Duration;

/// Default lookback when no start date is given.
pub(crate) const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Parse an optional `YYYY-MM-DD` argument.
pub(crate) fn parse_date(value: Option<&str>, label: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .with_context(|| format!("Invalid {label} date: {s}"))
        })
        .transpose()
}

/// Start date used when none is given: one lookback before `end`.
pub(crate) fn default_start(end: NaiveDate) -> NaiveDate {
    DateRange::trailing_days(end, DEFAULT_LOOKBACK_DAYS).start()
}

/// Spinner shown while a request is in flight.
pub(crate) fn fetch_spinner(request: &SeriesRequest, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Fetching {request}"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
