//! Fetch, cache, and export historical stock prices.
//!
//! This is a facade crate that re-exports functionality from the quotescope
//! workspace crates for convenient access.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quotescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use quotescope_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use quotescope_fetch::{
    CacheStats, ChartClient, ClientConfig, FetchError, FetchResult, HistoryProvider,
    NO_DATA_REASON, SeriesCache, SeriesFetcher, YahooProvider, url,
};

// Re-export derived series
#[cfg(feature = "indicators")]
pub use quotescope_indicators::{DEFAULT_SMA_PERIOD, DerivedSma, SmaPoint, compute_sma};

// Re-export formatters
#[cfg(feature = "format")]
pub use quotescope_format::{
    CSV_HEADER, CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
    export_file_name,
};

/// Prelude module for convenient imports.
///
/// ```
/// use quotescope_lib::prelude::*;
/// ```
pub mod prelude {
    pub use quotescope_types::{
        DailyBar, DateRange, InputError, OhlcvSeries, RangeError, SeriesRequest, Ticker,
        ValidationError, normalize, require_ticker, validate,
    };

    #[cfg(feature = "fetch")]
    pub use quotescope_fetch::{
        ClientConfig, FetchResult, HistoryProvider, SeriesFetcher, YahooProvider,
    };

    #[cfg(feature = "indicators")]
    pub use quotescope_indicators::{DEFAULT_SMA_PERIOD, DerivedSma, compute_sma};

    #[cfg(feature = "format")]
    pub use quotescope_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, export_file_name,
    };
}
