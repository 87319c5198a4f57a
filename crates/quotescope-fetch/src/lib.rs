//! Historical price fetching for the quotescope stock data viewer.
//!
//! This crate provides the data acquisition pipeline:
//!
//! - [`url::chart_url`] - Constructs Yahoo chart API URLs
//! - [`ChartClient`] - HTTP client for the chart endpoint
//! - [`HistoryProvider`] - Seam between the fetcher and a data source
//! - [`YahooProvider`] - Yahoo Finance implementation of the provider
//! - [`SeriesFetcher`] - Session-scoped, memoizing fetch entry point

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quotescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod chart;
mod client;
mod error;
mod fetcher;
mod provider;
pub mod url;

pub use cache::{CacheStats, SeriesCache};
pub use chart::ChartResponse;
pub use client::{ChartClient, ClientConfig};
pub use error::FetchError;
pub use fetcher::{FetchResult, NO_DATA_REASON, SeriesFetcher};
pub use provider::{HistoryProvider, YahooProvider};
