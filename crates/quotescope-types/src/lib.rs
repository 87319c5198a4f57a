//! Core types for the quotescope stock data viewer.
//!
//! This crate provides the fundamental data structures used throughout quotescope:
//!
//! - [`Ticker`] - A normalized, non-empty instrument symbol
//! - [`DateRange`] - A validated, inclusive date range
//! - [`DailyBar`] - One trading day of open/high/low/close/volume
//! - [`OhlcvSeries`] - Date-ordered bars for one ticker and range
//! - [`SeriesRequest`] - Validated inputs for a fetch

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quotescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod date_range;
mod error;
mod request;
mod series;
mod ticker;

pub use bar::DailyBar;
pub use date_range::{DateRange, validate};
pub use error::{InputError, RangeError, ValidationError};
pub use request::SeriesRequest;
pub use series::OhlcvSeries;
pub use ticker::{Ticker, normalize, require_ticker};
