//! Derived series for the quotescope stock data viewer.
//!
//! - [`compute_sma`] - Simple moving average of closing prices
//! - [`DerivedSma`] - Date-aligned SMA values with explicit gaps

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quotescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod sma;

pub use sma::{DEFAULT_SMA_PERIOD, DerivedSma, SmaPoint, compute_sma};
