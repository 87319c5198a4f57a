//! Output formatters for the quotescope stock data viewer.
//!
//! This crate provides formatters for writing OHLCV series
//! to various output formats:
//!
//! - [`CsvFormatter`] - CSV format, readable back with [`CsvFormatter::read_bars`]
//! - [`JsonFormatter`] - JSON array or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quotescope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::{CSV_HEADER, CsvFormatter};
pub use formatter::{FormatError, Formatter, OutputFormat, export_file_name};
pub use json::{JsonFormatter, JsonStyle};
