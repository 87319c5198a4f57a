//! Provider failure taxonomy.

use thiserror::Error;

/// Errors that can occur while fetching history from a provider.
///
/// These never reach the presentation layer directly: the
/// [`SeriesFetcher`](crate::SeriesFetcher) turns them into an empty result
/// whose reason is this error's message.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider does not know the symbol.
    #[error("Unknown ticker: {ticker}")]
    SymbolNotFound {
        /// The ticker that was requested.
        ticker: String,
    },

    /// The provider is throttling requests.
    #[error("Rate limited by provider (HTTP 429)")]
    RateLimited,

    /// The provider answered with a non-success status.
    #[error("Provider returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The provider reported an error in the response body.
    #[error("Provider error {code}: {description}")]
    Provider {
        /// Provider error code.
        code: String,
        /// Provider error description.
        description: String,
    },

    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
