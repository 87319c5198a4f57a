//! HTTP client for the Yahoo chart endpoint.

use quotescope_types::{DateRange, Ticker};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::{ChartResponse, FetchError, url};

/// Configuration for the chart client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the chart API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: url::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            // Yahoo rejects requests without a browser-like agent
            user_agent: format!(
                "Mozilla/5.0 (compatible; quotescope/{})",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// HTTP client that issues exactly one request per call.
///
/// There is no retry loop: a failed request is reported to the caller, which
/// decides whether to ask again.
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: Client,
    config: ClientConfig,
}

impl ChartClient {
    /// Creates a new chart client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Downloads the daily chart for a ticker and range.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::SymbolNotFound`] on 404, [`FetchError::RateLimited`]
    /// on 429, [`FetchError::Status`] on any other non-success status, and
    /// [`FetchError::Malformed`] if the body is not a chart response.
    pub async fn chart(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<ChartResponse, FetchError> {
        let url = url::chart_url(&self.config.base_url, ticker, range);
        tracing::debug!(%url, "requesting chart");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::SymbolNotFound {
                ticker: ticker.to_string(),
            });
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        ChartResponse::from_slice(&body)
    }
}
