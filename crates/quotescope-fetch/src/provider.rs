//! Data provider seam.

use async_trait::async_trait;
use quotescope_types::{DailyBar, DateRange, Ticker};

use crate::{ChartClient, ClientConfig, FetchError};

/// A source of daily OHLCV history.
///
/// Implementations only fetch; caching sits above this trait in
/// [`SeriesFetcher`](crate::SeriesFetcher).
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetches daily bars for `ticker` over `range`, in any order.
    ///
    /// An empty vector is a successful answer meaning the range holds no
    /// trading data.
    async fn daily_bars(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<DailyBar>, FetchError>;
}

/// Yahoo Finance history provider.
#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: ChartClient,
}

impl YahooProvider {
    /// Creates a provider on top of an existing client.
    #[must_use]
    pub const fn new(client: ChartClient) -> Self {
        Self { client }
    }

    /// Creates a provider with the given client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self, reqwest::Error> {
        ChartClient::new(config).map(Self::new)
    }

    /// Creates a provider with default client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        ChartClient::with_defaults().map(Self::new)
    }
}

#[async_trait]
impl HistoryProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    async fn daily_bars(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<DailyBar>, FetchError> {
        self.client.chart(ticker, range).await?.into_bars(ticker)
    }
}
