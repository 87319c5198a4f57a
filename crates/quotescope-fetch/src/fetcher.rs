//! Memoizing series fetcher.

use std::sync::Arc;

use quotescope_types::{DailyBar, DateRange, OhlcvSeries, SeriesRequest, Ticker};

use crate::{CacheStats, HistoryProvider, SeriesCache};

/// Reason reported when the provider answers successfully with zero records.
pub const NO_DATA_REASON: &str = "no data";

/// Outcome of a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// At least one bar was fetched.
    Success(Arc<OhlcvSeries>),
    /// Nothing to show, with a human-readable reason.
    Empty(String),
}

impl FetchResult {
    /// Returns the series on success.
    #[must_use]
    pub fn series(&self) -> Option<&Arc<OhlcvSeries>> {
        match self {
            Self::Success(series) => Some(series),
            Self::Empty(_) => None,
        }
    }

    /// Returns the reason for an empty result.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Empty(reason) => Some(reason),
        }
    }

    /// Returns true for [`FetchResult::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Fetches OHLCV series and memoizes every outcome for the session.
///
/// Each distinct `(ticker, range)` reaches the provider at most once per
/// fetcher. Failures are cached too: asking again with identical inputs
/// returns the same empty result without a new request.
#[derive(Debug)]
pub struct SeriesFetcher<P> {
    provider: P,
    cache: SeriesCache,
}

impl<P: HistoryProvider> SeriesFetcher<P> {
    /// Creates a fetcher with an empty cache.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: SeriesCache::new(),
        }
    }

    /// Returns the underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns cache usage counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drops every cached outcome so the next fetch reaches the provider.
    pub fn clear_cache(&mut self) {
        tracing::debug!(entries = self.cache.len(), "clearing series cache");
        self.cache.clear();
    }

    /// Fetches the series for `ticker` over `range`.
    ///
    /// Never fails: provider errors and zero-record answers come back as
    /// [`FetchResult::Empty`].
    pub async fn fetch(&mut self, ticker: &Ticker, range: DateRange) -> FetchResult {
        if let Some(cached) = self.cache.lookup(ticker, range) {
            tracing::debug!(%ticker, %range, "series cache hit");
            return cached;
        }
        tracing::debug!(%ticker, %range, provider = self.provider.name(), "series cache miss");

        let outcome = match self.provider.daily_bars(ticker, range).await {
            Ok(bars) => {
                let received = bars.len();
                let bars: Vec<DailyBar> =
                    bars.into_iter().filter(|bar| range.contains(bar.date)).collect();
                if bars.len() < received {
                    tracing::debug!(
                        %ticker,
                        %range,
                        dropped = received - bars.len(),
                        "dropping bars outside requested range"
                    );
                }

                if bars.is_empty() {
                    tracing::info!(%ticker, %range, "provider returned no records");
                    FetchResult::Empty(NO_DATA_REASON.to_string())
                } else {
                    let series = OhlcvSeries::from_bars(ticker.clone(), range, bars);
                    tracing::info!(%ticker, %range, records = series.len(), "fetched series");
                    FetchResult::Success(Arc::new(series))
                }
            }
            Err(err) => {
                tracing::warn!(%ticker, %range, error = %err, "fetch failed");
                FetchResult::Empty(err.to_string())
            }
        };

        self.cache.insert(ticker.clone(), range, outcome.clone());
        outcome
    }

    /// Fetches the series for an already validated request.
    pub async fn fetch_request(&mut self, request: &SeriesRequest) -> FetchResult {
        self.fetch(&request.ticker, request.range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, Copy)]
    enum Answer {
        Bars(usize),
        /// One bar inside the range, one on each side of it.
        Straddling,
        /// A single bar far past the range.
        Outside,
        Unknown,
    }

    #[derive(Debug)]
    struct StubProvider {
        answer: Answer,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn new(answer: Answer) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = Self {
                answer,
                calls: Arc::clone(&calls),
            };
            (provider, calls)
        }
    }

    #[async_trait]
    impl HistoryProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn daily_bars(
            &self,
            ticker: &Ticker,
            range: DateRange,
        ) -> Result<Vec<DailyBar>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.answer {
                Answer::Bars(n) => Ok((0..n)
                    .rev()
                    .map(|i| {
                        let date = range.start() + chrono::Duration::days(i as i64);
                        let px = 100.0 + i as f64;
                        DailyBar::new(date, px, px + 1.0, px - 1.0, px, 1_000)
                    })
                    .collect()),
                Answer::Straddling => Ok([
                    range.start() - chrono::Duration::days(1),
                    range.start(),
                    range.end() + chrono::Duration::days(300),
                ]
                .into_iter()
                .map(|date| DailyBar::new(date, 10.0, 11.0, 9.0, 10.5, 1_000))
                .collect()),
                Answer::Outside => Ok(vec![DailyBar::new(
                    range.end() + chrono::Duration::days(300),
                    10.0,
                    11.0,
                    9.0,
                    10.5,
                    1_000,
                )]),
                Answer::Unknown => Err(FetchError::SymbolNotFound {
                    ticker: ticker.to_string(),
                }),
            }
        }
    }

    fn january() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_second_identical_fetch_hits_cache() {
        let (provider, calls) = StubProvider::new(Answer::Bars(5));
        let mut fetcher = SeriesFetcher::new(provider);
        let ticker: Ticker = "AAPL".parse().unwrap();

        let first = fetcher.fetch(&ticker, january()).await;
        let second = fetcher.fetch(&ticker, january()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert!(first.is_success());
        let stats = fetcher.cache_stats();
        assert_eq!((stats.entries, stats.hits, stats.misses), (1, 1, 1));
    }

    #[tokio::test]
    async fn test_success_is_sorted_and_shared() {
        let (provider, _) = StubProvider::new(Answer::Bars(3));
        let mut fetcher = SeriesFetcher::new(provider);
        let ticker: Ticker = "AAPL".parse().unwrap();

        let first = fetcher.fetch(&ticker, january()).await;
        let second = fetcher.fetch(&ticker, january()).await;

        let (a, b) = (first.series().unwrap(), second.series().unwrap());
        assert!(Arc::ptr_eq(a, b));
        assert!(a.bars().windows(2).all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn test_zero_records_is_no_data() {
        let (provider, calls) = StubProvider::new(Answer::Bars(0));
        let mut fetcher = SeriesFetcher::new(provider);
        let ticker: Ticker = "ZZZZINVALID".parse().unwrap();

        let result = fetcher.fetch(&ticker, january()).await;
        assert_eq!(result, FetchResult::Empty("no data".to_string()));

        fetcher.fetch(&ticker, january()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bars_outside_range_are_dropped() {
        let (provider, _) = StubProvider::new(Answer::Straddling);
        let mut fetcher = SeriesFetcher::new(provider);
        let ticker: Ticker = "AAPL".parse().unwrap();

        let result = fetcher.fetch(&ticker, january()).await;
        let series = result.series().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.first_date(), Some(january().start()));
    }

    #[tokio::test]
    async fn test_only_out_of_range_bars_is_no_data() {
        let (provider, calls) = StubProvider::new(Answer::Outside);
        let mut fetcher = SeriesFetcher::new(provider);
        let ticker: Ticker = "AAPL".parse().unwrap();

        let result = fetcher.fetch(&ticker, january()).await;
        assert_eq!(result, FetchResult::Empty(NO_DATA_REASON.to_string()));

        fetcher.fetch(&ticker, january()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failures_are_cached() {
        let (provider, calls) = StubProvider::new(Answer::Unknown);
        let mut fetcher = SeriesFetcher::new(provider);
        let ticker: Ticker = "NOPE".parse().unwrap();

        let first = fetcher.fetch(&ticker, january()).await;
        let second = fetcher.fetch(&ticker, january()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.reason(), Some("Unknown ticker: NOPE"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_changed_input_refetches() {
        let (provider, calls) = StubProvider::new(Answer::Bars(2));
        let mut fetcher = SeriesFetcher::new(provider);
        let range = january();

        fetcher.fetch(&"AAPL".parse().unwrap(), range).await;
        fetcher.fetch(&"MSFT".parse().unwrap(), range).await;
        let shorter = DateRange::new(range.start(), range.start()).unwrap();
        fetcher.fetch(&"AAPL".parse().unwrap(), shorter).await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let (provider, calls) = StubProvider::new(Answer::Bars(2));
        let mut fetcher = SeriesFetcher::new(provider);
        let ticker: Ticker = "AAPL".parse().unwrap();

        fetcher.fetch(&ticker, january()).await;
        fetcher.clear_cache();
        fetcher.fetch(&ticker, january()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
