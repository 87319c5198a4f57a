//! End-to-end pipeline scenarios: validate, fetch, derive, export.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};
use quotescope_lib::prelude::*;
use quotescope_lib::{FetchError, NO_DATA_REASON};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns one bar per weekday in the range, up to `limit` bars.
#[derive(Debug)]
struct WeekdayProvider {
    limit: usize,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl HistoryProvider for WeekdayProvider {
    fn name(&self) -> &str {
        "weekdays"
    }

    async fn daily_bars(
        &self,
        _ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<DailyBar>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(range
            .start()
            .iter_days()
            .take_while(|d| range.contains(*d))
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .take(self.limit)
            .enumerate()
            .map(|(i, date)| {
                let close = 125.0 + i as f64;
                DailyBar::new(date, close - 0.5, close + 1.0, close - 1.0, close, 1_000_000)
            })
            .collect())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn weekday_fetcher(limit: usize) -> (SeriesFetcher<WeekdayProvider>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = WeekdayProvider {
        limit,
        calls: Arc::clone(&calls),
    };
    (SeriesFetcher::new(provider), calls)
}

#[tokio::test]
async fn january_aapl_with_twenty_day_sma() {
    let request = SeriesRequest::new("aapl ", date(2023, 1, 1), date(2023, 1, 31)).unwrap();
    assert_eq!(request.ticker.as_str(), "AAPL");

    // January 2023 has 22 weekdays; the provider answers with 21 records.
    let (mut fetcher, calls) = weekday_fetcher(21);
    let result = fetcher.fetch_request(&request).await;
    let series = result.series().expect("january has trading days");
    assert_eq!(series.len(), 21);
    assert_eq!(series.first_date(), Some(date(2023, 1, 2)));
    assert_eq!(series.last_date(), Some(date(2023, 1, 30)));

    let sma = compute_sma(series, DEFAULT_SMA_PERIOD);
    assert_eq!(sma.len(), 21);
    assert_eq!(sma.defined_count(), 2);
    // positions 20 and 21, one-based
    assert!(sma.value_at(18).is_none());
    assert!(sma.value_at(19).is_some());
    assert!(sma.value_at(20).is_some());

    // Same inputs again: served from the cache.
    let again = fetcher.fetch_request(&request).await;
    assert_eq!(again, result);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_ticker_blocks_fetch() {
    let err = SeriesRequest::new("", date(2023, 1, 1), date(2023, 1, 31)).unwrap_err();
    assert_eq!(err, ValidationError::Input(InputError::EmptyTicker));
}

#[test]
fn reversed_range_blocks_fetch() {
    let err = validate(date(2023, 6, 1), date(2023, 1, 1)).unwrap_err();
    assert!(matches!(err, RangeError::StartAfterEnd { .. }));
}

#[tokio::test]
async fn unknown_ticker_with_no_records_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/ZZZZINVALID"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"chart":{"result":[{"meta":{"gmtoffset":-18000},
            "indicators":{"quote":[{}]}}],"error":null}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let provider = YahooProvider::with_config(ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap();
    let mut fetcher = SeriesFetcher::new(provider);
    let request = SeriesRequest::new("ZZZZINVALID", date(2023, 1, 1), date(2023, 1, 31)).unwrap();

    let first = fetcher.fetch_request(&request).await;
    assert_eq!(first, FetchResult::Empty(NO_DATA_REASON.to_string()));

    let second = fetcher.fetch_request(&request).await;
    assert_eq!(second, first);
}

#[tokio::test]
async fn csv_export_round_trips() {
    let request = SeriesRequest::new("msft", date(2023, 1, 1), date(2023, 1, 31)).unwrap();
    let (mut fetcher, _) = weekday_fetcher(10);
    let result = fetcher.fetch_request(&request).await;
    let series = result.series().unwrap();

    let mut csv = Vec::new();
    CsvFormatter::new().write_series(series, &mut csv).unwrap();
    assert!(csv.starts_with(b"Date,Open,High,Low,Close,Volume\n2023-01-02,"));

    let parsed = CsvFormatter::new().read_bars(csv.as_slice()).unwrap();
    assert_eq!(parsed.as_slice(), series.bars());
    assert_eq!(export_file_name(series.ticker(), OutputFormat::Csv), "MSFT_data.csv");
}
