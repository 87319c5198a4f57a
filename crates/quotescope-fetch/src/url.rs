//! Yahoo chart API URL construction.

use quotescope_types::{DateRange, Ticker};

/// Default host for the Yahoo Finance chart API.
pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Builds the daily-history URL for a ticker and range.
///
/// URL format: `{base}/v8/finance/chart/{TICKER}?period1={start}&period2={end}&interval=1d&events=history`
///
/// `period1` is the start date at 00:00:00 UTC and `period2` the end date at
/// 23:59:59 UTC, so both ends of the range are included.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use quotescope_fetch::url::{DEFAULT_BASE_URL, chart_url};
/// use quotescope_types::{DateRange, Ticker};
///
/// let ticker: Ticker = "aapl".parse().unwrap();
/// let day = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
/// let url = chart_url(DEFAULT_BASE_URL, &ticker, DateRange::single_day(day));
/// assert_eq!(
///     url,
///     "https://query2.finance.yahoo.com/v8/finance/chart/AAPL?period1=1672704000&period2=1672790399&interval=1d&events=history"
/// );
/// ```
#[must_use]
pub fn chart_url(base_url: &str, ticker: &Ticker, range: DateRange) -> String {
    format!(
        "{}{}?period1={}&period2={}&interval=1d&events=history",
        base_url.trim_end_matches('/'),
        chart_path(ticker),
        range.first_instant().and_utc().timestamp(),
        range.last_instant().and_utc().timestamp(),
    )
}

/// Returns the request path for a ticker's chart.
///
/// The symbol is percent-encoded as a single path segment, so characters such
/// as `^`, `/`, `?` or `#` can never reach the query or add segments.
#[must_use]
pub fn chart_path(ticker: &Ticker) -> String {
    format!("/v8/finance/chart/{}", urlencoding::encode(ticker.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_chart_url_january() {
        let ticker: Ticker = "AAPL".parse().unwrap();
        let url = chart_url(DEFAULT_BASE_URL, &ticker, range());
        assert_eq!(
            url,
            "https://query2.finance.yahoo.com/v8/finance/chart/AAPL?period1=1672531200&period2=1675209599&interval=1d&events=history"
        );
    }

    #[test]
    fn test_chart_url_trailing_slash() {
        let ticker: Ticker = "msft".parse().unwrap();
        let url = chart_url("http://127.0.0.1:8080/", &ticker, range());
        assert!(url.starts_with("http://127.0.0.1:8080/v8/finance/chart/MSFT?"));
    }

    #[test]
    fn test_chart_path_escapes_index_caret() {
        let ticker: Ticker = "^gspc".parse().unwrap();
        assert_eq!(chart_path(&ticker), "/v8/finance/chart/%5EGSPC");
    }

    #[test]
    fn test_chart_path_keeps_symbol_in_one_segment() {
        let ticker: Ticker = "aapl#x".parse().unwrap();
        assert_eq!(chart_path(&ticker), "/v8/finance/chart/AAPL%23X");

        let ticker: Ticker = "brk/b?x=1".parse().unwrap();
        assert_eq!(chart_path(&ticker), "/v8/finance/chart/BRK%2FB%3FX%3D1");
    }

    #[test]
    fn test_chart_url_query_survives_fragment_char() {
        let ticker: Ticker = "aapl#x".parse().unwrap();
        let url = chart_url(DEFAULT_BASE_URL, &ticker, range());
        assert!(url.ends_with(
            "/AAPL%23X?period1=1672531200&period2=1675209599&interval=1d&events=history"
        ));
    }
}
