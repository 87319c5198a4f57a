//! Ticker normalization and validation.

use serde::{Deserialize, Serialize};

use crate::InputError;

/// Normalizes raw ticker input by trimming whitespace and upper-casing.
///
/// Never fails. An empty return value is a distinct condition the caller must
/// check, usually through [`require_ticker`].
///
/// # Example
///
/// ```
/// use quotescope_types::normalize;
///
/// assert_eq!(normalize("  aapl "), "AAPL");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Normalizes `raw` and rejects it if nothing remains.
///
/// # Errors
///
/// Returns [`InputError::EmptyTicker`] when the normalized ticker is empty.
pub fn require_ticker(raw: &str) -> Result<Ticker, InputError> {
    let symbol = normalize(raw);
    if symbol.is_empty() {
        return Err(InputError::EmptyTicker);
    }
    Ok(Ticker(symbol))
}

/// A normalized, non-empty instrument symbol (e.g. "AAPL").
///
/// The data provider is the authority on whether the symbol exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Ticker {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        require_ticker(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        require_ticker(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
