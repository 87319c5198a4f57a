//! Session-lifetime memoization of fetch outcomes.

use std::collections::HashMap;

use quotescope_types::{DateRange, Ticker};

use crate::FetchResult;

/// Counters describing cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Stored outcomes.
    pub entries: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that fell through to the provider.
    pub misses: u64,
}

/// Maps `(ticker, start, end)` to the outcome of the fetch that produced it.
///
/// Both successes and empty results are stored. Entries live until the cache
/// is dropped or explicitly cleared; there is no eviction.
#[derive(Debug, Default)]
pub struct SeriesCache {
    entries: HashMap<(Ticker, DateRange), FetchResult>,
    hits: u64,
    misses: u64,
}

impl SeriesCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an outcome and records a hit or miss.
    pub fn lookup(&mut self, ticker: &Ticker, range: DateRange) -> Option<FetchResult> {
        let found = self.entries.get(&(ticker.clone(), range)).cloned();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Stores an outcome, replacing any previous one for the key.
    pub fn insert(&mut self, ticker: Ticker, range: DateRange, outcome: FetchResult) {
        self.entries.insert((ticker, range), outcome);
    }

    /// Returns the number of stored outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns usage counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Removes all entries. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
