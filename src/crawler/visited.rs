//! Visited-URL registry
//!
//! The registry is the single deduplication gate for crawl work. URLs are
//! keyed by their normalized form, so addresses differing only in fragment
//! or query collapse to one entry. Entries are never removed; the registry
//! lives for the duration of one crawl session.

use crate::url::normalize_url;
use std::collections::HashSet;
use std::sync::Mutex;

/// Thread-safe set of normalized URLs already dispatched for crawling
#[derive(Debug, Default)]
pub struct VisitedSet {
    visited: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL as visited, returning whether it was new
    ///
    /// The raw URL is normalized and then atomically check-and-set under the
    /// internal lock: exactly one caller ever observes `true` for a given
    /// normalized key, regardless of interleaving.
    pub fn visit(&self, raw: &str) -> bool {
        let key = normalize_url(raw);
        let mut visited = self.visited.lock().unwrap();
        visited.insert(key)
    }

    /// Number of distinct normalized URLs seen so far
    pub fn len(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    /// Returns whether no URL has been visited yet
    pub fn is_empty(&self) -> bool {
        self.visited.lock().unwrap().is_empty()
    }
}
