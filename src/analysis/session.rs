//! Session-wide crawl aggregates
//!
//! `SessionState` holds everything the crawl accumulates across pages:
//! which URLs have been analyzed, cumulative word frequencies, the longest
//! page seen, and the subdomain index. It lives for exactly one crawl run
//! and is read by the reporting layer afterwards.

use std::collections::{HashMap, HashSet};

/// The page with the highest in-page word count seen so far
#[derive(Debug, Clone, Default)]
pub struct LongestPage {
    /// URL of the longest page, absent until the first page qualifies
    pub url: Option<String>,

    /// Token count of that page at the time it was analyzed
    pub word_count: usize,
}

/// Aggregate statistics for one crawl session
///
/// Mutations are unguarded read-modify-write sequences; the state must
/// have a single logical owner. Callers driving analysis from concurrent
/// fetch workers have to serialize access, e.g. behind a mutex or a
/// dedicated task that owns the state.
#[derive(Debug, Default)]
pub struct SessionState {
    unique_pages: HashSet<String>,
    word_frequency: HashMap<String, u64>,
    longest_page: LongestPage,
    subdomain_index: HashMap<String, HashSet<String>>,
}

impl SessionState {
    /// Creates an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url` as analyzed
    ///
    /// Returns true if the URL was newly inserted, false if it had already
    /// been recorded. Insertion is final; pages are never un-seen.
    pub fn mark_seen(&mut self, url: &str) -> bool {
        self.unique_pages.insert(url.to_string())
    }

    /// Returns true if `url` has already been analyzed
    pub fn is_seen(&self, url: &str) -> bool {
        self.unique_pages.contains(url)
    }

    /// Number of distinct pages recorded so far
    pub fn unique_page_count(&self) -> usize {
        self.unique_pages.len()
    }

    /// Increments the cumulative count for a token
    pub fn increment_word(&mut self, token: &str) {
        *self.word_frequency.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Records a page's word count, keeping it only on a strict increase
    /// over the current maximum
    pub fn record_page_length(&mut self, url: &str, word_count: usize) {
        if word_count > self.longest_page.word_count {
            self.longest_page.word_count = word_count;
            self.longest_page.url = Some(url.to_string());
        }
    }

    /// Adds `url` to the set of distinct URLs observed under `host`
    pub fn record_subdomain(&mut self, host: &str, url: &str) {
        self.subdomain_index
            .entry(host.to_string())
            .or_default()
            .insert(url.to_string());
    }

    /// Cumulative word frequencies across all analyzed pages
    pub fn word_frequency(&self) -> &HashMap<String, u64> {
        &self.word_frequency
    }

    /// The longest page seen so far
    pub fn longest_page(&self) -> &LongestPage {
        &self.longest_page
    }

    /// Distinct URLs observed per subdomain of the configured parent domain
    pub fn subdomain_index(&self) -> &HashMap<String, HashSet<String>> {
        &self.subdomain_index
    }
}
