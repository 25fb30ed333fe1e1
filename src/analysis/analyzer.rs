//! Page analyzer - the top-level per-page entry point
//!
//! Given a fetched page, the analyzer updates the session aggregates
//! (uniqueness, word frequencies, longest page, subdomain index) and
//! returns the admissible outbound links for the frontier. Pages below
//! the content threshold are marked seen but contribute no statistics
//! and yield no links.

use crate::analysis::session::SessionState;
use crate::analysis::tokenize::{tokenize, STOP_WORDS};
use crate::config::{Config, FilterConfig};
use crate::crawler::{extract_links, CrawlResponse};
use crate::url::{extract_host, host_matches_suffix};
use scraper::Html;
use std::collections::HashSet;
use url::Url;

/// Analyzes fetched pages against one crawl session
///
/// Holds the filter rules, thresholds, and resolved stop-word set for the
/// run so per-page work stays allocation-light.
pub struct PageAnalyzer {
    filter: FilterConfig,
    min_word_count: usize,
    parent_domain: String,
    stop_words: HashSet<String>,
}

impl PageAnalyzer {
    /// Creates an analyzer from the crawl configuration
    ///
    /// The configured stop-word override replaces the built-in English
    /// list entirely when present.
    pub fn new(config: &Config) -> Self {
        let stop_words = match &config.analysis.stop_words {
            Some(words) => words.iter().map(|w| w.to_lowercase()).collect(),
            None => STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        };

        Self {
            filter: config.filter.clone(),
            min_word_count: config.analysis.min_word_count,
            parent_domain: config.analysis.parent_domain.clone(),
            stop_words,
        }
    }

    /// Analyzes a fetched page and returns its admissible outbound links
    ///
    /// Side effects on `session`, in order:
    ///
    /// 1. Nothing for non-200 or content-less responses
    /// 2. Nothing for a URL that was already analyzed (idempotent)
    /// 3. The URL is recorded as seen
    /// 4. Below the word-count threshold the page contributes no further
    ///    statistics and no links, but stays recorded as seen
    /// 5. Longest-page tracking (strict increase only), word-frequency
    ///    increments for non-stop-words, and subdomain indexing for hosts
    ///    under the configured parent domain
    ///
    /// # Arguments
    ///
    /// * `url` - The URL that was used to fetch the page
    /// * `response` - The fetched page
    /// * `session` - The session aggregates to update
    pub fn analyze(
        &self,
        url: &str,
        response: &CrawlResponse,
        session: &mut SessionState,
    ) -> Vec<String> {
        let content = match response.content.as_deref() {
            Some(bytes) if response.status == 200 => bytes,
            _ => return Vec::new(),
        };

        if session.is_seen(url) {
            tracing::debug!("Already analyzed {}, skipping", url);
            return Vec::new();
        }

        session.mark_seen(url);

        let html = String::from_utf8_lossy(content);
        let text = extract_text(&html);
        let tokens = tokenize(&text);
        let word_count = tokens.len();

        if word_count < self.min_word_count {
            tracing::debug!(
                "Low-content page {} ({} words), no statistics recorded",
                url,
                word_count
            );
            return Vec::new();
        }

        session.record_page_length(url, word_count);

        for token in &tokens {
            if !self.stop_words.contains(token.as_str()) {
                session.increment_word(token);
            }
        }

        match Url::parse(url) {
            Ok(parsed) => {
                if let Some(host) = extract_host(&parsed) {
                    if host_matches_suffix(&host, &self.parent_domain) {
                        session.record_subdomain(&host, url);
                    }
                }
            }
            Err(e) => {
                tracing::debug!("Cannot index subdomain for {}: {}", url, e);
            }
        }

        extract_links(url, response, &self.filter)
    }
}

/// Collects the visible text of an HTML document
///
/// Text nodes are joined with a single space so words in adjacent inline
/// elements stay separate tokens.
fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
}
