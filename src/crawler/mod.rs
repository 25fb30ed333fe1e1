//! Crawler module for web page fetching and link discovery
//!
//! This module contains:
//! - The `CrawlResponse` type handed from the fetch layer to the analyzer
//! - HTTP fetching with a configurable client identity
//! - HTML link extraction filtered through the admissibility rules
//! - The sequential crawl coordinator

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url};
pub use parser::extract_links;

/// A fetched page as produced by the fetch layer
///
/// `status` follows standard HTTP status-code conventions; anything other
/// than 200, or an absent body, makes the response unusable for analysis
/// and link extraction.
#[derive(Debug, Clone)]
pub struct CrawlResponse {
    /// HTTP status code returned by the server
    pub status: u16,

    /// Final URL of the page, after any redirects
    pub url: String,

    /// Raw page body, absent when the fetch produced no content
    pub content: Option<Vec<u8>>,
}

impl CrawlResponse {
    /// Returns true if the response carries analyzable content
    pub fn is_usable(&self) -> bool {
        self.status == 200 && self.content.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_response() {
        let resp = CrawlResponse {
            status: 200,
            url: "https://www.ics.uci.edu/".to_string(),
            content: Some(b"<html></html>".to_vec()),
        };
        assert!(resp.is_usable());
    }

    #[test]
    fn test_non_200_is_unusable() {
        let resp = CrawlResponse {
            status: 404,
            url: "https://www.ics.uci.edu/missing".to_string(),
            content: Some(b"not found".to_vec()),
        };
        assert!(!resp.is_usable());
    }

    #[test]
    fn test_absent_content_is_unusable() {
        let resp = CrawlResponse {
            status: 200,
            url: "https://www.ics.uci.edu/".to_string(),
            content: None,
        };
        assert!(!resp.is_usable());
    }
}
