//! HTML link extraction
//!
//! Pulls candidate URLs out of a fetched page: every `<a href>` target is
//! resolved against the base URL, stripped of its fragment, and kept only
//! if the admissibility filter accepts it. Extraction is best effort per
//! link; one bad href never aborts the rest of the page.

use crate::config::FilterConfig;
use crate::crawler::CrawlResponse;
use crate::url::is_valid;
use scraper::{Html, Selector};
use url::Url;

/// Extracts admissible outbound links from a fetched page
///
/// Links are returned in document order. Duplicates within the same page
/// are kept; deduplication happens at the session level.
///
/// # Arguments
///
/// * `base_url` - The URL that was used to fetch the page, for resolving
///   relative hrefs
/// * `response` - The fetched page
/// * `filter` - The admissibility filter configuration
///
/// # Returns
///
/// The admissible absolute URLs found in the page; empty for non-200
/// responses or absent content.
pub fn extract_links(base_url: &str, response: &CrawlResponse, filter: &FilterConfig) -> Vec<String> {
    let mut links = Vec::new();

    let content = match response.content.as_deref() {
        Some(bytes) if response.status == 200 => bytes,
        _ => return links,
    };

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Cannot resolve links against {}: {}", base_url, e);
            return links;
        }
    };

    let html = String::from_utf8_lossy(content);
    let document = Html::parse_document(&html);

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                let mut absolute = match base.join(href.trim()) {
                    Ok(url) => url,
                    Err(e) => {
                        tracing::debug!("Skipping unresolvable href '{}': {}", href, e);
                        continue;
                    }
                };

                absolute.set_fragment(None);

                match is_valid(absolute.as_str(), filter) {
                    Ok(true) => links.push(absolute.to_string()),
                    Ok(false) => {}
                    Err(e) => {
                        tracing::debug!("Skipping malformed link '{}': {}", href, e);
                    }
                }
            }
        }
    }

    links
}
