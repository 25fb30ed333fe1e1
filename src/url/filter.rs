use crate::config::FilterConfig;
use crate::url::domain::host_matches_suffix;
use crate::UrlError;
use url::Url;

/// Decides whether a URL is eligible for crawling
///
/// A URL is admissible when it clears every configured rule:
///
/// 1. Scheme is `http` or `https`
/// 2. Host ends with one of the allowed domain suffixes
/// 3. Path contains none of the path-marker substrings
/// 4. Query contains none of the query-pattern substrings
/// 5. Path has at most `max_path_segments` separators
/// 6. Path does not end in a denied file extension
///
/// All string comparisons are case-insensitive. The rules are independent
/// exclusions, so evaluation order does not change the result.
///
/// # Arguments
///
/// * `url_str` - The URL to check
/// * `filter` - The configured filter rules
///
/// # Returns
///
/// * `Ok(true)` - The URL may be crawled
/// * `Ok(false)` - The URL is rejected by one of the rules
/// * `Err(UrlError)` - The URL could not be parsed; callers iterating over
///   batches of links should skip the individual URL rather than abort
///
/// # Examples
///
/// ```
/// use lexicrawl::config::FilterConfig;
/// use lexicrawl::url::is_valid;
///
/// let filter = FilterConfig::default();
/// assert!(is_valid("https://www.ics.uci.edu/about", &filter).unwrap());
/// assert!(!is_valid("https://example.com/about", &filter).unwrap());
/// ```
pub fn is_valid(url_str: &str, filter: &FilterConfig) -> Result<bool, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    // Rule 1: scheme
    if url.scheme() != "http" && url.scheme() != "https" {
        return Ok(false);
    }

    // Rule 2: host must end with an allowed domain suffix
    let host = match url.host_str() {
        Some(h) => h.to_lowercase(),
        None => return Ok(false),
    };

    if !filter
        .allowed_domains
        .iter()
        .any(|suffix| host_matches_suffix(&host, suffix))
    {
        return Ok(false);
    }

    let path = url.path().to_lowercase();

    // Rule 3: known low-value path markers
    if filter
        .path_markers
        .iter()
        .any(|marker| path.contains(&marker.to_lowercase()))
    {
        return Ok(false);
    }

    // Rule 4: low-value query parameters
    if let Some(query) = url.query() {
        let query = query.to_lowercase();
        if filter
            .query_patterns
            .iter()
            .any(|pattern| query.contains(&pattern.to_lowercase()))
        {
            return Ok(false);
        }
    }

    // Rule 5: path depth cap, guards against crawler traps
    if path.matches('/').count() > filter.max_path_segments {
        return Ok(false);
    }

    // Rule 6: non-HTML resource extensions
    if filter
        .denied_extensions
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext.to_lowercase())))
    {
        return Ok(false);
    }

    Ok(true)
}
