use url::Url;

/// Extracts the host from a URL, lowercased
///
/// Returns None for URLs without a host component.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use lexicrawl::url::extract_host;
///
/// let url = Url::parse("https://Vision.ICS.uci.edu/path").unwrap();
/// assert_eq!(extract_host(&url), Some("vision.ics.uci.edu".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks whether a host falls under a domain suffix
///
/// The comparison is a case-insensitive suffix match, so
/// `host_matches_suffix("vision.ics.uci.edu", "uci.edu")` and
/// `host_matches_suffix("uci.edu", "uci.edu")` both hold.
pub fn host_matches_suffix(host: &str, suffix: &str) -> bool {
    host.to_lowercase().ends_with(&suffix.to_lowercase())
}
