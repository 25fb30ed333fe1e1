//! HTTP fetcher implementation
//!
//! Builds the HTTP client with a proper user agent string and turns HTTP
//! responses into `CrawlResponse` values for the analyzer. Non-200 results
//! are normal responses, not errors; only transport failures error out.

use crate::config::UserAgentConfig;
use crate::crawler::CrawlResponse;
use crate::LexiError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout_secs` - Per-request timeout in seconds
///
/// # Example
///
/// ```no_run
/// use lexicrawl::config::UserAgentConfig;
/// use lexicrawl::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "Lexicrawl".to_string(),
///     crawler_version: "0.1".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config, 30).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and produces a `CrawlResponse`
///
/// Redirects are followed by the client; `CrawlResponse::url` carries the
/// final URL. Any HTTP status is returned as a value so the caller can
/// apply its own usability policy.
///
/// # Arguments
///
/// * `client` - The HTTP client
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(CrawlResponse)` - The server responded, with any status code
/// * `Err(LexiError::Http)` - Transport-level failure (DNS, timeout, TLS)
pub async fn fetch_url(client: &Client, url: &str) -> Result<CrawlResponse, LexiError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| LexiError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();

    let body = response.bytes().await.map_err(|source| LexiError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(CrawlResponse {
        status,
        url: final_url,
        content: Some(body.to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_user_agent() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_client() {
        assert!(build_http_client(&test_user_agent(), 30).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
            .mount(&server)
            .await;

        let client = build_http_client(&test_user_agent(), 5).unwrap();
        let resp = fetch_url(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();

        assert_eq!(resp.status, 200);
        assert!(resp.is_usable());
        assert_eq!(resp.content.unwrap(), b"<html>hello</html>".to_vec());
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_a_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&test_user_agent(), 5).unwrap();
        let resp = fetch_url(&client, &format!("{}/missing", server.uri()))
            .await
            .unwrap();

        assert_eq!(resp.status, 404);
        assert!(!resp.is_usable());
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_an_error() {
        let client = build_http_client(&test_user_agent(), 1).unwrap();
        // Port 1 is essentially never listening
        let result = fetch_url(&client, "http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(LexiError::Http { .. })));
    }
}
