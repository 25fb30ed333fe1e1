//! Lexicrawl: a restricted-domain crawler and lexical analytics collector
//!
//! This crate crawls a configured set of allowed domains and accumulates
//! aggregate statistics across the session: word frequencies excluding stop
//! words, the longest page seen, subdomain discovery, and page uniqueness.

pub mod analysis;
pub mod config;
pub mod crawler;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for lexicrawl operations
#[derive(Debug, Error)]
pub enum LexiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Malformed URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for lexicrawl operations
pub type Result<T> = std::result::Result<T, LexiError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analysis::{PageAnalyzer, SessionState};
pub use config::Config;
pub use crawler::CrawlResponse;
pub use crate::url::{extract_host, is_valid};
