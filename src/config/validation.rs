use crate::config::types::{
    AnalysisConfig, Config, CrawlerConfig, FilterConfig, OutputConfig, UserAgentConfig,
};
use crate::url::is_valid;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_filter_config(&config.filter)?;
    validate_crawler_config(&config.crawler, &config.filter)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_analysis_config(&config.analysis)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration, including that every seed URL parses
/// and is admissible under the configured filter rules
fn validate_crawler_config(config: &CrawlerConfig, filter: &FilterConfig) -> Result<(), ConfigError> {
    if config.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    for seed in &config.seeds {
        let admissible = is_valid(seed, filter)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        if !admissible {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' is rejected by the configured filter rules",
                seed
            )));
        }
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates filter configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    if config.allowed_domains.is_empty() {
        return Err(ConfigError::Validation(
            "allowed_domains cannot be empty".to_string(),
        ));
    }

    for domain in &config.allowed_domains {
        if domain.trim().is_empty() {
            return Err(ConfigError::Validation(
                "allowed_domains entries cannot be empty".to_string(),
            ));
        }
    }

    if config.max_path_segments < 1 {
        return Err(ConfigError::Validation(format!(
            "max_path_segments must be >= 1, got {}",
            config.max_path_segments
        )));
    }

    Ok(())
}

/// Validates analysis configuration
fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.min_word_count < 1 {
        return Err(ConfigError::Validation(format!(
            "min_word_count must be >= 1, got {}",
            config.min_word_count
        )));
    }

    if config.parent_domain.trim().is_empty() {
        return Err(ConfigError::Validation(
            "parent_domain cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.summary_path.is_empty() {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty".to_string(),
        ));
    }

    if config.top_words < 1 {
        return Err(ConfigError::Validation(format!(
            "top_words must be >= 1, got {}",
            config.top_words
        )));
    }

    Ok(())
}

/// Validates an email address with a minimal structural check
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = email.split('@').collect();

    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid contact_email: '{}'",
            email
        )));
    }

    Ok(())
}
