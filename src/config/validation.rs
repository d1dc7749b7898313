use crate::config::types::{Config, HttpConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the catalog site description
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.scheme != "http" && config.scheme != "https" {
        return Err(ConfigError::InvalidSite(format!(
            "scheme must be 'http' or 'https', got '{}'",
            config.scheme
        )));
    }

    if config.domain.is_empty() {
        return Err(ConfigError::InvalidSite("domain cannot be empty".to_string()));
    }

    // The domain is pasted verbatim into URLs, so it must not carry a path
    let root = Url::parse(&format!("{}://{}/", config.scheme, config.domain))
        .map_err(|e| ConfigError::InvalidSite(format!("Invalid domain '{}': {}", config.domain, e)))?;
    if root.path() != "/" || root.query().is_some() {
        return Err(ConfigError::InvalidSite(format!(
            "domain '{}' must be a bare host",
            config.domain
        )));
    }

    validate_pattern("category_pattern", &config.category_pattern)?;
    validate_pattern("leaf_pattern", &config.leaf_pattern)?;

    if config.label_delimiter.is_empty() {
        return Err(ConfigError::Validation(
            "label_delimiter cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation("output path cannot be empty".to_string()));
    }

    Ok(())
}

/// Checks that a link pattern is non-empty and compiles
fn validate_pattern(name: &str, pattern: &str) -> Result<(), ConfigError> {
    if pattern.is_empty() {
        return Err(ConfigError::InvalidPattern(format!("{} cannot be empty", name)));
    }

    Regex::new(pattern)
        .map_err(|e| ConfigError::InvalidPattern(format!("{} '{}': {}", name, pattern, e)))?;

    Ok(())
}
