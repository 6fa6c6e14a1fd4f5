use crate::config::types::{Config, FetchConfig, FilterConfig, ForumConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound on stories per run; the forum only ranks a few hundred
const MAX_STORY_LIMIT: usize = 500;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_forum_config(&config.forum)?;
    validate_fetch_config(&config.fetch)?;
    validate_filter_config(&config.filter)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates forum API configuration
fn validate_forum_config(config: &ForumConfig) -> Result<(), ConfigError> {
    if config.story_limit < 1 || config.story_limit > MAX_STORY_LIMIT {
        return Err(ConfigError::Validation(format!(
            "story_limit must be between 1 and {}, got {}",
            MAX_STORY_LIMIT, config.story_limit
        )));
    }

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(
            "forum request_timeout must be >= 1s".to_string(),
        ));
    }

    validate_http_url("api_base", &config.api_base)?;
    validate_http_url("item_url_prefix", &config.item_url_prefix)?;

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    for (name, value) in [
        ("request_timeout", config.request_timeout),
        ("enrich_timeout", config.enrich_timeout),
        ("extract_timeout", config.extract_timeout),
    ] {
        if value < 1 {
            return Err(ConfigError::Validation(format!(
                "{} must be >= 1s, got {}s",
                name, value
            )));
        }
    }

    Ok(())
}

/// Validates filter configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    for extension in &config.excluded_extensions {
        if !extension.starts_with('.') || extension.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "Excluded extension '{}' must look like '.ext'",
                extension
            )));
        }
    }
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.description_limit < 1 {
        return Err(ConfigError::Validation(
            "description_limit must be >= 1".to_string(),
        ));
    }
    Ok(())
}

/// Checks that a configured URL parses and uses HTTP(S)
fn validate_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use HTTP or HTTPS, got '{}'",
            name, value
        )));
    }

    Ok(())
}
