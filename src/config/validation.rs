use crate::config::types::{Config, FetchConfig, InventoryConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_inventory_config(&config.inventory)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= 20, got {}",
            config.max_redirects
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Name: non-empty, alphanumeric + hyphens only
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    Ok(())
}

/// Validates inventory limits
fn validate_inventory_config(config: &InventoryConfig) -> Result<(), ConfigError> {
    if config.max_sitemap_pages < 1 {
        return Err(ConfigError::Validation(
            "max-sitemap-pages must be >= 1".to_string(),
        ));
    }

    if config.max_sitemap_fetches < 1 {
        return Err(ConfigError::Validation(
            "max-sitemap-fetches must be >= 1".to_string(),
        ));
    }

    if config.max_crawl_pages < 1 {
        return Err(ConfigError::Validation(
            "max-crawl-pages must be >= 1".to_string(),
        ));
    }

    if config.crawl_delay_ms > 10_000 {
        return Err(ConfigError::Validation(format!(
            "crawl-delay-ms must be <= 10000, got {}ms",
            config.crawl_delay_ms
        )));
    }

    Ok(())
}
