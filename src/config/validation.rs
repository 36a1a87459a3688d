use crate::config::types::{Config, CrawlSettings, FetchSettings};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// Configuration errors are fatal: a run must never start from a config
/// that fails this check.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_settings(&config.crawl)?;
    validate_fetch_settings(&config.fetch)?;
    Ok(())
}

/// Validates crawl settings
fn validate_crawl_settings(settings: &CrawlSettings) -> Result<(), ConfigError> {
    let seed = Url::parse(&settings.seed_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed-url '{}': {}", settings.seed_url, e)))?;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "seed-url must use the http or https scheme, got '{}'",
            seed.scheme()
        )));
    }

    if seed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "seed-url '{}' has no host",
            settings.seed_url
        )));
    }

    if settings.term.trim().is_empty() {
        return Err(ConfigError::Validation(
            "term cannot be empty".to_string(),
        ));
    }

    if settings.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            settings.max_pages
        )));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_fetch_settings(settings: &FetchSettings) -> Result<(), ConfigError> {
    if settings.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if settings.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            settings.timeout_secs
        )));
    }

    if settings.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            settings.connect_timeout_secs
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_default_config() {
        let config = Config::new("https://example.com", "durability");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_seed_url() {
        let config = Config::new("not a url", "durability");
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config::new("ftp://example.com", "durability");
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_validate_rejects_empty_term() {
        let config = Config::new("https://example.com", "");
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_validate_rejects_whitespace_term() {
        let config = Config::new("https://example.com", "   ");
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_validate_rejects_zero_page_budget() {
        let mut config = Config::new("https://example.com", "durability");
        config.crawl.max_pages = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let mut config = Config::new("https://example.com", "durability");
        config.fetch.user_agent = String::new();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }
}
