use crate::config::types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.seed_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Seed URL must use an HTTP(S) scheme, got '{}'",
            url.scheme()
        )));
    }

    if config.page_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "page_limit must be >= 1, got {}",
            config.page_limit
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

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Basic email validation: one '@' with non-empty local and domain parts,
/// and a dot somewhere in the domain.
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = email.split('@').collect();

    let valid = parts.len() == 2
        && !parts[0].is_empty()
        && !parts[1].is_empty()
        && parts[1].contains('.')
        && !parts[1].starts_with('.')
        && !parts[1].ends_with('.');

    if !valid {
        return Err(ConfigError::Validation(format!(
            "Invalid contact_email: '{}'",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};

    fn valid_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                seed_url: "https://example.com/".to_string(),
                page_limit: 400,
            },
            user_agent: UserAgentConfig {
                crawler_name: "fathom".to_string(),
                crawler_version: "0.1".to_string(),
                contact_url: "https://example.com/about".to_string(),
                contact_email: "crawler@example.com".to_string(),
            },
            output: OutputConfig {
                database_path: "./crawl.db".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_non_http_seed_rejected() {
        let mut config = valid_config();
        config.crawler.seed_url = "ftp://example.com/".to_string();
        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let mut config = valid_config();
        config.crawler.seed_url = "not a url".to_string();
        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_zero_page_limit_rejected() {
        let mut config = valid_config();
        config.crawler.page_limit = 0;
        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_crawler_name_rejected() {
        let mut config = valid_config();
        config.user_agent.crawler_name = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_crawler_name_with_spaces_rejected() {
        let mut config = valid_config();
        config.user_agent.crawler_name = "my crawler".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["", "no-at-sign", "a@", "@b.com", "a@nodot", "a@.com"] {
            let mut config = valid_config();
            config.user_agent.contact_email = email.to_string();
            assert!(validate(&config).is_err(), "Expected '{}' to fail", email);
        }
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let mut config = valid_config();
        config.output.database_path = String::new();
        assert!(validate(&config).is_err());
    }
}
