use crate::config::types::{AuthConfig, Config, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_auth_config(&config.auth)?;
    Ok(())
}

/// Validates site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' cannot carry a query or fragment",
            config.base_url
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be greater than 0 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates cookie names so they survive being joined into a Cookie header
fn validate_auth_config(config: &AuthConfig) -> Result<(), ConfigError> {
    for (name, value) in &config.cookies {
        validate_cookie_name(name)?;

        if value.contains(';') {
            return Err(ConfigError::Validation(format!(
                "Cookie '{}' has a value containing ';'",
                name
            )));
        }
    }
    Ok(())
}

/// Validates a single cookie name
fn validate_cookie_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "Cookie name cannot be empty".to_string(),
        ));
    }

    if name
        .chars()
        .any(|c| c == '=' || c == ';' || c.is_whitespace())
    {
        return Err(ConfigError::Validation(format!(
            "Cookie name '{}' cannot contain '=', ';' or whitespace",
            name
        )));
    }

    Ok(())
}
