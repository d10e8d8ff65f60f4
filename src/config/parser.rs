use crate::config::types::Config;
use crate::config::validation::validate;
use crate::{ConfigError, ConfigResult};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use storygraph_reader::config::load_config;
///
/// let config = load_config(Path::new("storygraph.toml")).unwrap();
/// println!("Cookies configured: {}", config.auth.cookies.len());
/// ```
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the configuration at `path` if one was given, otherwise the defaults
pub fn load_config_or_default(path: Option<&Path>) -> ConfigResult<Config> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = Config::default();
            validate(&config)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[site]
base-url = "https://example.com"
user-agent = "TestAgent/1.0"
timeout-secs = 20

[auth]
cookies = { remember_user_token = "abc", _storygraph_session = "xyz" }
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.user_agent, "TestAgent/1.0");
        assert_eq!(config.site.timeout_secs, Some(20));
        assert_eq!(config.auth.cookies.len(), 2);
        assert_eq!(config.auth.cookies["remember_user_token"], "abc");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.site.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.site.timeout_secs, None);
        assert!(config.auth.cookies.is_empty());
    }

    #[test]
    fn test_partial_site_section() {
        let config = parse_config("[site]\ntimeout-secs = 5\n").unwrap();
        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.site.timeout_secs, Some(5));
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/storygraph.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[site]\ntimeout-secs = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_or_default_without_path() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
    }
}
