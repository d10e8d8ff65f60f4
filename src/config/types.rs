use serde::Deserialize;
use std::collections::BTreeMap;

/// Site the client reads from
pub const DEFAULT_BASE_URL: &str = "https://app.thestorygraph.com";

/// Browser identification sent with authenticated requests
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for StoryGraph Reader
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Where and how pages are fetched
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host every page URL is built on
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header for authenticated requests
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds; requests never time out when unset
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

/// Session cookies passed through on authenticated requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub cookies: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
