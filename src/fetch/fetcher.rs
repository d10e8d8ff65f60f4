//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the client, including:
//! - Building the HTTP client from the site configuration
//! - Anonymous GET requests for public pages
//! - Authenticated GET requests that pass session cookies through
//! - Mapping transport failures and 4xx/5xx statuses to errors

use crate::config::SiteConfig;
use crate::StoryGraphError;
use reqwest::header::{COOKIE, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use std::collections::BTreeMap;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// No timeout is set unless `timeout-secs` is configured, so a stalled
/// server blocks the caller until the connection is dropped.
///
/// # Example
///
/// ```no_run
/// use storygraph_reader::config::SiteConfig;
/// use storygraph_reader::fetch::build_http_client;
///
/// let client = build_http_client(&SiteConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL with extra headers and cookies and returns the body text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `headers` - Extra request headers, sent as given
/// * `cookies` - Cookies joined into a single `Cookie` header; none when empty
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(StoryGraphError::Http)` - The transport failed
/// * `Err(StoryGraphError::Status)` - The server answered with 4xx or 5xx
pub async fn fetch_url(
    client: &Client,
    url: &str,
    headers: &[(&str, &str)],
    cookies: &BTreeMap<String, String>,
) -> Result<String, StoryGraphError> {
    let mut request = client.get(url);

    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    if let Some(cookie) = cookie_header(cookies) {
        request = request.header(COOKIE, cookie);
    }

    read_body(request, url).await
}

/// Fetches a public page
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, StoryGraphError> {
    fetch_url(client, url, &[], &BTreeMap::new()).await
}

/// Fetches a page as a signed-in user
///
/// The site only renders per-account state (such as reading progress) for
/// requests that look like they come from a browser session.
pub async fn fetch_page_authenticated(
    client: &Client,
    url: &str,
    user_agent: &str,
    cookies: &BTreeMap<String, String>,
) -> Result<String, StoryGraphError> {
    fetch_url(client, url, &[(USER_AGENT.as_str(), user_agent)], cookies).await
}

/// Joins cookies into a `Cookie` header value
pub fn cookie_header(cookies: &BTreeMap<String, String>) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    Some(
        cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

async fn read_body(request: RequestBuilder, url: &str) -> Result<String, StoryGraphError> {
    tracing::debug!("GET {}", url);

    let response = request.send().await.map_err(|source| StoryGraphError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        tracing::debug!("GET {} returned {}", url, status);
        return Err(StoryGraphError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| StoryGraphError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("GET {} returned {} ({} bytes)", url, status, body.len());
    Ok(body)
}
