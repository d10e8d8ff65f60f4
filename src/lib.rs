//! StoryGraph Reader: an unofficial read-only client for The StoryGraph
//!
//! The site has no public API, so this crate fetches its HTML pages and
//! extracts structured records from them: book metadata, community rating,
//! content warnings, reading progress and search results.
//!
//! Every public operation on [`StoryGraphClient`] runs behind the fault
//! boundary in [`fault`], so callers get either a record or a classified
//! [`Fault`], never a raw error or a panic.

pub mod client;
pub mod config;
pub mod extract;
pub mod fault;
pub mod fetch;
pub mod model;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for StoryGraph Reader operations
#[derive(Debug, Error)]
pub enum StoryGraphError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// A document did not have the structure an extractor requires
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for StoryGraph Reader operations
pub type Result<T> = std::result::Result<T, StoryGraphError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use client::StoryGraphClient;
pub use config::Config;
pub use fault::{Fault, FaultKind, Outcome};
pub use model::{BookRecord, ReadingProgress, SearchResult, WarningSet};
