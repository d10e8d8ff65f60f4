//! Configuration module for StoryGraph Reader
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so an absent file is the
//! same as an empty one.
//!
//! # Example
//!
//! ```no_run
//! use storygraph_reader::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("storygraph.toml")).unwrap();
//! println!("Reading from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AuthConfig, Config, SiteConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
