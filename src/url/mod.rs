//! URL handling module for StoryGraph Reader
//!
//! This module builds the page URLs the extractors read from.

mod routes;

// Re-export main types
pub use routes::{encode_search_query, Routes};
