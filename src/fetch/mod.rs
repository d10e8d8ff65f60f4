//! Fetch module for retrieving raw pages
//!
//! This module issues the HTTP GET requests whose bodies the extractors
//! consume. It does not cache, rate limit, or retry.

mod fetcher;

pub use fetcher::{
    build_http_client, cookie_header, fetch_page, fetch_page_authenticated, fetch_url,
};
