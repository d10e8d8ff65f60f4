//! Extraction module: raw page HTML in, structured records out
//!
//! Each routine is a pure function of the documents it is given. Routines
//! fail only when an anchor node they cannot do without is missing; every
//! other missing piece degrades to `"N/A"` or a fixed placeholder.
//!
//! - `book`: title, authors, pages, first publication, tags, description
//! - `rating`: community average rating
//! - `warnings`: reader-submitted content warnings by severity
//! - `progress`: reading progress of a currently-reading book
//! - `search`: search result listing

mod book;
pub mod dom;
mod progress;
mod rating;
mod search;
mod warnings;

pub use book::extract_book;
pub use progress::extract_reading_progress;
pub use rating::extract_average_rating;
pub use search::extract_search_results;
pub use warnings::extract_content_warnings;
