//! Page URLs on the site
//!
//! Book identifiers and search queries are substituted as given. The only
//! rewriting is the search query's space-to-`%20` replacement.

/// Builds the page URLs for one site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    base: String,
}

impl Routes {
    /// Creates routes rooted at `base_url`; a trailing slash is ignored
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL without a trailing slash
    pub fn base(&self) -> &str {
        &self.base
    }

    /// A book's main page
    pub fn book(&self, book_id: &str) -> String {
        format!("{}/books/{}", self.base, book_id)
    }

    /// A book's community reviews page, which carries the average rating
    pub fn community_reviews(&self, book_id: &str) -> String {
        format!("{}/books/{}/community_reviews", self.base, book_id)
    }

    /// A book's content warnings page
    pub fn content_warnings(&self, book_id: &str) -> String {
        format!("{}/books/{}/content_warnings", self.base, book_id)
    }

    /// The browse page for a free-text search
    pub fn search(&self, query: &str) -> String {
        format!(
            "{}/browse?search_term={}",
            self.base,
            encode_search_query(query)
        )
    }
}

/// Replaces every space with `%20`, leaving everything else untouched
pub fn encode_search_query(query: &str) -> String {
    query.replace(' ', "%20")
}
