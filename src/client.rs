//! Public operations: fetch the pages, extract the record
//!
//! Each operation fetches the pages it needs one after another, hands the
//! bodies to the matching extractor, and runs the whole thing behind the
//! fault boundary. Nothing is shared between calls apart from the HTTP
//! connection pool, so one client can serve concurrent callers.

use crate::config::{Config, SiteConfig};
use crate::extract::{
    extract_book, extract_content_warnings, extract_reading_progress, extract_search_results,
};
use crate::fault::{guard, Outcome};
use crate::fetch::{build_http_client, fetch_page, fetch_page_authenticated};
use crate::model::{BookRecord, ReadingProgress, SearchResult, WarningSet};
use crate::url::Routes;
use crate::StoryGraphError;
use reqwest::Client;
use std::collections::BTreeMap;

/// Read-only client for one StoryGraph site
#[derive(Debug, Clone)]
pub struct StoryGraphClient {
    http: Client,
    routes: Routes,
    user_agent: String,
    cookies: BTreeMap<String, String>,
}

impl StoryGraphClient {
    /// Creates a client from a loaded configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storygraph_reader::{Config, StoryGraphClient};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let client = StoryGraphClient::new(&Config::default()).unwrap();
    /// match client.search("the dispossessed").await {
    ///     Ok(results) => println!("{} results", results.len()),
    ///     Err(fault) => eprintln!("{}", fault),
    /// }
    /// # }
    /// ```
    pub fn new(config: &Config) -> Result<Self, StoryGraphError> {
        let http = build_http_client(&config.site)?;
        Ok(Self::with_http_client(
            http,
            &config.site,
            config.auth.cookies.clone(),
        ))
    }

    /// Creates a client around an existing HTTP client
    pub fn with_http_client(
        http: Client,
        site: &SiteConfig,
        cookies: BTreeMap<String, String>,
    ) -> Self {
        Self {
            http,
            routes: Routes::new(&site.base_url),
            user_agent: site.user_agent.clone(),
            cookies,
        }
    }

    /// The page URLs this client reads from
    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Everything about one book: its main page, rating and content warnings
    ///
    /// Fetches the book page, community reviews page and content warnings
    /// page in that order.
    pub async fn book_info(&self, book_id: &str) -> Outcome<BookRecord> {
        guard("book_info", async {
            tracing::info!("Fetching book {}", book_id);
            let book_html = fetch_page(&self.http, &self.routes.book(book_id)).await?;
            let reviews_html =
                fetch_page(&self.http, &self.routes.community_reviews(book_id)).await?;
            let warnings_html =
                fetch_page(&self.http, &self.routes.content_warnings(book_id)).await?;

            extract_book(&book_html, &reviews_html, &warnings_html)
        })
        .await
    }

    /// Reading progress for a book the signed-in account is currently reading
    ///
    /// Uses the client's configured cookies unless `cookies` is non-empty.
    pub async fn reading_progress(
        &self,
        book_id: &str,
        cookies: &BTreeMap<String, String>,
    ) -> Outcome<ReadingProgress> {
        guard("reading_progress", async {
            let cookies = if cookies.is_empty() {
                &self.cookies
            } else {
                cookies
            };
            if cookies.is_empty() {
                tracing::warn!("Fetching reading progress without session cookies");
            }

            let html = fetch_page_authenticated(
                &self.http,
                &self.routes.book(book_id),
                &self.user_agent,
                cookies,
            )
            .await?;

            let progress = extract_reading_progress(&html)?;
            Ok(ReadingProgress { progress })
        })
        .await
    }

    /// Reader-submitted content warnings for one book
    pub async fn content_warnings(&self, book_id: &str) -> Outcome<WarningSet> {
        guard("content_warnings", async {
            let html = fetch_page(&self.http, &self.routes.content_warnings(book_id)).await?;
            extract_content_warnings(&html)
        })
        .await
    }

    /// Books matching a free-text query, in the site's order
    pub async fn search(&self, query: &str) -> Outcome<Vec<SearchResult>> {
        guard("search", async {
            tracing::info!("Searching for '{}'", query);
            let html = fetch_page(&self.http, &self.routes.search(query)).await?;
            extract_search_results(&html)
        })
        .await
    }

    /// Raw body of any page, for callers doing their own extraction
    pub async fn fetch_document(&self, url: &str) -> Outcome<String> {
        guard("fetch_document", fetch_page(&self.http, url)).await
    }
}
