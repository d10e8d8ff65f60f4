//! Search results extraction

use crate::extract::dom::{find_all, selector, DomNode};
use crate::model::{SearchResult, NOT_AVAILABLE};
use crate::StoryGraphError;
use scraper::Html;

const RESULT_BLOCK: &str = r"div.book-title-author-and-series.w-11\/12";

/// Lists the books on a search results page, in page order
///
/// Each result block links the title first and the author somewhere after
/// it. A page with no result blocks yields an empty list.
///
/// # Example
///
/// ```
/// use storygraph_reader::extract::extract_search_results;
///
/// let html = r#"<div class="book-title-author-and-series w-11/12">
///     <a href="/books/abc-123">Dune</a> <a href="/authors/42">Frank Herbert</a></div>"#;
/// let results = extract_search_results(html).unwrap();
/// assert_eq!(results[0].book_id, "abc-123");
/// assert_eq!(results[0].author, "Frank Herbert");
/// ```
pub fn extract_search_results(search_html: &str) -> Result<Vec<SearchResult>, StoryGraphError> {
    let document = Html::parse_document(search_html);
    let anchors = selector("a")?;

    let results: Vec<SearchResult> = find_all(&document, RESULT_BLOCK)?
        .into_iter()
        .map(|block| {
            let links = block.descendants_matching(&anchors);
            let title_link = links.first();

            let title = title_link
                .map(|a| a.text_content().trim().to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());

            let book_id = title_link
                .and_then(|a| a.attr_value("href"))
                .and_then(|href| href.rsplit('/').next())
                .unwrap_or(NOT_AVAILABLE)
                .to_string();

            let author = links
                .iter()
                .find(|a| a.href_starts_with("/author"))
                .map(|a| a.text_content().trim().to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());

            SearchResult {
                title,
                author,
                book_id,
            }
        })
        .collect();

    tracing::debug!("Extracted {} search results", results.len());
    Ok(results)
}
