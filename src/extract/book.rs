//! Book page extraction
//!
//! A book page carries the title heading, the metadata paragraph (page count
//! and publication info), the tag section, and an inline script holding the
//! description markup. Rating and content warnings live on their own pages
//! and are extracted by the `rating` and `warnings` routines.

use crate::extract::dom::{find_all, find_first, selector, DomNode};
use crate::extract::rating::extract_average_rating;
use crate::extract::warnings::extract_content_warnings;
use crate::model::{BookRecord, DESCRIPTION_NOT_FOUND, NOT_AVAILABLE};
use crate::{ParseError, StoryGraphError};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

const TITLE_HEADING: &str = r"h3.font-serif.font-bold.text-2xl.md\:w-11\/12";
const METADATA_PARAGRAPH: &str = r"p.text-sm.font-light.text-darkestGrey.dark\:text-grey.mt-1";
const TAG_SECTION: &str = "div.book-page-tag-section";

/// Marker identifying the script that renders the description
const DESCRIPTION_MARKER: &str = "Description</h4>";

static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)Description</h4><div class="trix-content mt-3">(.*?)</div>"#).unwrap()
});

/// Builds a [`BookRecord`] from a book's three pages
///
/// # Arguments
///
/// * `book_html` - The book's main page
/// * `reviews_html` - The book's community reviews page
/// * `warnings_html` - The book's content warnings page
///
/// # Returns
///
/// * `Ok(BookRecord)` - Every field, with `"N/A"` or a placeholder for the
///   ones the pages did not provide
/// * `Err(StoryGraphError::Parse)` - The title heading or the metadata
///   paragraph is missing; no partial record is produced
///
/// # Example
///
/// ```
/// use storygraph_reader::extract::extract_book;
///
/// let page = r#"<h3 class="font-serif font-bold text-2xl md:w-11/12">Dune
///     <a href="/authors/42">Frank Herbert</a></h3>
///     <p class="text-sm font-light text-darkestGrey dark:text-grey mt-1">412 pages</p>"#;
/// let book = extract_book(page, "", "").unwrap();
/// assert_eq!(book.title, "Dune");
/// assert_eq!(book.authors, vec!["Frank Herbert"]);
/// assert_eq!(book.pages, "412");
/// ```
pub fn extract_book(
    book_html: &str,
    reviews_html: &str,
    warnings_html: &str,
) -> Result<BookRecord, StoryGraphError> {
    let document = Html::parse_document(book_html);

    let heading = find_first(&document, TITLE_HEADING)?
        .ok_or_else(|| ParseError::new("main title header not found"))?;
    let title = heading
        .leading_text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    let authors = extract_authors(heading)?;

    let metadata = find_first(&document, METADATA_PARAGRAPH)?
        .filter(|p| p.has_child_nodes())
        .ok_or_else(|| ParseError::new("metadata paragraph not found"))?;
    let pages = extract_pages(metadata);
    let first_pub = extract_first_pub(metadata)?;

    let tags = extract_tags(&document)?;
    let description = extract_description(&document)?;
    let average_rating = extract_average_rating(reviews_html)?;
    let warnings = extract_content_warnings(warnings_html)?;

    tracing::debug!(
        "Extracted book '{}' ({} authors, {} tags)",
        title,
        authors.len(),
        tags.len()
    );

    Ok(BookRecord {
        title,
        authors,
        pages,
        first_pub,
        tags,
        average_rating,
        description,
        warnings,
    })
}

/// Author names linked from the title heading, in document order
fn extract_authors(heading: ElementRef<'_>) -> Result<Vec<String>, StoryGraphError> {
    let anchors = selector("a")?;
    Ok(heading
        .descendants_matching(&anchors)
        .into_iter()
        .filter(|a| a.href_starts_with("/authors"))
        .map(|a| a.text_content())
        .collect())
}

/// First token of the paragraph's leading text, e.g. "412" from "412 pages"
fn extract_pages(metadata: ElementRef<'_>) -> String {
    metadata
        .leading_text()
        .and_then(|text| text.split_whitespace().next())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Last token of the second span, e.g. "1965" from "first pub 1965"
fn extract_first_pub(metadata: ElementRef<'_>) -> Result<String, StoryGraphError> {
    let spans = metadata.descendants_matching(&selector("span")?);

    let year = spans
        .get(1)
        .and_then(|span| span.text_content().split_whitespace().last().map(str::to_string))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Ok(year)
}

/// Tag labels from the tag section; no section means no tags
fn extract_tags(document: &Html) -> Result<Vec<String>, StoryGraphError> {
    let Some(section) = find_first(document, TAG_SECTION)? else {
        return Ok(Vec::new());
    };

    Ok(section
        .descendants_matching(&selector("span")?)
        .into_iter()
        .map(|span| span.text_content())
        .collect())
}

/// Description markup from the first script that renders it
fn extract_description(document: &Html) -> Result<String, StoryGraphError> {
    let script = find_all(document, "script")?
        .into_iter()
        .map(|script| script.text_content())
        .find(|text| text.contains(DESCRIPTION_MARKER));

    let description = script
        .as_deref()
        .and_then(|text| DESCRIPTION_RE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| DESCRIPTION_NOT_FOUND.to_string());

    Ok(description)
}
