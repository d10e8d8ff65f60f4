//! Reading progress extraction
//!
//! Only a signed-in request for a book the account is currently reading
//! renders the progress bar. At 0% the bar has no label, just an empty
//! inner `div` styled `width: 0%`.

use crate::extract::dom::{find_first, selector, DomNode};
use crate::{ParseError, StoryGraphError};
use scraper::Html;

const PROGRESS_BAR: &str = "div.progress-bar";
const ZERO_WIDTH: &str = "width: 0%";

/// Returns the percentage shown on a book page's progress bar
///
/// # Returns
///
/// * `Ok(String)` - The bar's label, e.g. `"42%"`, or `"0%"` for an empty bar
/// * `Err(StoryGraphError::Parse)` - There is no progress bar (the book is not
///   marked as currently reading), or it shows neither a label nor an empty
///   fill
pub fn extract_reading_progress(book_html: &str) -> Result<String, StoryGraphError> {
    let document = Html::parse_document(book_html);

    let bar = find_first(&document, PROGRESS_BAR)?
        .ok_or_else(|| ParseError::new("progress bar not found"))?;

    let label = bar
        .descendants_matching(&selector("span")?)
        .into_iter()
        .next()
        .map(|span| span.text_content())
        .filter(|text| !text.is_empty());

    if let Some(label) = label {
        return Ok(label.trim().to_string());
    }

    let empty_fill = bar
        .descendants_matching(&selector("div[style]")?)
        .into_iter()
        .any(|div| {
            div.attr_value("style")
                .map(|style| style.contains(ZERO_WIDTH))
                .unwrap_or(false)
        });

    if empty_fill {
        return Ok("0%".to_string());
    }

    Err(ParseError::new("could not extract percentage").into())
}
