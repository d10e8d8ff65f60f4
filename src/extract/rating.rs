//! Community rating extraction

use crate::extract::dom::{find_first, DomNode};
use crate::model::NOT_AVAILABLE;
use crate::StoryGraphError;
use scraper::Html;

const AVERAGE_RATING: &str = "span.average-star-rating";

/// Returns the average star rating shown on a community reviews page
///
/// Books without enough reviews have no rating element; that yields `"N/A"`.
pub fn extract_average_rating(reviews_html: &str) -> Result<String, StoryGraphError> {
    let document = Html::parse_document(reviews_html);

    Ok(find_first(&document, AVERAGE_RATING)?
        .map(|span| span.text_content().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string()))
}
