//! Content warnings extraction
//!
//! The warnings page has several `standard-pane` blocks. The second one
//! lists what readers reported, as a flat run of siblings:
//!
//! ```text
//! <p>Graphic</p>
//! <div>Violence (12)</div>
//! <p>Minor</p>
//! <div>Language (3)</div>
//! ```
//!
//! Each `p` heading switches the category for the `div` entries after it.

use crate::extract::dom::{find_all, DomNode};
use crate::model::{WarningCategory, WarningSet};
use crate::StoryGraphError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

const STANDARD_PANE: &str = "div.standard-pane";

/// Position of the reader-submitted pane among the standard panes
const USER_WARNINGS_PANE: usize = 1;

/// "<label> (<count>)", optionally followed by one newline
static WARNING_ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*) \((\d+)\)\n?$").unwrap());

/// Groups the reader-submitted content warnings by severity
///
/// A page without the reader pane yields an empty [`WarningSet`]; many books
/// simply have no reports.
///
/// # Example
///
/// ```
/// use storygraph_reader::extract::extract_content_warnings;
///
/// let html = r#"<div class="standard-pane"></div>
///     <div class="standard-pane"><p>Minor</p><div>Language (3)</div></div>"#;
/// let warnings = extract_content_warnings(html).unwrap();
/// assert_eq!(warnings.minor, vec!["Language"]);
/// ```
pub fn extract_content_warnings(warnings_html: &str) -> Result<WarningSet, StoryGraphError> {
    let document = Html::parse_document(warnings_html);
    let panes = find_all(&document, STANDARD_PANE)?;

    let Some(pane) = panes.get(USER_WARNINGS_PANE) else {
        tracing::debug!("No reader warnings pane ({} panes found)", panes.len());
        return Ok(WarningSet::default());
    };

    let mut warnings = WarningSet::default();
    let mut current = WarningCategory::default();

    for child in pane.child_elements() {
        match child.tag_name() {
            "p" => {
                if let Some(category) = WarningCategory::from_heading(&child.text_content()) {
                    current = category;
                }
            }
            "div" => {
                if let Some(label) = warning_label(&child.text_content()) {
                    warnings.push(current, label);
                }
            }
            _ => {}
        }
    }

    Ok(warnings)
}

/// Label of an entry like "Violence (12)"; `None` if there is no count suffix
fn warning_label(text: &str) -> Option<String> {
    WARNING_ENTRY_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
