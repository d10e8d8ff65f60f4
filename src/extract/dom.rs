//! Node helpers shared by the extractors
//!
//! The extractors only ever ask a parsed element a handful of questions:
//! does it have children, what is this attribute, what text does it hold.
//! [`DomNode`] is that capability set over `scraper`'s element references.

use crate::StoryGraphError;
use scraper::{ElementRef, Html, Selector};

/// Compiles a CSS selector
///
/// Selectors in this crate are constants, so a failure here is a bug rather
/// than a problem with the page and is reported as such.
pub fn selector(css: &str) -> Result<Selector, StoryGraphError> {
    Selector::parse(css).map_err(|e| StoryGraphError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Returns the first element in the document matching `css`
pub fn find_first<'a>(
    document: &'a Html,
    css: &str,
) -> Result<Option<ElementRef<'a>>, StoryGraphError> {
    let selector = selector(css)?;
    Ok(document.select(&selector).next())
}

/// Returns every element in the document matching `css`, in document order
pub fn find_all<'a>(
    document: &'a Html,
    css: &str,
) -> Result<Vec<ElementRef<'a>>, StoryGraphError> {
    let selector = selector(css)?;
    Ok(document.select(&selector).collect())
}

/// The questions extractors ask of a parsed element
pub trait DomNode<'a> {
    /// Lowercase tag name
    fn tag_name(&self) -> &'a str;

    /// True if the element has at least one child node of any kind
    fn has_child_nodes(&self) -> bool;

    /// Value of an attribute, if present
    fn attr_value(&self, name: &str) -> Option<&'a str>;

    /// Concatenated text of all descendant text nodes
    fn text_content(&self) -> String;

    /// The first child node when it is a text node
    fn leading_text(&self) -> Option<&'a str>;

    /// Direct children that are elements, skipping text and comments
    fn child_elements(&self) -> Vec<ElementRef<'a>>;

    /// Descendant elements matching a compiled selector
    fn descendants_matching(&self, selector: &Selector) -> Vec<ElementRef<'a>>;

    /// True if the element's `href` starts with `prefix`
    fn href_starts_with(&self, prefix: &str) -> bool {
        self.attr_value("href")
            .map(|href| href.starts_with(prefix))
            .unwrap_or(false)
    }
}

impl<'a> DomNode<'a> for ElementRef<'a> {
    fn tag_name(&self) -> &'a str {
        self.value().name()
    }

    fn has_child_nodes(&self) -> bool {
        self.first_child().is_some()
    }

    fn attr_value(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn leading_text(&self) -> Option<&'a str> {
        self.first_child()
            .and_then(|node| node.value().as_text())
            .map(|text| &**text)
    }

    fn child_elements(&self) -> Vec<ElementRef<'a>> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn descendants_matching(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }
}
