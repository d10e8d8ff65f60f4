//! Records produced by the extractors
//!
//! All records are plain values built once per call. They serialize with
//! `serde` into the nested objects the JSON output prints.

use serde::Serialize;

/// Placeholder for a field the page did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder used when no description could be found
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found.";

/// Everything extracted about one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub authors: Vec<String>,
    /// Page count as printed, or `"N/A"`
    pub pages: String,
    /// Year of first publication, or `"N/A"`
    pub first_pub: String,
    pub tags: Vec<String>,
    /// Community average as printed, or `"N/A"`
    pub average_rating: String,
    pub description: String,
    pub warnings: WarningSet,
}

/// User-submitted content warnings grouped by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarningSet {
    pub graphic: Vec<String>,
    pub moderate: Vec<String>,
    pub minor: Vec<String>,
}

impl WarningSet {
    /// Returns true if no warnings were recorded in any category
    pub fn is_empty(&self) -> bool {
        self.graphic.is_empty() && self.moderate.is_empty() && self.minor.is_empty()
    }

    /// Appends a label to the list for `category`
    pub fn push(&mut self, category: WarningCategory, label: String) {
        match category {
            WarningCategory::Graphic => self.graphic.push(label),
            WarningCategory::Moderate => self.moderate.push(label),
            WarningCategory::Minor => self.minor.push(label),
        }
    }
}

/// Severity heading on the content warnings page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WarningCategory {
    #[default]
    Graphic,
    Moderate,
    Minor,
}

impl WarningCategory {
    /// Maps an exact heading text to its category
    pub fn from_heading(text: &str) -> Option<Self> {
        match text {
            "Graphic" => Some(Self::Graphic),
            "Moderate" => Some(Self::Moderate),
            "Minor" => Some(Self::Minor),
            _ => None,
        }
    }
}

/// One entry on a search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    /// First author linked in the entry, or `"N/A"`
    pub author: String,
    /// Last path segment of the title link, or `"N/A"`
    pub book_id: String,
}

/// Reading progress of a book the signed-in account is currently reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingProgress {
    /// Percentage as shown on the progress bar, e.g. `"42%"`
    pub progress: String,
}
