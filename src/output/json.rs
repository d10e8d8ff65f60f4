//! JSON rendering of operation outcomes

use crate::fault::{Fault, Outcome};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Errors that can occur while rendering output
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Output was not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a Fault,
}

/// Renders a value as JSON indented by four spaces
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> OutputResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Renders an outcome: the record itself, or `{"error": {...}}` for a fault
///
/// # Example
///
/// ```
/// use storygraph_reader::output::render_outcome;
/// use storygraph_reader::{Outcome, ReadingProgress};
///
/// let outcome: Outcome<ReadingProgress> = Ok(ReadingProgress { progress: "42%".to_string() });
/// assert_eq!(render_outcome(&outcome).unwrap(), "{\n    \"progress\": \"42%\"\n}");
/// ```
pub fn render_outcome<T: Serialize>(outcome: &Outcome<T>) -> OutputResult<String> {
    match outcome {
        Ok(record) => to_pretty_json(record),
        Err(fault) => to_pretty_json(&ErrorEnvelope { error: fault }),
    }
}
