//! Fault boundary for public operations
//!
//! Every public operation runs its fetch-then-extract work through [`guard`].
//! Whatever goes wrong inside, including a panic, comes out as a [`Fault`]
//! of one of three kinds:
//!
//! | Kind | Raised by | Message |
//! |------|-----------|---------|
//! | `Request` | transport failure, 4xx/5xx status | `"{operation} request failed: {cause}"` |
//! | `Parsing` | a required node is missing | the extractor's diagnostic |
//! | `Unexpected` | anything else | `"unexpected error during {operation}"`, cause kept separately |

use crate::StoryGraphError;
use futures::FutureExt;
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Classification of a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// The page could not be fetched
    Request,
    /// The page was fetched but lacked a node the extractor requires
    Parsing,
    /// Any other failure
    Unexpected,
}

impl FaultKind {
    /// Classifies an error
    pub fn of(error: &StoryGraphError) -> Self {
        match error {
            StoryGraphError::Http { .. }
            | StoryGraphError::Status { .. }
            | StoryGraphError::Reqwest(_) => Self::Request,
            StoryGraphError::Parse(_) => Self::Parsing,
            StoryGraphError::Config(_) | StoryGraphError::Selector { .. } => Self::Unexpected,
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FaultKind::Request => "request fault",
            FaultKind::Parsing => "parsing fault",
            FaultKind::Unexpected => "unexpected fault",
        };
        write!(f, "{}", s)
    }
}

/// The uniform error shape returned by every public operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind} in {operation}: {message}")]
pub struct Fault {
    pub kind: FaultKind,
    /// Name of the public operation that failed
    pub operation: String,
    pub message: String,
    /// Underlying cause of an unexpected fault, for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl Fault {
    /// Converts an error raised inside `operation` into a fault
    pub fn from_error(operation: &str, error: StoryGraphError) -> Self {
        match FaultKind::of(&error) {
            FaultKind::Request => Self {
                kind: FaultKind::Request,
                operation: operation.to_string(),
                message: format!("{} request failed: {}", operation, error),
                cause: None,
            },
            FaultKind::Parsing => Self {
                kind: FaultKind::Parsing,
                operation: operation.to_string(),
                message: error.to_string(),
                cause: None,
            },
            FaultKind::Unexpected => Self::unexpected(operation, error.to_string()),
        }
    }

    /// An unexpected fault with its cause preserved
    pub fn unexpected(operation: &str, cause: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Unexpected,
            operation: operation.to_string(),
            message: format!("unexpected error during {}", operation),
            cause: Some(cause.into()),
        }
    }

    pub fn is_request(&self) -> bool {
        self.kind == FaultKind::Request
    }

    pub fn is_parsing(&self) -> bool {
        self.kind == FaultKind::Parsing
    }

    pub fn is_unexpected(&self) -> bool {
        self.kind == FaultKind::Unexpected
    }
}

/// Result of a public operation: the record, or a classified fault
pub type Outcome<T> = std::result::Result<T, Fault>;

/// Runs `work` as the public operation `operation`
///
/// Success passes through untouched. An error is classified with
/// [`FaultKind::of`]; a panic becomes an unexpected fault carrying the panic
/// message.
///
/// # Example
///
/// ```
/// use storygraph_reader::fault::{guard, FaultKind};
/// use storygraph_reader::ParseError;
///
/// # #[tokio::main]
/// # async fn main() {
/// let fault = guard("search", async {
///     Err::<(), storygraph_reader::StoryGraphError>(ParseError::new("results list not found").into())
/// })
/// .await
/// .unwrap_err();
///
/// assert_eq!(fault.kind, FaultKind::Parsing);
/// assert_eq!(fault.message, "results list not found");
/// # }
/// ```
pub async fn guard<T, F>(operation: &str, work: F) -> Outcome<T>
where
    F: Future<Output = crate::Result<T>>,
{
    let fault = match AssertUnwindSafe(work).catch_unwind().await {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(error)) => Fault::from_error(operation, error),
        Err(payload) => Fault::unexpected(operation, panic_message(payload.as_ref())),
    };

    match fault.kind {
        FaultKind::Unexpected => tracing::error!(
            "{} failed: {} ({})",
            operation,
            fault.message,
            fault.cause.as_deref().unwrap_or("no cause")
        ),
        _ => tracing::warn!("{} failed: {}", operation, fault.message),
    }

    Err(fault)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
