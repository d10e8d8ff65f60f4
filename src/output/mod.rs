//! Output module for printing operation results
//!
//! This module handles:
//! - Rendering records as indented JSON
//! - Wrapping faults in an `{"error": ...}` envelope

mod json;

pub use json::{render_outcome, to_pretty_json, OutputError, OutputResult};
