//! Input model: the JSON error report.

use serde::Deserialize;

/// One documented error condition.
///
/// Unknown fields in the input are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    /// Source file the error is declared in; records are grouped by it.
    pub file: String,
    /// Error identifier, rendered as a section heading.
    pub name: String,
    /// One-line summary.
    pub short_message: String,
    /// Full description.
    pub long_message: String,
}

/// Top-level input document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorReport {
    /// Records in input order.
    pub errors: Vec<ErrorRecord>,
}

impl ErrorReport {
    /// Parses a complete JSON document.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the bytes are not JSON, `errors` is
    /// missing or not an array, or a record lacks one of its string fields.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
