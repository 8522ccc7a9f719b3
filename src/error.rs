//! Error types for `errdocs`
//!
//! A flat taxonomy: input errors (the report could not be read or parsed)
//! and filesystem errors (the output directory or a document could not be
//! written). Both map to the same non-zero exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the `errdocs` binary.
pub struct ExitCode;

impl ExitCode {
    /// Every document was written.
    pub const SUCCESS: i32 = 0;

    /// Any failure: malformed input, unreadable input, filesystem error.
    pub const ERROR: i32 = 1;
}

// ============================================================================
// Generation Errors
// ============================================================================

/// Broad class of a [`GenerateError`].
///
/// Output streams count as part of the filesystem side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The report could not be read or is not a usable error report.
    Input,
    /// The output directory or a document could not be written.
    Filesystem,
}

/// Errors returned by a generation run.
///
/// The run aborts on the first error. Documents written before the failure
/// are left on disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Reading the input source failed.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// The input is not JSON, or lacks a usable `errors` sequence.
    #[error("invalid error report: {0}")]
    Parse(#[from] serde_json::Error),

    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A confirmation line could not be written to the output stream.
    #[error("failed to report progress: {0}")]
    Console(#[source] std::io::Error),
}

impl GenerateError {
    /// Returns whether this is an input or a filesystem failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Read(_) | Self::Parse(_) => ErrorKind::Input,
            Self::CreateDir { .. } | Self::Write { .. } | Self::Console(_) => {
                ErrorKind::Filesystem
            }
        }
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Input | ErrorKind::Filesystem => ExitCode::ERROR,
        }
    }
}
