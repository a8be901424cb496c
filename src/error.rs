//! Error types for dartlens
//!
//! Checks themselves never produce errors: file reads degrade to empty
//! content and missing directories to empty file lists. The only fallible
//! operations are at the output boundary.

use thiserror::Error;

/// Main error type for dartlens
#[derive(Error, Debug)]
pub enum DartLensError {
    /// Failed to write the JSON export
    #[error("Failed to write report to '{path}': {source}")]
    ReportWrite {
        /// Destination path
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize the report
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
