//! Error types for layoutdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for layoutdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling or exporting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Table cells do not tile the declared grid.
    #[error("Malformed table: {reason}")]
    MalformedTable {
        /// Human readable description of the first defects found
        reason: String,
    },

    /// The requested output format is not recognised.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a malformed-table error.
    pub fn malformed_table(reason: impl Into<String>) -> Self {
        Error::MalformedTable {
            reason: reason.into(),
        }
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}
