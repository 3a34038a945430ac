//! Error types for the JSON writer.

use thiserror::Error;

/// Errors that can occur while writing JSON output.
#[derive(Error, Debug)]
pub enum JsonWriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
