//! Error types for schema cleaning.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema document is not a JSON object")]
    NotAnObject,

    #[error("schema document has no string title")]
    MissingTitle,
}
