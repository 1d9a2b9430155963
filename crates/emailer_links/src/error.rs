//! Error types for link building.

use emailer_schema::ValidationErrors;
use thiserror::Error;

/// Result type alias for link operations.
pub type LinkResult<T> = Result<T, LinkError>;

/// Errors that can occur while building links and submissions.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Draft is not a valid template: {0}")]
    InvalidDraft(#[from] ValidationErrors),

    #[error("Invalid maintainer address: {0}")]
    InvalidMaintainer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
