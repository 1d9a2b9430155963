//! Error types for the template store.

use emailer_schema::ValidationErrors;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or looking up templates.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read template document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template document is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template data is invalid, check the template document. {0}")]
    DataCorrupt(ValidationErrors),

    #[error("Template not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// The document was read but its contents cannot be trusted.
    pub fn is_data_corrupt(&self) -> bool {
        matches!(
            self,
            StoreError::Json(_) | StoreError::Yaml(_) | StoreError::DataCorrupt(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Field-level violations, when the document failed schema validation.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            StoreError::DataCorrupt(errors) => Some(errors),
            _ => None,
        }
    }
}
