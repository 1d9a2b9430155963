//! Error types for schema validation.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type alias for validation operations.
pub type SchemaResult<T> = Result<T, ValidationErrors>;

/// Path used when a violation concerns the record or document as a whole.
pub const ROOT_PATH: &str = "data";

/// A single violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. `subject` or `[2].id`)
    pub path: String,
    /// Human-readable reason
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Re-root this error under a collection index.
    pub fn at_index(self, index: usize) -> Self {
        let path = if self.path == ROOT_PATH {
            format!("[{}]", index)
        } else {
            format!("[{}].{}", index, self.path)
        };
        Self { path, ..self }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every rule a record (or collection) violated.
///
/// Never empty when returned as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[error("Template validation failed: {}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.push(ValidationError::new(path, message));
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Check whether any violation names the given path.
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }

    /// Human-readable `path: message` lines.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_index_prefixes_path() {
        let err = ValidationError::new("subject", "Subject is required").at_index(2);
        assert_eq!(err.path, "[2].subject");

        let root = ValidationError::new(ROOT_PATH, "Expected object, received number").at_index(0);
        assert_eq!(root.path, "[0]");
    }

    #[test]
    fn test_display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.push("id", "Required");
        errors.push("body", "Body is required");
        assert_eq!(
            errors.to_string(),
            "Template validation failed: id: Required, body: Body is required"
        );
        assert!(errors.has_path("body"));
        assert!(!errors.has_path("subject"));
    }
}
