//! # emailer_schema
//!
//! The email template data model and its schema validator.
//!
//! Template documents are untrusted: records arrive as loose JSON values and
//! only become a [`Template`] once every field rule holds. Violations are
//! reported per field, never short-circuited within a record.
//!
//! | Field             | Rule                          |
//! |-------------------|-------------------------------|
//! | `id`              | non-empty, `^[a-z0-9-]+$`     |
//! | `subject`         | 1..=200 characters            |
//! | `targetRecipient` | email address syntax          |
//! | `body`            | non-empty                     |
//! | `createdOn`       | ISO-8601 date-time            |
//! | `createdBy`       | non-empty                     |
//!
//! ## Example
//!
//! ```rust
//! use emailer_schema::TemplateValidator;
//! use serde_json::json;
//!
//! let record = json!({
//!     "id": "welcome",
//!     "subject": "Welcome!",
//!     "targetRecipient": "team@example.com",
//!     "body": "Hello {{username}}",
//!     "createdOn": "2024-01-15T10:30:00Z",
//!     "createdBy": "Rory"
//! });
//!
//! let template = TemplateValidator::validate_template(&record).unwrap();
//! assert_eq!(template.id, "welcome");
//! ```

pub mod error;
pub mod template;
pub mod validator;

pub use error::{SchemaResult, ValidationError, ValidationErrors, ROOT_PATH};
pub use template::{fields, Template};
pub use validator::{is_valid_email, TemplateValidator, SUBJECT_MAX_CHARS};
