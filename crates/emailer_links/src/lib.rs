//! # emailer_links
//!
//! Turns validated templates into things the user's mail client understands.
//!
//! - [`send_link`]: `mailto:` link with recipient, subject and body, with
//!   placeholders optionally filled in
//! - [`preview`]: the filled-in text, for display and copying
//! - [`TemplateDraft`] / [`submit_link`]: package a new template for the
//!   maintainer of the template document
//!
//! ## Example
//!
//! ```rust
//! use emailer_links::send_link;
//! use emailer_placeholders::PlaceholderValues;
//! use emailer_schema::TemplateValidator;
//! use serde_json::json;
//!
//! let template = TemplateValidator::validate_template(&json!({
//!     "id": "hello",
//!     "subject": "Hello",
//!     "targetRecipient": "team@example.com",
//!     "body": "Hi {{name}}",
//!     "createdOn": "2024-01-15T10:30:00Z",
//!     "createdBy": "Rory"
//! }))
//! .unwrap();
//!
//! let values = PlaceholderValues::from([("name".to_string(), "Sam".to_string())]);
//! assert_eq!(
//!     send_link(&template, Some(&values)),
//!     "mailto:team@example.com?subject=Hello&body=Hi%20Sam"
//! );
//! ```

pub mod draft;
pub mod error;
pub mod mailto;

use emailer_placeholders::{extract, has_any};
use emailer_schema::Template;

pub use draft::{submission_json, submit_link, TemplateDraft};
pub use error::{LinkError, LinkResult};
pub use mailto::{encode_component, mailto, preview, send_link, RenderedEmail};

/// Distinct placeholders of a template: subject first, then body.
pub fn template_placeholders(template: &Template) -> Vec<String> {
    let mut names = extract(&template.subject);
    for name in extract(&template.body) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// True if the subject or body references a placeholder.
pub fn template_has_placeholders(template: &Template) -> bool {
    has_any(&template.subject) || has_any(&template.body)
}
