//! # emailer_placeholders
//!
//! Pure text transforms over `{{name}}` placeholder tokens.
//!
//! A token is `{{` followed by one or more of `[A-Za-z0-9_]` and `}}`. Spaced
//! (`{{ name }}`) and single-brace (`{name}`) forms are plain text.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use emailer_placeholders::{extract, substitute};
//!
//! let text = "Hello {{username}}, from {{company}}!";
//! assert_eq!(extract(text), vec!["username", "company"]);
//!
//! let values = HashMap::from([("username".to_string(), "Sam".to_string())]);
//! assert_eq!(substitute(text, &values), "Hello Sam, from {{company}}!");
//! ```

pub mod engine;

pub use engine::{
    describe, extract, has_any, substitute, substitute_with, validate_completeness, Completeness,
    PlaceholderDescription, PlaceholderEngine, PlaceholderValues, Unmatched,
};
