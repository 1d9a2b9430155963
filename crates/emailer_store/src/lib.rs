//! # emailer_store
//!
//! Loads the template document, normalizes its shape and validates it as a
//! whole before handing out [`Template`](emailer_schema::Template)s.
//!
//! Failures stay distinguishable: [`StoreError::Io`] when the document could
//! not be read, [`StoreError::DataCorrupt`] (or a parse error) when its
//! contents are invalid, and [`StoreError::NotFound`] when a well-formed
//! document has no template with the requested ID.
//!
//! ## Example
//!
//! ```rust
//! use emailer_store::TemplateStore;
//!
//! let store = TemplateStore::bundled();
//! let template = store.get_by_id("welcome-email").unwrap();
//! assert_eq!(template.target_recipient, "members@example.org");
//! assert!(store.get_by_id("missing").unwrap_err().is_not_found());
//! ```

pub mod document;
pub mod error;
pub mod source;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use source::{DocumentFormat, DocumentSource, FileSource, StaticSource, BUNDLED_DOCUMENT};
pub use store::{TemplateCatalog, TemplateStore};
