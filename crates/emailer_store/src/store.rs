//! Read-side template store.

use std::path::PathBuf;

use emailer_schema::{Template, TemplateValidator};
use tracing::{debug, info, warn};

use crate::document;
use crate::error::{StoreError, StoreResult};
use crate::source::{DocumentSource, FileSource, StaticSource};

/// Validated templates from one load, in document order.
///
/// A catalog is a snapshot; load again to observe document changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Get a template by ID.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Check if a template exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id.as_str()).collect()
    }

    /// Templates written by the given author.
    pub fn by_creator(&self, created_by: &str) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.created_by == created_by)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn into_templates(self) -> Vec<Template> {
        self.templates
    }
}

impl IntoIterator for TemplateCatalog {
    type Item = Template;
    type IntoIter = std::vec::IntoIter<Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.into_iter()
    }
}

/// Template store over a document source.
///
/// Every call reads and validates the document afresh.
pub struct TemplateStore<S = StaticSource> {
    source: S,
}

impl TemplateStore<StaticSource> {
    /// Store over the document compiled into this crate.
    pub fn bundled() -> Self {
        Self::new(StaticSource::bundled())
    }
}

impl TemplateStore<FileSource> {
    /// Store over a document on disk.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }
}

impl<S: DocumentSource> TemplateStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load and validate every template in the document.
    ///
    /// Fails with [`StoreError::DataCorrupt`] if any record is invalid; no
    /// partial collection is ever returned.
    pub fn load_all(&self) -> StoreResult<Vec<Template>> {
        self.load_catalog().map(TemplateCatalog::into_templates)
    }

    /// Load the document into a catalog for repeated lookups.
    pub fn load_catalog(&self) -> StoreResult<TemplateCatalog> {
        let name = self.source.describe();
        debug!("Loading templates from {}", name);

        let text = self.source.read()?;
        let document = document::parse(&text, self.source.format())?;
        let records = document::normalize(document).map_err(StoreError::DataCorrupt)?;

        match TemplateValidator::validate_collection(&records) {
            Ok(templates) => {
                info!("Loaded {} template(s) from {}", templates.len(), name);
                Ok(TemplateCatalog::new(templates))
            }
            Err(errors) => {
                warn!("Template document {} failed validation: {}", name, errors);
                Err(StoreError::DataCorrupt(errors))
            }
        }
    }

    /// Look up one template by ID.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Template> {
        let catalog = self.load_catalog()?;
        match catalog.into_iter().find(|t| t.id == id) {
            Some(template) => Ok(template),
            None => {
                debug!("Template {} not found", id);
                Err(StoreError::NotFound(id.to_string()))
            }
        }
    }
}
