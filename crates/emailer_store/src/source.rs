//! Where the raw template document comes from.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Document compiled into the crate.
pub const BUNDLED_DOCUMENT: &str = include_str!("../data/templates.json");

/// Serialization format of a template document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension; anything unknown is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// A readable template document.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource {
    /// Read the whole document as text.
    fn read(&self) -> std::io::Result<String>;

    /// Format of the text returned by [`DocumentSource::read`].
    fn format(&self) -> DocumentFormat;

    /// Short description for log messages.
    fn describe(&self) -> String;
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn read(&self) -> std::io::Result<String> {
        (**self).read()
    }

    fn format(&self) -> DocumentFormat {
        (**self).format()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Document stored on disk, re-read on every access.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn read(&self) -> std::io::Result<String> {
        debug!("Reading template document from {:?}", self.path);
        fs::read_to_string(&self.path)
    }

    fn format(&self) -> DocumentFormat {
        self.format
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Document held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    content: String,
    format: DocumentFormat,
}

impl StaticSource {
    pub fn new(content: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            content: content.into(),
            format,
        }
    }

    pub fn json(content: impl Into<String>) -> Self {
        Self::new(content, DocumentFormat::Json)
    }

    /// The document shipped with the crate.
    pub fn bundled() -> Self {
        Self::json(BUNDLED_DOCUMENT)
    }
}

impl DocumentSource for StaticSource {
    fn read(&self) -> std::io::Result<String> {
        Ok(self.content.clone())
    }

    fn format(&self) -> DocumentFormat {
        self.format
    }

    fn describe(&self) -> String {
        "in-memory document".to_string()
    }
}
