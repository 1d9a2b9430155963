//! CLI settings, read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use emailer_placeholders::Unmatched;
use emailer_store::{DocumentSource, FileSource, StaticSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "emailer.toml";

/// Settings for the `emailer` CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Template document; the bundled document is used when unset
    pub data_path: Option<PathBuf>,
    /// Maintainer address new template drafts are mailed to
    pub submit_to: String,
    /// Keep `{{name}}` tokens that have no value when rendering
    pub keep_unmatched: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            submit_to: "templates@example.org".to_string(),
            keep_unmatched: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override the document path (from `--data` / `EMAILER_DATA`).
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.data_path = path;
        }
        self
    }

    pub fn unmatched(&self) -> Unmatched {
        if self.keep_unmatched {
            Unmatched::Keep
        } else {
            Unmatched::Remove
        }
    }

    /// Document source these settings point at.
    pub fn document_source(&self) -> Box<dyn DocumentSource> {
        match &self.data_path {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(StaticSource::bundled()),
        }
    }
}
