//! Placeholder detection and substitution.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

/// Caller-supplied replacement values, keyed by placeholder name.
pub type PlaceholderValues = HashMap<String, String>;

/// What to do with a token whose name has no supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unmatched {
    /// Leave the token in the text unchanged
    #[default]
    Keep,
    /// Delete the token
    Remove,
}

/// Outcome of a completeness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completeness {
    pub is_valid: bool,
    /// Names without a non-empty value, in extraction order
    #[serde(rename = "missingPlaceholders")]
    pub missing: Vec<String>,
}

/// A placeholder name paired with how it is written in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderDescription {
    pub name: String,
    pub display: String,
}

static DEFAULT_ENGINE: LazyLock<PlaceholderEngine> = LazyLock::new(PlaceholderEngine::new);

/// Compiled placeholder matcher.
pub struct PlaceholderEngine {
    token_pattern: Regex,
}

impl Default for PlaceholderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderEngine {
    /// Create a new placeholder engine.
    pub fn new() -> Self {
        Self {
            // Match {{name}} with no inner whitespace
            token_pattern: Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}")
                .expect("placeholder pattern is valid"),
        }
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.token_pattern
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// Check whether the text contains at least one token.
    pub fn has_any(&self, text: &str) -> bool {
        self.token_pattern.is_match(text)
    }

    /// Replace every token whose name has a value with that value.
    ///
    /// Single pass: inserted values are never scanned for further tokens.
    pub fn substitute(
        &self,
        text: &str,
        values: &PlaceholderValues,
        unmatched: Unmatched,
    ) -> String {
        self.token_pattern
            .replace_all(text, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => match unmatched {
                    Unmatched::Keep => caps[0].to_string(),
                    Unmatched::Remove => String::new(),
                },
            })
            .into_owned()
    }

    /// Check that every referenced name has a non-empty value.
    pub fn validate_completeness(&self, text: &str, values: &PlaceholderValues) -> Completeness {
        let missing: Vec<String> = self
            .extract(text)
            .into_iter()
            .filter(|name| values.get(name).map_or(true, |v| v.is_empty()))
            .collect();

        if !missing.is_empty() {
            debug!("Missing placeholder values: {}", missing.join(", "));
        }

        Completeness {
            is_valid: missing.is_empty(),
            missing,
        }
    }

    /// Distinct names with their `{{name}}` display form.
    pub fn describe(&self, text: &str) -> Vec<PlaceholderDescription> {
        self.extract(text)
            .into_iter()
            .map(|name| PlaceholderDescription {
                display: format!("{{{{{}}}}}", name),
                name,
            })
            .collect()
    }
}

/// Distinct placeholder names in `text`, in order of first appearance.
pub fn extract(text: &str) -> Vec<String> {
    DEFAULT_ENGINE.extract(text)
}

/// True if `text` references at least one placeholder.
pub fn has_any(text: &str) -> bool {
    DEFAULT_ENGINE.has_any(text)
}

/// Substitute known placeholders, keeping unmatched tokens.
pub fn substitute(text: &str, values: &PlaceholderValues) -> String {
    DEFAULT_ENGINE.substitute(text, values, Unmatched::Keep)
}

/// Substitute known placeholders with an explicit policy for unmatched tokens.
pub fn substitute_with(text: &str, values: &PlaceholderValues, unmatched: Unmatched) -> String {
    DEFAULT_ENGINE.substitute(text, values, unmatched)
}

/// Report placeholders lacking a non-empty value.
pub fn validate_completeness(text: &str, values: &PlaceholderValues) -> Completeness {
    DEFAULT_ENGINE.validate_completeness(text, values)
}

/// Describe the placeholders of `text` for presentation.
pub fn describe(text: &str) -> Vec<PlaceholderDescription> {
    DEFAULT_ENGINE.describe(text)
}
