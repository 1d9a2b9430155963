//! Parsing and shape normalization of raw template documents.
//!
//! A document is either a list of complete records or a mapping from
//! template ID to the rest of the record. Both become one ordered list of
//! records before validation.

use std::collections::HashSet;
use std::fmt;

use emailer_schema::{fields, ValidationErrors, ROOT_PATH};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Value;
use tracing::debug;

use crate::error::StoreResult;
use crate::source::DocumentFormat;

/// Top level of a parsed template document.
///
/// Keyed entries are kept as written, repeated keys included, so a key
/// that appears twice can be reported instead of silently overwritten.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    List(Vec<Value>),
    Keyed(Vec<(String, Value)>),
    /// Anything else; the payload names what was found.
    Scalar(&'static str),
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of templates or a mapping keyed by template ID")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Document, A::Error> {
        let mut records = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(record) = seq.next_element::<Value>()? {
            records.push(record);
        }
        Ok(Document::List(records))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Document, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, Value>()? {
            entries.push(entry);
        }
        Ok(Document::Keyed(entries))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Document, E> {
        Ok(Document::Scalar("boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Document, E> {
        Ok(Document::Scalar("number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Document, E> {
        Ok(Document::Scalar("number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Document, E> {
        Ok(Document::Scalar("number"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Document, E> {
        Ok(Document::Scalar("string"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Scalar("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Scalar("null"))
    }
}

/// Parse document text, keeping the top-level shape.
pub fn parse(text: &str, format: DocumentFormat) -> StoreResult<Document> {
    let document: Document = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(document)
}

/// Flatten either document shape into a list of records.
///
/// In the keyed shape each key is folded into its record as `id`, unless
/// the record already names its own. A key used twice is a duplicate
/// template ID.
pub fn normalize(document: Document) -> Result<Vec<Value>, ValidationErrors> {
    match document {
        Document::List(records) => Ok(records),
        Document::Keyed(entries) => {
            debug!("Normalizing keyed document with {} entries", entries.len());
            let mut errors = ValidationErrors::new();
            let mut seen = HashSet::new();
            for (index, (key, _)) in entries.iter().enumerate() {
                if !seen.insert(key.as_str()) {
                    errors.push(
                        format!("[{}].{}", index, fields::ID),
                        format!("Duplicate template ID '{}'", key),
                    );
                }
            }
            if !errors.is_empty() {
                return Err(errors);
            }
            Ok(entries
                .into_iter()
                .map(|(key, record)| fold_key(key, record))
                .collect())
        }
        Document::Scalar(kind) => {
            let mut errors = ValidationErrors::new();
            errors.push(
                ROOT_PATH,
                format!(
                    "Expected a list of templates or an object keyed by template ID, found a {}",
                    kind
                ),
            );
            Err(errors)
        }
    }
}

fn fold_key(key: String, record: Value) -> Value {
    match record {
        Value::Object(mut map) => {
            let has_id = map.contains_key(fields::ID)
                || fields::legacy_alias(fields::ID).is_some_and(|alias| map.contains_key(alias));
            if !has_id {
                map.insert(fields::ID.to_string(), Value::String(key));
            }
            Value::Object(map)
        }
        other => other,
    }
}
