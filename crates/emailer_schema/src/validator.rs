//! Field-level validation of untrusted template records.
//!
//! Every rule of a record is checked and every violation collected; a record
//! only becomes a [`Template`] when none fail.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use email_address::EmailAddress;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{SchemaResult, ValidationErrors, ROOT_PATH};
use crate::template::{fields, Template};

/// Maximum subject length, in characters.
pub const SUBJECT_MAX_CHARS: usize = 200;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("id pattern is valid"));

// UTC only: literal `T` and `Z`, optional fraction, no leap second
static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T([01]\d|2[0-3]):[0-5]\d:[0-5]\d(\.\d+)?Z$")
        .expect("date-time pattern is valid")
});

/// chrono format matching [`DATE_TIME_PATTERN`].
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Validator for template records.
pub struct TemplateValidator;

impl TemplateValidator {
    /// Validate one candidate record.
    pub fn validate_template(record: &Value) -> SchemaResult<Template> {
        let Some(map) = record.as_object() else {
            let mut errors = ValidationErrors::new();
            errors.push(
                ROOT_PATH,
                format!("Expected object, received {}", json_type(record)),
            );
            return Err(errors);
        };

        let mut errors = ValidationErrors::new();
        let mut check = |field: &'static str, rule: fn(&str) -> Option<&'static str>| {
            let value = required_string(map, field, &mut errors)?;
            if let Some(message) = rule(value) {
                errors.push(field, message);
                return None;
            }
            Some(value.to_string())
        };

        let id = check(fields::ID, check_id);
        let subject = check(fields::SUBJECT, check_subject);
        let target_recipient = check(fields::TARGET_RECIPIENT, check_email);
        let body = check(fields::BODY, check_body);
        let created_on = check(fields::CREATED_ON, check_created_on);
        let created_by = check(fields::CREATED_BY, check_created_by);

        match (id, subject, target_recipient, body, created_on, created_by) {
            (
                Some(id),
                Some(subject),
                Some(target_recipient),
                Some(body),
                Some(created_on),
                Some(created_by),
            ) if errors.is_empty() => Ok(Template {
                id,
                subject,
                target_recipient,
                body,
                created_on,
                created_by,
                title: optional_string(map, fields::TITLE),
                description: optional_string(map, fields::DESCRIPTION),
            }),
            _ => Err(errors),
        }
    }

    /// Validate a collection atomically: all records or nothing.
    ///
    /// Violations are prefixed with the record index. Identifiers must be
    /// unique across the collection.
    pub fn validate_collection(records: &[Value]) -> SchemaResult<Vec<Template>> {
        let mut templates = Vec::with_capacity(records.len());
        let mut errors = ValidationErrors::new();
        let mut seen = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            match Self::validate_template(record) {
                Ok(template) => {
                    if !seen.insert(template.id.clone()) {
                        errors.push(
                            format!("[{}].{}", index, fields::ID),
                            format!("Duplicate template ID '{}'", template.id),
                        );
                    }
                    templates.push(template);
                }
                Err(record_errors) => {
                    debug!(
                        "Record {} failed validation with {} error(s)",
                        index,
                        record_errors.len()
                    );
                    errors.extend(ValidationErrors(
                        record_errors.into_iter().map(|e| e.at_index(index)).collect(),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(templates)
        } else {
            warn!(
                "Template collection rejected: {} violation(s) across {} record(s)",
                errors.len(),
                records.len()
            );
            Err(errors)
        }
    }
}

/// Look up a required string field, accepting its legacy alias.
fn required_string<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    let value = map
        .get(field)
        .or_else(|| fields::legacy_alias(field).and_then(|alias| map.get(alias)));

    match value {
        None | Some(Value::Null) => {
            errors.push(field, "Required");
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            errors.push(
                field,
                format!("Expected string, received {}", json_type(other)),
            );
            None
        }
    }
}

fn optional_string(map: &Map<String, Value>, field: &str) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            debug!(
                "Dropping {} field: expected string, received {}",
                field,
                json_type(other)
            );
            None
        }
    }
}

fn check_id(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Template ID is required")
    } else if !ID_PATTERN.is_match(value) {
        Some("Template ID must contain only lowercase letters, numbers, and hyphens")
    } else {
        None
    }
}

fn check_subject(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Subject is required")
    } else if value.chars().count() > SUBJECT_MAX_CHARS {
        Some("Subject must be 200 characters or less")
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<&'static str> {
    if is_valid_email(value) {
        None
    } else {
        Some("Must be a valid email address")
    }
}

fn check_body(value: &str) -> Option<&'static str> {
    value.is_empty().then_some("Body is required")
}

fn check_created_on(value: &str) -> Option<&'static str> {
    // The pattern fixes the shape, chrono rejects impossible dates
    if DATE_TIME_PATTERN.is_match(value)
        && NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).is_ok()
    {
        None
    } else {
        Some("Must be a valid ISO 8601 date-time string")
    }
}

fn check_created_by(value: &str) -> Option<&'static str> {
    value.is_empty().then_some("Creator name is required")
}

/// Bare `local@domain.tld` address; display-name forms are rejected.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) || !EmailAddress::is_valid(value) {
        return false;
    }

    match value.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
