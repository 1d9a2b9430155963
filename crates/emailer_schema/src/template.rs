//! The validated email template model.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A reusable email, reachable only through [`crate::TemplateValidator`].
///
/// Serialize-only: documents are read as loose values and validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique identifier, `^[a-z0-9-]+$`
    pub id: String,
    /// Subject line, 1..=200 characters
    pub subject: String,
    /// Address the email is meant to be sent to
    pub target_recipient: String,
    /// Body text, may reference placeholders
    pub body: String,
    /// ISO-8601 creation timestamp, exactly as written in the document
    pub created_on: String,
    pub created_by: String,
    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Display description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Template {
    /// Parsed creation timestamp.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_on).ok()
    }

    /// Title to show in listings, falling back to the subject.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.subject)
    }
}

/// Canonical document field names.
pub mod fields {
    pub const ID: &str = "id";
    pub const SUBJECT: &str = "subject";
    pub const TARGET_RECIPIENT: &str = "targetRecipient";
    pub const BODY: &str = "body";
    pub const CREATED_ON: &str = "createdOn";
    pub const CREATED_BY: &str = "createdBy";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";

    /// Older documents name some fields differently.
    pub const LEGACY_ALIASES: &[(&str, &str)] = &[
        (ID, "emailId"),
        (TARGET_RECIPIENT, "targetTo"),
        (BODY, "emailBody"),
    ];

    /// Legacy alias for a canonical field, if it has one.
    pub fn legacy_alias(field: &str) -> Option<&'static str> {
        LEGACY_ALIASES
            .iter()
            .find(|(canonical, _)| *canonical == field)
            .map(|(_, alias)| *alias)
    }
}
