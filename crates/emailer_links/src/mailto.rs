//! `mailto:` links and rendered previews for sending a template.

use emailer_placeholders::{substitute_with, PlaceholderValues, Unmatched};
use emailer_schema::Template;
use serde::Serialize;
use url::form_urlencoded;

/// A template with placeholders filled in, as shown to and copied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl RenderedEmail {
    /// `mailto:` link pre-populating recipient, subject and body.
    pub fn to_mailto(&self) -> String {
        mailto(&self.to, &self.subject, &self.body)
    }
}

/// Percent-encode a URI component; spaces become `%20`.
pub fn encode_component(value: &str) -> String {
    // form encoding writes spaces as '+' and escapes literal '+' as %2B
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Build a `mailto:` URL.
pub fn mailto(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        encode_component(subject),
        encode_component(body)
    )
}

/// Fill placeholders in subject and body.
pub fn preview(
    template: &Template,
    values: &PlaceholderValues,
    unmatched: Unmatched,
) -> RenderedEmail {
    RenderedEmail {
        to: template.target_recipient.clone(),
        subject: substitute_with(&template.subject, values, unmatched),
        body: substitute_with(&template.body, values, unmatched),
    }
}

/// Link that opens the user's mail client with the template filled in.
///
/// Without values the template text is used verbatim; unmatched tokens are
/// always kept.
pub fn send_link(template: &Template, values: Option<&PlaceholderValues>) -> String {
    match values {
        Some(values) => preview(template, values, Unmatched::Keep).to_mailto(),
        None => mailto(&template.target_recipient, &template.subject, &template.body),
    }
}
