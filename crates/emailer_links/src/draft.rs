//! Drafting new templates and packaging them for submission.
//!
//! Templates are added by editing the document by hand, so a finished draft
//! is mailed to the maintainer as ready-to-paste JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use emailer_schema::{fields, is_valid_email, Template, TemplateValidator, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LinkError, LinkResult};
use crate::mailto::mailto;

/// Form input for a new template. `createdOn` is stamped at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    pub id: String,
    pub subject: String,
    pub target_recipient: String,
    pub body: String,
    pub created_by: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TemplateDraft {
    /// Build the record the draft would become at `now`.
    pub fn to_record(&self, now: DateTime<Utc>) -> Value {
        let mut record = Map::new();
        record.insert(fields::ID.into(), self.id.clone().into());
        record.insert(fields::SUBJECT.into(), self.subject.clone().into());
        record.insert(
            fields::TARGET_RECIPIENT.into(),
            self.target_recipient.clone().into(),
        );
        record.insert(fields::BODY.into(), self.body.clone().into());
        record.insert(
            fields::CREATED_ON.into(),
            now.to_rfc3339_opts(SecondsFormat::Millis, true).into(),
        );
        record.insert(fields::CREATED_BY.into(), self.created_by.clone().into());
        if let Some(title) = &self.title {
            record.insert(fields::TITLE.into(), title.clone().into());
        }
        if let Some(description) = &self.description {
            record.insert(fields::DESCRIPTION.into(), description.clone().into());
        }
        Value::Object(record)
    }

    /// Validate the draft as if created at `now`.
    pub fn validate_at(&self, now: DateTime<Utc>) -> LinkResult<Template> {
        let template = TemplateValidator::validate_template(&self.to_record(now))?;
        debug!("Draft {} is valid", template.id);
        Ok(template)
    }

    /// Validate the draft as if created now.
    pub fn validate(&self) -> LinkResult<Template> {
        self.validate_at(Utc::now())
    }

    /// Violations of user-editable fields; the generated timestamp is excluded.
    pub fn form_errors(&self) -> ValidationErrors {
        match TemplateValidator::validate_template(&self.to_record(Utc::now())) {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => ValidationErrors(
                errors
                    .into_iter()
                    .filter(|e| e.path != fields::CREATED_ON)
                    .collect(),
            ),
        }
    }
}

/// Pretty-printed JSON of a template, ready to paste into the document.
pub fn submission_json(template: &Template) -> LinkResult<String> {
    Ok(serde_json::to_string_pretty(template)?)
}

/// Link asking the maintainer to add `template` to the document.
pub fn submit_link(template: &Template, maintainer: &str) -> LinkResult<String> {
    if !is_valid_email(maintainer) {
        return Err(LinkError::InvalidMaintainer(maintainer.to_string()));
    }

    let subject = format!("New Email Template Submission - {}", template.id);
    let body = format!(
        "Hi! Please add this email template to the emailer app.\n\n\
         Copy the JSON below and add it to the templates document:\n\n\
         {}\n",
        submission_json(template)?
    );

    Ok(mailto(maintainer, &subject, &body))
}
