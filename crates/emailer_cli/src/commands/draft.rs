//! Draft command - Validate a new template and package it for submission.

use anyhow::Result;
use clap::Args;
use emailer_links::{submission_json, submit_link, LinkError, TemplateDraft};
use tracing::info;

use crate::config::Settings;

#[derive(Args)]
pub struct DraftArgs {
    /// Template ID (lowercase letters, numbers, hyphens)
    #[arg(long)]
    pub id: String,

    /// Subject line
    #[arg(long)]
    pub subject: String,

    /// Recipient address
    #[arg(long = "to")]
    pub target_recipient: String,

    /// Body text
    #[arg(long)]
    pub body: String,

    /// Author name
    #[arg(long)]
    pub created_by: String,

    /// Display title
    #[arg(long)]
    pub title: Option<String>,

    /// Display description
    #[arg(long)]
    pub description: Option<String>,

    /// Maintainer address (defaults to `submit_to` from the settings file)
    #[arg(long)]
    pub maintainer: Option<String>,
}

impl From<DraftArgs> for TemplateDraft {
    fn from(args: DraftArgs) -> Self {
        TemplateDraft {
            id: args.id,
            subject: args.subject,
            target_recipient: args.target_recipient,
            body: args.body,
            created_by: args.created_by,
            title: args.title,
            description: args.description,
        }
    }
}

pub fn execute(args: DraftArgs, settings: &Settings) -> Result<()> {
    let maintainer = args
        .maintainer
        .clone()
        .unwrap_or_else(|| settings.submit_to.clone());
    let draft = TemplateDraft::from(args);

    let errors = draft.form_errors();
    if !errors.is_empty() {
        println!("❌ Draft is not a valid template:");
        for error in &errors {
            println!("   - {}", error);
        }
        return Err(LinkError::InvalidDraft(errors).into());
    }
    let template = draft.validate()?;

    info!("Draft {} is valid, preparing submission", template.id);
    println!("✅ Draft is valid. Add this to the templates document:");
    println!();
    println!("{}", submission_json(&template)?);
    println!();
    println!("Submission link:");
    println!("{}", submit_link(&template, &maintainer)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> DraftArgs {
        DraftArgs {
            id: "bin-collection".to_string(),
            subject: "Missed bin collection".to_string(),
            target_recipient: "waste@council.example.gov".to_string(),
            body: "My bin on {{street}} was not collected.".to_string(),
            created_by: "Rory".to_string(),
            title: None,
            description: None,
            maintainer: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(execute(args(), &Settings::default()).is_ok());
    }

    #[test]
    fn test_invalid_draft_lists_form_errors() {
        let draft = DraftArgs {
            id: "Bin Collection".to_string(),
            target_recipient: "not-an-address".to_string(),
            ..args()
        };
        let err = execute(draft, &Settings::default()).unwrap_err();
        match err.downcast_ref::<LinkError>() {
            Some(LinkError::InvalidDraft(errors)) => {
                assert!(errors.has_path("id"));
                assert!(errors.has_path("targetRecipient"));
                assert!(!errors.has_path("createdOn"));
            }
            other => panic!("expected InvalidDraft, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_maintainer_address() {
        let draft = DraftArgs {
            maintainer: Some("nobody".to_string()),
            ..args()
        };
        let err = execute(draft, &Settings::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LinkError>(),
            Some(LinkError::InvalidMaintainer(_))
        ));
    }
}
