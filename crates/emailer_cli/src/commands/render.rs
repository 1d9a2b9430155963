//! Render command - Fill in a template's placeholders.

use anyhow::Result;
use clap::Args;
use emailer_links::preview;
use emailer_placeholders::{validate_completeness, Unmatched};
use thiserror::Error;
use tracing::{info, warn};

use super::{collect_values, open_store, parse_placeholder_value};
use crate::config::Settings;

/// `--strict` rendering found placeholders without a value.
#[derive(Error, Debug)]
#[error("Placeholder validation failed, missing values for: {}", .0.join(", "))]
pub struct MissingPlaceholders(pub Vec<String>);

#[derive(Args)]
pub struct RenderArgs {
    /// Template ID
    pub id: String,

    /// Placeholder value (repeatable)
    #[arg(long, value_name = "NAME=VALUE", value_parser = parse_placeholder_value)]
    pub set: Vec<(String, String)>,

    /// Remove placeholders that have no value instead of keeping them
    #[arg(long)]
    pub drop_unmatched: bool,

    /// Fail if any placeholder is left without a value
    #[arg(long)]
    pub strict: bool,

    /// Print the rendered email as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RenderArgs, settings: &Settings) -> Result<()> {
    let template = open_store(settings).get_by_id(&args.id)?;
    let values = collect_values(args.set);

    let combined = format!("{}\n{}", template.subject, template.body);
    let completeness = validate_completeness(&combined, &values);
    if !completeness.is_valid {
        if args.strict {
            return Err(MissingPlaceholders(completeness.missing).into());
        }
        warn!(
            "No value for placeholder(s): {}",
            completeness.missing.join(", ")
        );
    }

    let unmatched = if args.drop_unmatched {
        Unmatched::Remove
    } else {
        settings.unmatched()
    };

    info!("Rendering template {} with {} value(s)", template.id, values.len());
    let rendered = preview(&template, &values, unmatched);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("To:       {}", rendered.to);
        println!("Subject:  {}", rendered.subject);
        println!();
        println!("{}", rendered.body);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(set: Vec<(&str, &str)>, strict: bool) -> RenderArgs {
        RenderArgs {
            id: "welcome-email".to_string(),
            set: set
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            drop_unmatched: false,
            strict,
            json: false,
        }
    }

    #[test]
    fn test_strict_render_reports_missing_placeholders() {
        let err = execute(args(vec![("username", "Sam")], true), &Settings::default())
            .unwrap_err();
        let missing = err.downcast_ref::<MissingPlaceholders>().unwrap();
        assert_eq!(missing.0, vec!["group"]);
        assert_eq!(
            err.to_string(),
            "Placeholder validation failed, missing values for: group"
        );
    }

    #[test]
    fn test_strict_render_with_all_values() {
        let set = vec![("username", "Sam"), ("group", "Riverside Runners")];
        assert!(execute(args(set, true), &Settings::default()).is_ok());
    }

    #[test]
    fn test_lenient_render_keeps_going() {
        assert!(execute(args(Vec::new(), false), &Settings::default()).is_ok());
    }
}
