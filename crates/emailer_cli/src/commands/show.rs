//! Show command - Show a single template.

use anyhow::Result;
use clap::Args;
use emailer_placeholders::describe;
use tracing::info;

use super::open_store;
use crate::config::Settings;

#[derive(Args)]
pub struct ShowArgs {
    /// Template ID
    id: String,

    /// Print the template as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: ShowArgs, settings: &Settings) -> Result<()> {
    let template = open_store(settings).get_by_id(&args.id)?;
    info!("Showing template {}", template.id);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&template)?);
        return Ok(());
    }

    println!("📧 {}", template.display_title());
    if let Some(description) = &template.description {
        println!("   {}", description);
    }
    println!();
    println!("To:       {}", template.target_recipient);
    println!("Subject:  {}", template.subject);
    let created = template
        .created_at()
        .map(|at| at.format("%-d %B %Y, %H:%M UTC").to_string())
        .unwrap_or_else(|| template.created_on.clone());
    println!("Created:  {} by {}", created, template.created_by);
    println!();
    println!("{}", template.body);

    // Subject first, so its placeholders are listed first
    let placeholders = describe(&format!("{}\n{}", template.subject, template.body));

    if !placeholders.is_empty() {
        println!();
        println!("Placeholders (fill with --set NAME=VALUE):");
        for placeholder in placeholders {
            println!("   - {}", placeholder.display);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(id: &str, json: bool) -> ShowArgs {
        ShowArgs {
            id: id.to_string(),
            json,
        }
    }

    #[test]
    fn test_show_bundled_template() {
        let settings = Settings::default();
        assert!(execute(args("welcome-email", false), &settings).is_ok());
        assert!(execute(args("welcome-email", true), &settings).is_ok());
    }

    #[test]
    fn test_show_unknown_id() {
        let err = execute(args("no-such-template", false), &Settings::default()).unwrap_err();
        let err = err.downcast_ref::<emailer_store::StoreError>().unwrap();
        assert!(err.is_not_found());
    }
}
