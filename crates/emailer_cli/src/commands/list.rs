//! List command - List all templates.

use anyhow::Result;
use clap::Args;
use emailer_links::template_placeholders;
use serde::Serialize;
use tracing::info;

use super::open_store;
use crate::config::Settings;

#[derive(Args)]
pub struct ListArgs {
    /// Only templates written by this author
    #[arg(long)]
    created_by: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TemplateSummary<'a> {
    id: &'a str,
    title: &'a str,
    subject: &'a str,
    placeholders: Vec<String>,
}

pub fn execute(args: ListArgs, settings: &Settings) -> Result<()> {
    let catalog = open_store(settings).load_catalog()?;
    info!("Listing {} template(s)", catalog.len());

    let templates: Vec<_> = match &args.created_by {
        Some(author) => catalog.by_creator(author),
        None => catalog.list().iter().collect(),
    };

    let summaries: Vec<_> = templates
        .iter()
        .map(|t| TemplateSummary {
            id: &t.id,
            title: t.display_title(),
            subject: &t.subject,
            placeholders: template_placeholders(t),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    let width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
    for summary in &summaries {
        let marker = if summary.placeholders.is_empty() {
            String::new()
        } else {
            format!("  [{}]", summary.placeholders.join(", "))
        };
        println!("{:<width$}  {}{}", summary.id, summary.title, marker, width = width);
    }

    Ok(())
}
