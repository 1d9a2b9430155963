//! CLI command definitions.
//!
//! Each subcommand is a thin layer over the library crates: it loads the
//! template store, calls into the schema, placeholder or link builders and
//! prints the result.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use emailer_placeholders::PlaceholderValues;
use emailer_store::{DocumentSource, TemplateStore};

use crate::config::Settings;

pub mod draft;
pub mod list;
pub mod mailto;
pub mod render;
pub mod show;
pub mod validate;

/// Emailer - browse, fill in and send email templates
#[derive(Parser)]
#[command(name = "emailer")]
#[command(version, about = "Emailer - browse, fill in and send email templates")]
#[command(long_about = r#"
Emailer reads a document of email templates, fills in {{placeholders}} and
hands the result to your mail client as a mailto: link.

COMMANDS:
  list      → List all templates
  show      → Show one template and the placeholders it needs
  render    → Fill in placeholders and print the email
  mailto    → Print a mailto: link for a template
  validate  → Check the template document
  draft     → Validate a new template and build its submission link

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Template not found
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Template document (JSON or YAML); defaults to the bundled templates
    #[arg(long, global = true, env = "EMAILER_DATA")]
    pub data: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long, global = true, env = "EMAILER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all templates
    List(list::ListArgs),

    /// Show a template and its placeholders
    Show(show::ShowArgs),

    /// Fill in a template's placeholders
    Render(render::RenderArgs),

    /// Print a mailto: link for a template
    Mailto(mailto::MailtoArgs),

    /// Validate the template document
    Validate(validate::ValidateArgs),

    /// Validate a new template draft and build its submission link
    Draft(draft::DraftArgs),
}

/// Store over the document the settings point at.
pub fn open_store(settings: &Settings) -> TemplateStore<Box<dyn DocumentSource>> {
    TemplateStore::new(settings.document_source())
}

/// Parse a `name=value` placeholder assignment.
pub fn parse_placeholder_value(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "placeholder name '{}' may only contain letters, digits and underscores",
            name
        ));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Collect `--set` pairs; later assignments win.
pub fn collect_values(pairs: Vec<(String, String)>) -> PlaceholderValues {
    pairs.into_iter().collect()
}
