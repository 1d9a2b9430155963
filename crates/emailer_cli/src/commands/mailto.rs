//! Mailto command - Print a link that opens the user's mail client.

use anyhow::Result;
use clap::Args;
use emailer_links::send_link;
use tracing::info;

use super::{collect_values, open_store, parse_placeholder_value};
use crate::config::Settings;

#[derive(Args)]
pub struct MailtoArgs {
    /// Template ID
    pub id: String,

    /// Placeholder value (repeatable)
    #[arg(long, value_name = "NAME=VALUE", value_parser = parse_placeholder_value)]
    pub set: Vec<(String, String)>,
}

pub fn execute(args: MailtoArgs, settings: &Settings) -> Result<()> {
    let template = open_store(settings).get_by_id(&args.id)?;
    info!("Building mailto link for {}", template.id);

    let link = if args.set.is_empty() {
        send_link(&template, None)
    } else {
        let values = collect_values(args.set);
        send_link(&template, Some(&values))
    };

    println!("{}", link);
    Ok(())
}
