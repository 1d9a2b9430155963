//! Validate command - Check the template document.

use anyhow::Result;
use clap::Args;
use emailer_store::{DocumentSource, StoreError};
use tracing::info;

use super::open_store;
use crate::config::Settings;

#[derive(Args)]
pub struct ValidateArgs {}

pub fn execute(_args: ValidateArgs, settings: &Settings) -> Result<()> {
    let store = open_store(settings);
    info!("Validating {}", store.source().describe());

    println!("📋 Validating template document...");
    match store.load_all() {
        Ok(templates) => {
            println!("   ✅ {} template(s) valid", templates.len());
            Ok(())
        }
        Err(StoreError::DataCorrupt(errors)) => {
            println!("   ❌ Template validation failed:");
            for error in &errors {
                println!("      - {}", error);
            }
            Err(StoreError::DataCorrupt(errors).into())
        }
        Err(e) => Err(e.into()),
    }
}
