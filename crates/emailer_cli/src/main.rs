//! Emailer CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Template not found

use std::process::ExitCode;

use clap::Parser;
use emailer_links::LinkError;
use emailer_store::StoreError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use commands::render::MissingPlaceholders;
use commands::{Cli, Commands};
use config::Settings;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const NOT_FOUND: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    // Logs go to stderr so links and JSON on stdout stay pipeable
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .try_init();

    let result = Settings::load(cli.config.as_deref())
        .map(|settings| settings.with_data_path(cli.data))
        .and_then(|settings| match cli.command {
            Commands::List(args) => commands::list::execute(args, &settings),
            Commands::Show(args) => commands::show::execute(args, &settings),
            Commands::Render(args) => commands::render::execute(args, &settings),
            Commands::Mailto(args) => commands::mailto::execute(args, &settings),
            Commands::Validate(args) => commands::validate::execute(args, &settings),
            Commands::Draft(args) => commands::draft::execute(args, &settings),
        });

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(store_error) = e.downcast_ref::<StoreError>() {
        if store_error.is_not_found() {
            return ExitCodes::NOT_FOUND;
        }
        if store_error.is_data_corrupt() {
            return ExitCodes::VALIDATION_FAILURE;
        }
        return ExitCodes::GENERAL_ERROR;
    }

    if e.is::<MissingPlaceholders>() {
        return ExitCodes::VALIDATION_FAILURE;
    }

    match e.downcast_ref::<LinkError>() {
        Some(LinkError::InvalidDraft(_)) => ExitCodes::VALIDATION_FAILURE,
        Some(LinkError::InvalidMaintainer(_)) => ExitCodes::INVALID_ARGS,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
