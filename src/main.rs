//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mailauth_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Fatal error reporting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mailauth_check::initialization::init_logger_with;
use mailauth_check::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&config).await {
        eprintln!("mailauth_check error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
