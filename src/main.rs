//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `relay_atlas` library that handles:
//! - Command-line argument parsing (with environment-variable fallback)
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use relay_atlas::initialization::init_logger_with;
use relay_atlas::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so deployment
    // settings like VICTORIA_METRICS_ADDRESS don't have to be exported manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments (env vars fill in unset flags)
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("relay_atlas error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
