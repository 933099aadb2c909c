//! Signal engine CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use signal_config::load_config;
use signal_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // Setup logging
    let log_level = cli
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.is_json();
    let _log_guard = setup_logging(&log_level, json, config.logging.file.as_deref())
        .context("Failed to initialise logging")?;

    // Execute command
    match cli.command {
        Commands::Signal(args) => cli::commands::signal::run(args, &config).await,
        Commands::Strategies => cli::commands::strategies::run().await,
        Commands::ValidateConfig => {
            cli::commands::validate::run(cli.config.as_deref(), &config).await
        }
        Commands::DefaultConfig => cli::commands::default_config::run().await,
    }
}
