mod cli;
mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use luis_programmatic::LuisProgClient;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref(), &cli.overrides())?;
    let client = LuisProgClient::from_config(&config.client_config()?)
        .context("failed to build LUIS client")?;

    tracing::debug!(base_url = %client.transport().base_url(), "client ready");

    if let Some(value) = commands::run(&client, cli.command).await? {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info,luis_programmatic=debug",
            _ => "debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
