//! Config subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use reel_core::CollectionUrl;

use crate::config::storage;
use crate::output;
use crate::source::Target;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Store the default collection endpoint
    SetEndpoint(SetEndpointArgs),

    /// Show the effective endpoint and where it comes from
    Show,

    /// Remove the stored config
    Clear,
}

#[derive(Args, Debug)]
pub struct SetEndpointArgs {
    /// Collection endpoint URL (https://, http://localhost, or file://)
    pub url: String,

    /// Default request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub async fn handle(cmd: ConfigCommand, target: &Target) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::SetEndpoint(args) => set_endpoint(args),
        ConfigSubcommand::Show => show(target),
        ConfigSubcommand::Clear => clear(),
    }
}

fn set_endpoint(args: SetEndpointArgs) -> Result<()> {
    let endpoint = CollectionUrl::new(&args.url).context("Invalid collection endpoint")?;

    let mut config = storage::load_config().context("Failed to load config")?;
    config.collection_endpoint = Some(endpoint.clone());
    if args.timeout.is_some() {
        config.request_timeout_secs = args.timeout;
    }

    storage::save_config(&config).context("Failed to save config")?;

    output::success(&format!("Default endpoint set to {}", endpoint));
    Ok(())
}

fn show(target: &Target) -> Result<()> {
    let resolved = target.resolve()?;

    output::field("Endpoint", resolved.endpoint.as_str());
    output::field("Source", resolved.origin.describe());
    match resolved.timeout {
        Some(timeout) => output::field("Timeout", &format!("{}s", timeout.as_secs())),
        None => output::field("Timeout", "none"),
    }
    output::field("Config file", &storage::config_path()?.display().to_string());

    Ok(())
}

fn clear() -> Result<()> {
    if storage::clear_config()? {
        output::success("Stored config removed");
    } else {
        eprintln!("{}", "No stored config.".dimmed());
    }
    Ok(())
}
