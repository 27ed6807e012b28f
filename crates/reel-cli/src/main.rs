//! reel - CLI for a remote movie collection.
//!
//! This is a thin wrapper over `reel-core`: it mounts a view on the
//! configured collection endpoint and prints whatever the view renders.

mod cli;
mod commands;
mod config;
mod output;
mod source;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{add, browse, config as config_cmd, fetch};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for movie output.
    init_logging(cli.verbose, cli.json_logs);

    let target = cli.target();
    match cli.command {
        Commands::Fetch(args) => fetch::run(args, &target).await,
        Commands::Add(args) => add::run(args, &target).await,
        Commands::Browse(args) => browse::run(args, &target).await,
        Commands::Config(cmd) => config_cmd::handle(cmd, &target).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
