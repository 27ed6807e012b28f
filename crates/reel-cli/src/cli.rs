//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::add::AddArgs;
use crate::commands::browse::BrowseArgs;
use crate::commands::config::ConfigCommand;
use crate::commands::fetch::FetchArgs;
use crate::source::Target;

/// Browse and add movies in a remote collection.
#[derive(Parser, Debug)]
#[command(name = "reel")]
#[command(author, version = env!("REEL_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Collection endpoint URL (overrides the configured one)
    #[arg(long, env = "REEL_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the configured one)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The endpoint overrides given on the command line or environment.
    pub fn target(&self) -> Target {
        Target {
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the collection and print it
    Fetch(FetchArgs),

    /// Add a movie to the collection
    Add(AddArgs),

    /// Interactively fetch and add movies
    Browse(BrowseArgs),

    /// Manage the stored default endpoint
    Config(ConfigCommand),
}
