//! Subcommand implementations.

pub mod add;
pub mod browse;
pub mod config;
pub mod fetch;
