//! CLI module for the Matchday Banner API
//!
//! Provides subcommands for running the service and for one-shot
//! lookups:
//! - `serve`: run the HTTP API server (default mode)
//! - `resolve`: resolve a single team logo from the terminal

pub mod resolve;
pub mod serve;

use clap::{Parser, Subcommand};

/// Matchday Banner API - Betting banner drafts with automatic team logo resolution
#[derive(Parser)]
#[command(name = "matchday-banner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Resolve a single team logo and print its URL
    Resolve(resolve::ResolveArgs),
}
