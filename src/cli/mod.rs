//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod lookup;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};

/// Click a map, get an HOA probability
#[derive(Parser)]
#[command(name = "hoa-explore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the map web server (foreground)
    Serve(serve::ServeArgs),

    /// Look up a single coordinate
    Lookup(lookup::LookupArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Check prediction backend and server status
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Lookup(args) => lookup::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}
