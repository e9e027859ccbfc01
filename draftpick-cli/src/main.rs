//! Draftpick CLI - Command-line interface
//!
//! Commands:
//! - recommend: Rank picks for a draft from a catalog file
//! - tags: Build an enriched catalog from a Data Dragon champion.json
//! - serve: Start the HTTP server

mod recommend;
mod server;
mod tags;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draftpick")]
#[command(about = "Draft pick recommendations for team-based games")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidate picks for the current draft
    Recommend(recommend::RecommendArgs),
    /// Derive archetype tags for a Data Dragon champion file
    Tags(tags::TagsArgs),
    /// Start the HTTP server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend(args) => recommend::run(args),
        Commands::Tags(args) => tags::run(args),
        Commands::Serve(args) => server::run(args),
    }
}
