//! Serve command - start the HTTP server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to draftpick-server crate)
//! - Level 4: configuration validation

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use draftpick_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

/// Flags left unset fall back to `DRAFTPICK_*` variables, then defaults
#[derive(Args, Default)]
pub struct ServerArgs {
    /// Port number to listen on [default: 4000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Catalog JSON file served by the API [default: data/catalog.json]
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory containing the frontend's static files [default: static]
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Seconds a loaded catalog is served before re-reading the file [default: 3600]
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run serve command
///
/// This function reads like a table of contents:
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(ServerConfig::from_env(), &args)?;

    tracing::info!("Starting draftpick server on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Overlay command arguments on a base config
fn configure_server(mut config: ServerConfig, args: &ServerArgs) -> Result<ServerConfig> {
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(path) = &args.catalog {
        config.catalog_path = path.clone();
    }
    if let Some(dir) = &args.static_dir {
        config.static_dir = dir.to_string_lossy().to_string();
    }
    if let Some(secs) = args.cache_ttl {
        config.cache_ttl = Duration::from_secs(secs);
    }

    validate_static_dir(Path::new(&config.static_dir))?;
    if !config.catalog_path.is_file() {
        tracing::warn!(
            "Catalog file not found: {}. Catalog requests will fail until it exists.",
            config.catalog_path.display()
        );
    }

    Ok(config)
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn validate_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!("Static path exists but is not a directory: {}", path.display());
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
