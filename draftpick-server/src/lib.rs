//! Draftpick Server - HTTP API for the draft assistant
//!
//! This crate provides the web backend:
//! - Catalog browsing and admin tag edits
//! - Pick recommendations over the cached catalog
//! - Owner-scoped saved drafts
//! - Static file serving for the frontend

mod catalog_provider;
mod error;
mod identity;
mod routes;
mod state;
mod store;

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, services::ServeDir};

pub use catalog_provider::CatalogProvider;
pub use error::ApiError;
pub use identity::{Admin, Identity, ROLES_HEADER, USER_HEADER};
pub use state::ServerState;
pub use store::{DraftPatch, DraftStore, NewDraft, SavedDraft};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub catalog_path: PathBuf,
    /// How long a loaded catalog is served before the file is re-read
    pub cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            static_dir: "static".to_string(),
            catalog_path: PathBuf::from("data/catalog.json"),
            cache_ttl: Duration::from_secs(3600),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `DRAFTPICK_PORT`, `DRAFTPICK_CATALOG`,
    /// `DRAFTPICK_STATIC_DIR` and `DRAFTPICK_CACHE_TTL_SECS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = env_parse::<u16>("DRAFTPICK_PORT") {
            config.port = port;
        }
        if let Ok(path) = std::env::var("DRAFTPICK_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("DRAFTPICK_STATIC_DIR") {
            config.static_dir = dir;
        }
        if let Some(secs) = env_parse::<u64>("DRAFTPICK_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(secs);
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", name, raw);
            None
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoints
        .route("/health", get(routes::status::health_handler))
        .route("/api/status", get(routes::status::status_handler))
        .route("/api/roles", get(routes::status::roles_handler))
        // Catalog
        .route("/api/champions", get(routes::champions::list_champions))
        .route("/api/champions/:key", get(routes::champions::get_champion))
        .route(
            "/api/admin/champions/:key/tags",
            patch(routes::champions::update_champion_tags),
        )
        // Recommendations
        .route("/api/draft/recommend", post(routes::recommend::recommend_handler))
        // Saved drafts
        .route(
            "/api/drafts",
            get(routes::drafts::list_drafts).post(routes::drafts::create_draft),
        )
        .route(
            "/api/drafts/:id",
            put(routes::drafts::update_draft).delete(routes::drafts::delete_draft),
        )
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::from_config(&config));
    let router = create_router(&config, state);

    tracing::info!("Draftpick server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Catalog: {} (ttl {:?})", config.catalog_path.display(), config.cache_ttl);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
