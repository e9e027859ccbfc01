//! Server state management
//!
//! Shared state for the catalog cache and saved drafts.

use crate::catalog_provider::CatalogProvider;
use crate::store::DraftStore;
use crate::ServerConfig;
use draftpick_core::Catalog;
use std::sync::RwLock;

/// Server-wide shared state
pub struct ServerState {
    pub catalog: CatalogProvider,
    pub drafts: RwLock<DraftStore>,
}

impl ServerState {
    pub fn new(catalog: CatalogProvider) -> Self {
        Self {
            catalog,
            drafts: RwLock::new(DraftStore::new()),
        }
    }

    /// File-backed catalog with the configured TTL
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(CatalogProvider::from_file(
            config.catalog_path.clone(),
            config.cache_ttl,
        ))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(CatalogProvider::in_memory(catalog))
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::with_catalog(Catalog::default())
    }
}
