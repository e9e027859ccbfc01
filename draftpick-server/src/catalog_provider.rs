//! Cached access to the character catalog
//!
//! The catalog file is re-read once its cache entry expires. Tag edits
//! replace the cached copy and are written back to the file.

use crate::error::ApiError;
use draftpick_core::{Catalog, Character, LoadError, TtlCache};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub struct CatalogProvider {
    /// `None` for catalogs that only live in memory
    path: Option<PathBuf>,
    cache: Mutex<TtlCache<(), Arc<Catalog>>>,
}

impl CatalogProvider {
    pub fn from_file(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: Some(path.into()),
            cache: Mutex::new(TtlCache::new(ttl)),
        }
    }

    /// Fixed catalog that never expires
    pub fn in_memory(catalog: Catalog) -> Self {
        let mut cache = TtlCache::new(Duration::MAX);
        cache.insert((), Arc::new(catalog));
        Self {
            path: None,
            cache: Mutex::new(cache),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current catalog snapshot, reloading the file when the cached copy expired
    pub fn current(&self) -> Result<Arc<Catalog>, LoadError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get_or_try_insert_with((), || self.load())
    }

    /// Replace one character's tags. `Ok(None)` when no character has `key`.
    pub fn update_tags(&self, key: &str, tags: Vec<String>) -> Result<Option<Character>, ApiError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        let current = cache.get_or_try_insert_with((), || self.load())?;

        let mut catalog = (*current).clone();
        let updated = match catalog.set_tags(key, tags) {
            Some(character) => character.clone(),
            None => return Ok(None),
        };

        if let Some(path) = &self.path {
            catalog.save(path)?;
        }
        cache.insert((), Arc::new(catalog));

        tracing::info!("Updated tags for {}: {:?}", key, updated.tags);
        Ok(Some(updated))
    }

    fn load(&self) -> Result<Arc<Catalog>, LoadError> {
        match &self.path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                tracing::info!("Loaded {} champions from {}", catalog.len(), path.display());
                Ok(Arc::new(catalog))
            }
            None => Ok(Arc::new(Catalog::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_catalog(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("draftpick-{}-{}.json", name, std::process::id()));
        let catalog = Catalog::new(vec![Character::new("Ahri", "Ahri").with_tags(&["Mage"])]);
        catalog.save(&path).unwrap();
        path
    }

    #[test]
    fn test_in_memory_catalog() {
        let provider = CatalogProvider::in_memory(Catalog::new(vec![Character::new("Lux", "Lux")]));
        assert_eq!(provider.current().unwrap().len(), 1);
        assert!(provider.path().is_none());
    }

    #[test]
    fn test_file_catalog_is_cached() {
        let path = temp_catalog("cached");
        let provider = CatalogProvider::from_file(&path, Duration::from_secs(3600));
        assert_eq!(provider.current().unwrap().len(), 1);

        // Cached copy survives the file going away
        std::fs::remove_file(&path).unwrap();
        assert_eq!(provider.current().unwrap().len(), 1);
    }

    #[test]
    fn test_zero_ttl_reloads_every_time() {
        let path = temp_catalog("reload");
        let provider = CatalogProvider::from_file(&path, Duration::ZERO);
        assert!(provider.current().is_ok());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(provider.current(), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_update_tags_persists() {
        let path = temp_catalog("update");
        let provider = CatalogProvider::from_file(&path, Duration::from_secs(3600));

        let updated = provider.update_tags("Ahri", vec!["Pick".into()]).unwrap();
        assert_eq!(updated.map(|c| c.tags), Some(vec!["Pick".to_string()]));
        assert!(provider.update_tags("Nobody", vec![]).unwrap().is_none());

        let on_disk = Catalog::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(on_disk.champions[0].tags, vec!["Pick"]);
    }
}
