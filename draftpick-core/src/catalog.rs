//! Character catalog: loading, search and tag edits
//!
//! Three on-disk shapes are accepted:
//! - a bare JSON array of characters
//! - `{ "version"?: ..., "champions": [...] }` (what [`Catalog::save`] writes)
//! - a Data Dragon `champion.json`, converted through the tag builder

use crate::champion::Character;
use crate::error::LoadError;
use crate::lenient;
use crate::roles::lane_from_timeline;
use crate::tag_builder::{build_tags, TagSource};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

pub const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

/// Search results never exceed this many entries
pub const SEARCH_CAP: usize = 500;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub champions: Vec<Character>,
}

/// Filters for [`Catalog::search`]; empty fields match everything
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub tag: String,
}

impl Catalog {
    pub fn new(champions: Vec<Character>) -> Self {
        Self {
            version: None,
            champions,
        }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        CatalogLoader::default().load(path)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        CatalogLoader::default().parse_str(content)
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// Case-insensitive substring on name or key, exact role and tag
    /// membership. Sorted by name.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Character> {
        let needle = query.q.to_lowercase();

        let mut hits: Vec<&Character> = self
            .champions
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.key().to_lowercase().contains(&needle)
            })
            .filter(|c| query.role.is_empty() || c.can_play(&query.role))
            .filter(|c| query.tag.is_empty() || c.tags.iter().any(|t| *t == query.tag))
            .collect();

        hits.sort_by(|a, b| a.name.cmp(&b.name));
        hits.truncate(SEARCH_CAP);
        hits
    }

    pub fn find_by_key(&self, key: &str) -> Option<&Character> {
        self.champions.iter().find(|c| c.key() == key)
    }

    /// Replace a character's tags; `None` when no character has `key`
    pub fn set_tags(&mut self, key: &str, tags: Vec<String>) -> Option<&Character> {
        let champion = self.champions.iter_mut().find(|c| c.key() == key)?;
        champion.tags = tags;
        Some(champion)
    }

    /// Write as `{ "version", "champions" }`
    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| LoadError::io(path, e))
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Catalog parser with optional lane data for Data Dragon imports.
///
/// Data Dragon files carry no lanes; roles come from `lanes`, keyed by
/// character id, with labels normalized through [`lane_from_timeline`].
#[derive(Clone, Debug, Default)]
pub struct CatalogLoader {
    lanes: HashMap<String, Vec<String>>,
}

impl CatalogLoader {
    pub fn with_lanes<I, S>(mut self, lanes: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<S>)>,
        S: AsRef<str>,
    {
        for (id, labels) in lanes {
            let mut roles: Vec<String> = Vec::new();
            for role in labels.iter().filter_map(|l| lane_from_timeline(l.as_ref())) {
                let role = role.as_str().to_string();
                if !roles.contains(&role) {
                    roles.push(role);
                }
            }
            self.lanes.insert(id, roles);
        }
        self
    }

    pub fn load(&self, path: &Path) -> Result<Catalog, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let catalog = self.parse_str(&content)?;
        tracing::debug!(path = %path.display(), champions = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn parse_str(&self, content: &str) -> Result<Catalog, LoadError> {
        let value: Value = serde_json::from_str(content)?;
        self.parse_value(value)
    }

    fn parse_value(&self, value: Value) -> Result<Catalog, LoadError> {
        match value {
            Value::Array(items) => Ok(Catalog::new(lenient::collect(items))),
            Value::Object(mut map) => {
                if map.contains_key("champions") {
                    return Ok(serde_json::from_value(Value::Object(map))?);
                }
                match map.remove("data") {
                    Some(Value::Object(data)) => {
                        let version = map.get("version").and_then(Value::as_str).map(str::to_string);
                        let entries: Vec<DdragonChampion> =
                            lenient::collect(data.into_iter().map(|(_, v)| v).collect());
                        Ok(self.convert_ddragon(version, entries))
                    }
                    _ => Err(LoadError::UnknownFormat),
                }
            }
            _ => Err(LoadError::UnknownFormat),
        }
    }

    fn convert_ddragon(&self, version: Option<String>, entries: Vec<DdragonChampion>) -> Catalog {
        let champions = entries
            .into_iter()
            .map(|entry| {
                let roles = self.lanes.get(&entry.id).cloned().unwrap_or_default();
                let name = if entry.name.is_empty() {
                    entry.id.clone()
                } else {
                    entry.name.clone()
                };
                let source = TagSource {
                    name: name.clone(),
                    roles: roles.clone(),
                    class_tags: entry.tags,
                    hp: entry.stats.as_ref().and_then(|s| s.hp),
                    armor: entry.stats.as_ref().and_then(|s| s.armor),
                };
                let icon_url = match (&version, &entry.image) {
                    (Some(v), Some(image)) => {
                        Some(format!("{}/{}/img/champion/{}", DDRAGON_CDN, v, image.full))
                    }
                    _ => None,
                };

                Character {
                    tags: build_tags(&source),
                    id: entry.id,
                    name,
                    icon_url,
                    roles,
                    ..Default::default()
                }
            })
            .collect();

        Catalog { version, champions }
    }
}

#[derive(Debug, Deserialize)]
struct DdragonChampion {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "lenient::seq")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    image: Option<DdragonImage>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    stats: Option<DdragonStats>,
}

#[derive(Debug, Deserialize)]
struct DdragonImage {
    full: String,
}

#[derive(Debug, Deserialize)]
struct DdragonStats {
    #[serde(default, deserialize_with = "lenient::number")]
    hp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    armor: Option<f64>,
}
