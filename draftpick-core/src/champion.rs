//! Character (champion) records and the tag capability

use crate::lenient;
use serde::{Deserialize, Serialize};

/// Explicit matchup knowledge authored for a character
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    /// Ids this character loses to
    #[serde(default, deserialize_with = "lenient::seq")]
    pub weak_against: Vec<String>,
    /// Ids this character beats
    #[serde(default, deserialize_with = "lenient::seq")]
    pub strong_against: Vec<String>,
}

impl Counters {
    pub fn is_empty(&self) -> bool {
        self.weak_against.is_empty() && self.strong_against.is_empty()
    }
}

/// A playable character in the catalog.
///
/// Every collection field has set semantics (membership only). Missing or
/// malformed fields deserialize to empty values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub roles: Vec<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub tags: Vec<String>,
    /// Stored catalogs name this field `synergy`
    #[serde(default, alias = "synergy", deserialize_with = "lenient::seq")]
    pub synergies: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Counters::is_empty"
    )]
    pub counters: Counters,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub mastery_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub comfort_score: Option<f64>,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_synergies(mut self, ids: &[&str]) -> Self {
        self.synergies = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_counters(mut self, weak_against: &[&str], strong_against: &[&str]) -> Self {
        self.counters = Counters {
            weak_against: weak_against.iter().map(|s| s.to_string()).collect(),
            strong_against: strong_against.iter().map(|s| s.to_string()).collect(),
        };
        self
    }

    pub fn with_mastery(mut self, score: f64) -> Self {
        self.mastery_score = Some(score);
        self
    }

    /// Display key, falling back to the id
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.id)
    }

    pub fn can_play(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Authored one-way pair affinity toward `id`
    pub fn has_synergy_with(&self, id: &str) -> bool {
        self.synergies.iter().any(|s| s == id)
    }

    /// Mastery signal, with `comfortScore` as the alias
    pub fn mastery(&self) -> f64 {
        self.mastery_score.or(self.comfort_score).unwrap_or(0.0)
    }
}

/// Anything carrying archetype tags.
///
/// All heuristic rules read tags through this predicate.
pub trait Tagged {
    fn tags(&self) -> &[String];

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    fn has_any_tag(&self, wanted: &[&str]) -> bool {
        wanted.iter().any(|w| self.has_tag(w))
    }
}

impl Tagged for Character {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_degrades_to_empty() {
        let c: Character = serde_json::from_str(r#"{"id": "Ahri"}"#).unwrap();
        assert_eq!(c.id, "Ahri");
        assert!(c.roles.is_empty());
        assert!(c.tags.is_empty());
        assert!(c.counters.is_empty());
        assert_eq!(c.mastery(), 0.0);
        assert_eq!(c.key(), "Ahri");
    }

    #[test]
    fn test_legacy_counter_array_is_ignored() {
        let c: Character =
            serde_json::from_str(r#"{"id": "Zed", "counters": ["Malphite"], "tags": null}"#)
                .unwrap();
        assert!(c.counters.is_empty());
        assert!(c.tags.is_empty());
    }

    #[test]
    fn test_counter_object_parses() {
        let c: Character = serde_json::from_str(
            r#"{"id": "Zed", "counters": {"weakAgainst": ["Malphite"], "strongAgainst": "Lux"}}"#,
        )
        .unwrap();
        assert_eq!(c.counters.weak_against, vec!["Malphite"]);
        assert!(c.counters.strong_against.is_empty());
    }

    #[test]
    fn test_mastery_falls_back_to_comfort() {
        let c: Character =
            serde_json::from_str(r#"{"id": "Lux", "comfortScore": 4, "masteryScore": "high"}"#)
                .unwrap();
        assert_eq!(c.mastery(), 4.0);

        let c = Character::new("Lux", "Lux").with_mastery(7.0);
        assert_eq!(c.mastery(), 7.0);
    }

    #[test]
    fn test_has_any_tag() {
        let c = Character::new("Leona", "Leona").with_tags(&["Tank", "Engage"]);
        assert!(c.has_any_tag(&["Poke", "Engage"]));
        assert!(!c.has_any_tag(&["Poke", "Siege"]));
        assert!(!c.has_any_tag(&[]));
    }

    #[test]
    fn test_stored_synergy_field_is_read() {
        let c: Character =
            serde_json::from_str(r#"{"id": "Yasuo", "synergy": ["Malphite", 7]}"#).unwrap();
        assert_eq!(c.synergies, vec!["Malphite"]);
        assert!(c.has_synergy_with("Malphite"));
    }
}
