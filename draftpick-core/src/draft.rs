//! Draft state snapshot

use crate::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Coarse draft progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Early,
    #[default]
    Mid,
    Late,
    /// Any label the engine does not recognize
    Other,
}

impl Phase {
    pub fn from_label(label: &str) -> Self {
        match label {
            "early" => Phase::Early,
            "mid" | "" => Phase::Mid,
            "late" => Phase::Late,
            _ => Phase::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Early => "early",
            Phase::Mid => "mid",
            Phase::Late => "late",
            Phase::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Phase::from_label(&label))
    }
}

/// A committed pick
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
}

impl Pick {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: None,
        }
    }
}

/// Snapshot of an in-progress draft
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub ally_team: Vec<Pick>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub enemy_team: Vec<Pick>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub bans: Vec<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub phase: Phase,
    #[serde(
        default,
        deserialize_with = "lenient::number_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub comfort_by_champ_id: BTreeMap<String, f64>,
}

impl DraftState {
    pub fn with_ally(mut self, id: &str) -> Self {
        self.ally_team.push(Pick::new(id));
        self
    }

    pub fn with_enemy(mut self, id: &str) -> Self {
        self.enemy_team.push(Pick::new(id));
        self
    }

    pub fn with_ban(mut self, id: &str) -> Self {
        self.bans.push(id.to_string());
        self
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_comfort(mut self, id: &str, score: f64) -> Self {
        self.comfort_by_champ_id.insert(id.to_string(), score);
        self
    }

    /// Banned or already picked by either side
    pub fn is_taken(&self, id: &str) -> bool {
        self.bans.iter().any(|b| b == id)
            || self.ally_team.iter().any(|p| p.id == id)
            || self.enemy_team.iter().any(|p| p.id == id)
    }

    pub fn comfort_for(&self, id: &str) -> Option<f64> {
        self.comfort_by_champ_id.get(id).copied()
    }
}
