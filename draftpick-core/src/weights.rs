//! Weight vector applied to raw sub-scores

use crate::error::LoadError;
use crate::lenient;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback for an absent penalty weight: penalties count at face value
pub const PENALTY_FALLBACK: f64 = -1.0;

/// Named multipliers, one per sub-score.
///
/// Absent keys fall back to 0, except the two penalty weights which fall back
/// to [`PENALTY_FALLBACK`]. Penalty raw scores are already negative: with a
/// negative penalty weight they raise the total, with a positive one they
/// lower it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub role_fit: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub synergy: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub anti_synergy_penalty: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub counter: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub anti_counter_penalty: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub team_needs: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub flex_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub comfort_boost: Option<f64>,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            role_fit: Some(3.0),
            synergy: Some(2.2),
            anti_synergy_penalty: Some(-1.2),
            counter: Some(2.0),
            anti_counter_penalty: Some(-1.5),
            team_needs: Some(2.6),
            flex_value: Some(0.8),
            comfort_boost: Some(0.0),
        }
    }
}

impl Weights {
    /// No keys set: every accessor returns its fallback
    pub fn empty() -> Self {
        Self {
            role_fit: None,
            synergy: None,
            anti_synergy_penalty: None,
            counter: None,
            anti_counter_penalty: None,
            team_needs: None,
            flex_value: None,
            comfort_boost: None,
        }
    }

    pub fn role_fit(&self) -> f64 {
        self.role_fit.unwrap_or(0.0)
    }

    pub fn synergy(&self) -> f64 {
        self.synergy.unwrap_or(0.0)
    }

    pub fn anti_synergy_penalty(&self) -> f64 {
        self.anti_synergy_penalty.unwrap_or(PENALTY_FALLBACK)
    }

    pub fn counter(&self) -> f64 {
        self.counter.unwrap_or(0.0)
    }

    pub fn anti_counter_penalty(&self) -> f64 {
        self.anti_counter_penalty.unwrap_or(PENALTY_FALLBACK)
    }

    pub fn team_needs(&self) -> f64 {
        self.team_needs.unwrap_or(0.0)
    }

    pub fn flex_value(&self) -> f64 {
        self.flex_value.unwrap_or(0.0)
    }

    pub fn comfort_boost(&self) -> f64 {
        self.comfort_boost.unwrap_or(0.0)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}
