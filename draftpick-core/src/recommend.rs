//! Aggregator and recommendation entry point
//!
//! Filters the catalog down to eligible candidates, runs every sub-scorer,
//! weights and sums the results, attaches highlights and returns the top
//! `limit` by total.

use crate::champion::Character;
use crate::draft::DraftState;
use crate::heuristics::{
    comfort_score, counter_score, evaluate_team_needs, flex_value, role_fit, synergy_score,
};
use crate::highlights::{build_highlights, HighlightInputs};
use crate::index::{is_eligible, CharacterIndex};
use crate::weights::Weights;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 10;

// ============================================================================
// CONFIG
// ============================================================================

/// Engine settings for one recommend call
#[derive(Clone, Debug)]
pub struct RecommendConfig {
    pub weights: Weights,
    pub limit: usize,
    /// Score candidates on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            limit: DEFAULT_LIMIT,
            parallel: false,
        }
    }
}

impl RecommendConfig {
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Weighted components of a candidate's total
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub s_role: f64,
    pub s_syn: f64,
    pub s_syn_positive: f64,
    pub s_syn_negative: f64,
    pub s_counter: f64,
    pub s_counter_positive: f64,
    pub s_counter_negative: f64,
    pub s_needs: f64,
    pub s_flex: f64,
    pub s_comfort: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.s_role + self.s_syn + self.s_counter + self.s_needs + self.s_flex + self.s_comfort
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub roles: Vec<String>,
    pub tags: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    pub highlights: Vec<String>,
    pub total: f64,
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Rank eligible characters for `role` (empty = any role).
///
/// Ties keep catalog order. Never fails: unknown ids, empty teams and an
/// unknown role all produce a (possibly empty) list.
pub fn recommend(
    role: &str,
    characters: &[Character],
    state: &DraftState,
    config: &RecommendConfig,
) -> Vec<ScoredCandidate> {
    if config.limit == 0 {
        return Vec::new();
    }

    let ctx = ScoringContext::new(role, characters, state, &config.weights);
    let mut scored = score_all(&ctx, characters, config.parallel);
    let eligible = scored.len();

    scored.sort_by(|a, b| b.total.total_cmp(&a.total));
    scored.truncate(config.limit);

    tracing::debug!(
        role,
        catalog = characters.len(),
        eligible,
        returned = scored.len(),
        "scored draft candidates"
    );

    scored
}

/// Wire shape of a recommend call
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default, deserialize_with = "crate::lenient::or_default")]
    pub role: String,
    #[serde(default, deserialize_with = "crate::lenient::seq")]
    pub characters: Vec<Character>,
    #[serde(default, deserialize_with = "crate::lenient::or_default")]
    pub draft_state: DraftState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl RecommendRequest {
    /// Defaults: tuned weights, [`DEFAULT_LIMIT`], sequential scoring
    pub fn config(&self) -> RecommendConfig {
        let mut config = RecommendConfig::default();
        if let Some(weights) = &self.weights {
            config = config.with_weights(weights.clone());
        }
        if let Some(limit) = self.limit {
            config = config.with_limit(limit);
        }
        config
    }

    pub fn run(&self) -> Vec<ScoredCandidate> {
        recommend(&self.role, &self.characters, &self.draft_state, &self.config())
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// Per-call state shared by every candidate
struct ScoringContext<'a> {
    role: &'a str,
    state: &'a DraftState,
    weights: &'a Weights,
    index: CharacterIndex<'a>,
    allies: Vec<&'a Character>,
    enemies: Vec<&'a Character>,
}

impl<'a> ScoringContext<'a> {
    fn new(
        role: &'a str,
        characters: &'a [Character],
        state: &'a DraftState,
        weights: &'a Weights,
    ) -> Self {
        let index = CharacterIndex::build(characters);
        let allies = index.resolve(&state.ally_team);
        let enemies = index.resolve(&state.enemy_team);
        Self {
            role,
            state,
            weights,
            index,
            allies,
            enemies,
        }
    }

    fn score(&self, candidate: &Character) -> Option<ScoredCandidate> {
        if !is_eligible(candidate, self.role, self.state) {
            return None;
        }

        let w = self.weights;
        let phase = self.state.phase;

        let fit = role_fit(candidate, self.role);
        let needs = evaluate_team_needs(candidate, &self.state.ally_team, &self.index, self.role, phase);
        let syn = synergy_score(candidate, &self.state.ally_team, &self.index);
        let ctr = counter_score(candidate, &self.state.enemy_team, &self.index);
        let flex = flex_value(candidate, phase);
        let comfort = comfort_score(candidate, self.state);

        let s_syn_positive = weighted(syn.positive, w.synergy());
        let s_syn_negative = weighted(syn.negative, w.anti_synergy_penalty());
        let s_counter_positive = weighted(ctr.positive, w.counter());
        let s_counter_negative = weighted(ctr.negative, w.anti_counter_penalty());

        let breakdown = ScoreBreakdown {
            s_role: weighted(fit, w.role_fit()),
            s_syn: s_syn_positive + s_syn_negative,
            s_syn_positive,
            s_syn_negative,
            s_counter: s_counter_positive + s_counter_negative,
            s_counter_positive,
            s_counter_negative,
            s_needs: weighted(needs.score, w.team_needs()),
            s_flex: weighted(flex, w.flex_value()),
            s_comfort: weighted(comfort, w.comfort_boost()),
        };

        let highlights = build_highlights(&HighlightInputs {
            candidate,
            role: self.role,
            allies: &self.allies,
            enemies: &self.enemies,
            role_fit: fit,
            needs: &needs,
            synergy_positive: s_syn_positive,
            counter_positive: ctr.positive,
        });

        Some(ScoredCandidate {
            id: candidate.id.clone(),
            key: candidate.key().to_string(),
            name: candidate.name.clone(),
            icon_url: candidate.icon_url.clone(),
            roles: candidate.roles.clone(),
            tags: candidate.tags.clone(),
            total: breakdown.total(),
            score_breakdown: breakdown,
            highlights,
        })
    }
}

/// Eligible candidates in catalog order
/// Weighted component; a zero weight or a non-finite product contributes 0
fn weighted(raw: f64, weight: f64) -> f64 {
    let value = raw * weight;
    if weight == 0.0 || !value.is_finite() {
        0.0
    } else {
        value
    }
}

#[cfg(feature = "parallel")]
fn score_all(ctx: &ScoringContext<'_>, characters: &[Character], parallel: bool) -> Vec<ScoredCandidate> {
    use rayon::prelude::*;

    if parallel {
        characters.par_iter().filter_map(|c| ctx.score(c)).collect()
    } else {
        characters.iter().filter_map(|c| ctx.score(c)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all(ctx: &ScoringContext<'_>, characters: &[Character], _parallel: bool) -> Vec<ScoredCandidate> {
    characters.iter().filter_map(|c| ctx.score(c)).collect()
}
