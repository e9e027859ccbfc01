//! Recommendation endpoint

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use draftpick_core::{lenient, recommend, DraftState, RecommendConfig, ScoredCandidate, Weights};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result count when the request names no limit
pub const SERVER_LIMIT: usize = 20;

/// Draft fields sit at the top level next to `role`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendBody {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub role: String,
    #[serde(flatten)]
    pub state: DraftState,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub weights: Option<Weights>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub limit: Option<usize>,
}

impl RecommendBody {
    pub fn config(&self) -> RecommendConfig {
        let config = RecommendConfig::default().with_limit(self.limit.unwrap_or(SERVER_LIMIT));
        match &self.weights {
            Some(weights) => config.with_weights(weights.clone()),
            None => config,
        }
    }
}

#[derive(Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<ScoredCandidate>,
}

/// `POST /api/draft/recommend`
pub async fn recommend_handler(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<RecommendBody>, JsonRejection>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let Json(body) = payload?;
    let catalog = state.catalog.current()?;

    let recommendations = recommend(&body.role, &catalog.champions, &body.state, &body.config());
    tracing::debug!(
        "Recommend role={:?} phase={} -> {} results",
        body.role,
        body.state.phase.as_str(),
        recommendations.len()
    );

    Ok(Json(RecommendResponse { recommendations }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftpick_core::Phase;

    #[test]
    fn test_body_reads_flat_draft_fields() {
        let body: RecommendBody = serde_json::from_str(
            r#"{"role":"Top","allyTeam":[{"id":"Ahri"}],"bans":["Zed"],"phase":"early","limit":5}"#,
        )
        .unwrap();
        assert_eq!(body.role, "Top");
        assert_eq!(body.state.ally_team.len(), 1);
        assert_eq!(body.state.bans, vec!["Zed"]);
        assert_eq!(body.state.phase, Phase::Early);
        assert_eq!(body.config().limit, 5);
    }

    #[test]
    fn test_body_defaults() {
        let body: RecommendBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.role, "");
        assert_eq!(body.state.phase, Phase::Mid);
        assert_eq!(body.config().limit, SERVER_LIMIT);
        assert_eq!(body.config().weights, Weights::default());
    }

    #[test]
    fn test_body_tolerates_bad_optional_fields() {
        let body: RecommendBody =
            serde_json::from_str(r#"{"role":7,"limit":"many","weights":"heavy"}"#).unwrap();
        assert_eq!(body.role, "");
        assert_eq!(body.config().limit, SERVER_LIMIT);
        assert!(body.weights.is_none());
    }
}
