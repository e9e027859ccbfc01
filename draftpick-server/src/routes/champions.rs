//! Catalog endpoints

use crate::error::ApiError;
use crate::identity::Admin;
use crate::state::ServerState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use draftpick_core::{CatalogQuery, Character};
use serde_json::{json, Value};
use std::sync::Arc;

/// `GET /api/champions?q=&role=&tag=`
pub async fn list_champions(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Character>>, ApiError> {
    let catalog = state.catalog.current()?;
    let hits = catalog.search(&query).into_iter().cloned().collect();
    Ok(Json(hits))
}

/// `GET /api/champions/:key`
pub async fn get_champion(
    State(state): State<Arc<ServerState>>,
    Path(key): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let catalog = state.catalog.current()?;
    catalog
        .find_by_key(&key)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `PATCH /api/admin/champions/:key/tags` with body `{ "tags": [...] }`
pub async fn update_champion_tags(
    State(state): State<Arc<ServerState>>,
    Admin(admin): Admin,
    Path(key): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let tags = parse_tags(&body).ok_or(ApiError::BadRequest("tags_must_be_array"))?;

    tracing::info!("PATCH tags for {} by {}", key, admin.user_id);

    let champion = state
        .catalog
        .update_tags(&key, tags)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(json!({
        "ok": true,
        "tags": champion.tags,
        "champion": champion,
    })))
}

/// `tags` must be an array of strings, nothing else
fn parse_tags(body: &Value) -> Option<Vec<String>> {
    body.get("tags")?
        .as_array()?
        .iter()
        .map(|t| t.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(&json!({"tags": ["Tank", "Engage"]})),
            Some(vec!["Tank".to_string(), "Engage".to_string()])
        );
        assert_eq!(parse_tags(&json!({"tags": []})), Some(vec![]));
        assert_eq!(parse_tags(&json!({"tags": "Tank"})), None);
        assert_eq!(parse_tags(&json!({"tags": ["Tank", 3]})), None);
        assert_eq!(parse_tags(&json!({})), None);
    }
}
