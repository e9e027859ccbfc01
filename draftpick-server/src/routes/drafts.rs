//! Saved draft endpoints (identity required)

use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::ServerState;
use crate::store::{DraftPatch, DraftStore, NewDraft};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::{Arc, PoisonError, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

fn read_store(state: &ServerState) -> RwLockReadGuard<'_, DraftStore> {
    state.drafts.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_store(state: &ServerState) -> RwLockWriteGuard<'_, DraftStore> {
    state.drafts.write().unwrap_or_else(PoisonError::into_inner)
}

/// Unparseable ids cannot name a stored draft
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

/// `GET /api/drafts`
pub async fn list_drafts(
    State(state): State<Arc<ServerState>>,
    identity: Identity,
) -> Json<Value> {
    let drafts = read_store(&state).list_for(&identity.user_id);
    Json(json!({ "ok": true, "drafts": drafts }))
}

/// `POST /api/drafts`
pub async fn create_draft(
    State(state): State<Arc<ServerState>>,
    identity: Identity,
    payload: Result<Json<DraftPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) = payload?;
    let draft_state = body.state.ok_or(ApiError::BadRequest("state_required"))?;

    let draft = write_store(&state).create(
        &identity.user_id,
        NewDraft {
            name: body.name,
            side: body.side,
            notes: body.notes,
            state: draft_state,
        },
    );
    tracing::info!("Draft {} created by {}", draft.id, identity.user_id);

    Ok((StatusCode::CREATED, Json(json!({ "ok": true, "draft": draft }))))
}

/// `PUT /api/drafts/:id`
pub async fn update_draft(
    State(state): State<Arc<ServerState>>,
    identity: Identity,
    Path(id): Path<String>,
    payload: Result<Json<DraftPatch>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;

    let draft = write_store(&state)
        .update(&identity.user_id, id, patch)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(json!({ "ok": true, "draft": draft })))
}

/// `DELETE /api/drafts/:id`
pub async fn delete_draft(
    State(state): State<Arc<ServerState>>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    if !write_store(&state).delete(&identity.user_id, id) {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Draft {} deleted by {}", id, identity.user_id);
    Ok(Json(json!({ "ok": true })))
}
