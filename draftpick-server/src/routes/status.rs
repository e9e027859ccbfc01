//! Status endpoints

use axum::Json;
use draftpick_core::ROLE_KEYS;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
}

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "rust",
    })
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub async fn roles_handler() -> Json<[&'static str; 5]> {
    Json(ROLE_KEYS)
}
