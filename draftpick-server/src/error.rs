//! API error responses
//!
//! Every failure renders as `{"ok": false, "error": <code>}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use draftpick_core::LoadError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing user identity")]
    Unauthorized,

    #[error("admin role required")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    /// Client error with a machine-readable code
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error("catalog error: {0}")]
    Catalog(#[from] LoadError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized",
            ApiError::Forbidden => "admin_required",
            ApiError::NotFound => "not_found",
            ApiError::BadRequest(code) => *code,
            ApiError::Catalog(_) => "catalog_unavailable",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest("invalid_json")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Catalog(err) = &self {
            tracing::error!("Catalog failure: {}", err);
        }
        let body = Json(json!({ "ok": false, "error": self.code() }));
        (self.status(), body).into_response()
    }
}
