pub mod compatibility;
pub mod health;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET  /health            service health
/// POST /compatibility     compatibility check (canonical schema)
/// POST /ai-compatibility  same check, path kept for older clients
/// ```
///
/// Unknown paths and wrong methods fall back to fixed JSON error bodies.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(compatibility::router())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Fixed 404 body for unmatched paths.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// Fixed 405 body for known paths hit with the wrong method.
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Only POST is allowed" })),
    )
}
