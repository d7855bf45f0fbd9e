//! Route definitions for the compatibility check endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::compatibility;
use crate::state::AppState;

/// Compatibility check routes.
///
/// ```text
/// POST /compatibility     -> check
/// POST /ai-compatibility  -> check   (older clients)
/// ```
///
/// Both paths share one handler; the normalizer makes the legacy schema
/// and the canonical one meet before validation, so a second evaluation
/// engine is not needed.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/compatibility", post(compatibility::check))
        .route("/ai-compatibility", post(compatibility::check))
}
