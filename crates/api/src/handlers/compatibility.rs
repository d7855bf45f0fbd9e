//! Handler for the compatibility check endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use mountfit_core::compatibility::{self, CompatibilityVerdict};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /compatibility (also mounted at /ai-compatibility)
///
/// Runs the normalize → validate → evaluate pipeline over the request body
/// and returns the verdict. The body is parsed from raw bytes so that
/// malformed JSON maps to this service's own 400 message rather than the
/// framework's.
pub async fn check(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<CompatibilityVerdict>> {
    let raw: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

    let canonical = compatibility::normalize(&raw);
    let request = compatibility::validate(&canonical)?;
    let verdict = compatibility::evaluate(&request, &state.config.policy);

    tracing::debug!(
        compatible = verdict.compatible,
        "Evaluated compatibility request"
    );

    Ok(Json(verdict))
}
