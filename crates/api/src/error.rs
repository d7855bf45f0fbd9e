use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mountfit_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds transport-specific
/// variants. Implements [`IntoResponse`] to produce the service's
/// `{"error": ...}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mountfit-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body was not parseable JSON.
    #[error("Invalid JSON")]
    InvalidJson,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, *msg),
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON"),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
