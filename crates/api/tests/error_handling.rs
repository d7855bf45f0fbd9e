//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct
//! HTTP status code and `{"error": ...}` body. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use mountfit_api::error::AppError;
use mountfit_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with the rule's message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_rule_message() {
    let err = AppError::Core(CoreError::Validation("user.vesa must be a string"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "user.vesa must be a string");
}

// ---------------------------------------------------------------------------
// Test: InvalidJson maps to 400 with the fixed message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_json_returns_400_with_fixed_message() {
    let err = AppError::InvalidJson;

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid JSON");
}

// ---------------------------------------------------------------------------
// Test: error bodies carry no extra fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_body_is_a_single_error_field() {
    let (_, json) = error_to_response(AppError::InvalidJson).await;

    let obj = json.as_object().expect("body should be an object");
    assert_eq!(obj.len(), 1);
    assert!(obj.contains_key("error"));
}
