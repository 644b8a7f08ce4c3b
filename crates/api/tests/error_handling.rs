//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and message. They do NOT need an HTTP server -- they call
//! `IntoResponse` directly on `AppError` values.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use checklist_api::error::AppError;
use checklist_core::error::CoreError;
use common::body_text;

/// Helper: convert an `AppError` into its status code and body text.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    (status, body_text(response).await)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with a user-facing message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "List",
        id: "list42".into(),
    });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "The list you requested does not exist");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name too long".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "name too long");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Conflict maps to 409
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate name".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "duplicate name");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("session layer missing from stack".into());

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !body.contains("session layer"),
        "Internal error response must not leak details"
    );
    assert_eq!(body, "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: Core internal errors are sanitized too
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_internal_error_returns_500() {
    let err = AppError::Core(CoreError::Internal("corrupt board".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("corrupt"));
}

// ---------------------------------------------------------------------------
// Test: Template errors map to 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn template_error_returns_500() {
    let err = AppError::Template(minijinja::Error::new(
        minijinja::ErrorKind::TemplateNotFound,
        "missing.html",
    ));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("missing.html"));
}
