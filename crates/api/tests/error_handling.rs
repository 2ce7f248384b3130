//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use malar_api::error::AppError;
use malar_core::error::CoreError;

async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Portfolio item",
        id: "abc".into(),
    });

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Portfolio item with id abc not found"));
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation("Please fill all fields!".into()));

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("Please fill all fields!"));
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("log in first".into()));

    let (status, _) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("malformed multipart body".into());

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("malformed multipart body"));
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let err = AppError::InternalError("admin change task failed: secret anon key leaked".into());

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!html.contains("secret"));
    assert!(html.contains("An internal error occurred"));
}
