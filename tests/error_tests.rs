// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use job_hunt::error::AppError;

mod common;

#[test]
fn test_status_codes() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::InvalidToken, StatusCode::UNAUTHORIZED),
        (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
        (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
        (
            AppError::Validation("x".into()),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (AppError::DuplicateApplication, StatusCode::CONFLICT),
        (
            AppError::JobSearch("x".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (AppError::Identity("x".into()), StatusCode::BAD_GATEWAY),
        (
            AppError::Database("x".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::Export("x".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::Internal(anyhow::anyhow!("x")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(err.is_client_error(), status.is_client_error(), "{:?}", err);
        assert_eq!(err.into_response().status(), status);
    }
}

#[tokio::test]
async fn test_server_errors_hide_details() {
    let response = AppError::Database("connection refused at 10.0.0.5".into()).into_response();
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_duplicate_application_message() {
    let body = common::body_json(AppError::DuplicateApplication.into_response()).await;
    assert_eq!(body["details"], "You have already applied to this job");
}
