// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile API tests.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

#[tokio::test]
async fn test_profile_created_from_token_metadata() {
    let (app, state, _) = common::create_test_app();
    let token = common::user_token(&state);

    let response = common::send(&app, Method::GET, "/api/profile", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = common::body_json(response).await;
    assert_eq!(profile["full_name"], "Test User");
    assert_eq!(profile["email"], "test@example.com");
    assert_eq!(profile["job_alerts_enabled"], false);

    // Second read returns the same row
    let response = common::send(&app, Method::GET, "/api/profile", Some(&token), None).await;
    assert_eq!(common::body_json(response).await["id"], profile["id"]);
}

#[tokio::test]
async fn test_profile_update_merges_fields() {
    let (app, state, _) = common::create_test_app();
    let token = common::user_token(&state);

    let response = common::send(
        &app,
        Method::PUT,
        "/api/profile",
        Some(&token),
        Some(json!({ "phone": "+91 555 0100", "preferred_salary_min": 900000 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::send(
        &app,
        Method::PUT,
        "/api/profile",
        Some(&token),
        Some(json!({ "location": "Bengaluru", "preferred_job_types": ["FULLTIME"] })),
    )
    .await;
    let profile = common::body_json(response).await;
    assert_eq!(profile["full_name"], "Test User");
    assert_eq!(profile["phone"], "+91 555 0100");
    assert_eq!(profile["preferred_salary_min"], 900000);
    assert_eq!(profile["location"], "Bengaluru");
    assert_eq!(profile["preferred_job_types"], json!(["FULLTIME"]));
}

#[tokio::test]
async fn test_profile_update_validation() {
    let (app, state, _) = common::create_test_app();
    let token = common::user_token(&state);

    let response = common::send(
        &app,
        Method::PUT,
        "/api/profile",
        Some(&token),
        Some(json!({ "preferred_salary_min": -1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::body_json(response).await["error"], "validation_error");
}

#[tokio::test]
async fn test_profile_store_offline() {
    let (app, state, db) = common::create_test_app();
    let token = common::user_token(&state);
    db.set_available(false);

    let response = common::send(&app, Method::GET, "/api/profile", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(common::body_json(response).await["error"], "database_error");
}
