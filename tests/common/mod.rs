// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use job_hunt::config::Config;
use job_hunt::db::MemoryDb;
use job_hunt::routes::create_router;
use job_hunt::AppState;
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;
use uuid::Uuid;

/// Create a test app over an in-memory store.
/// Returns the router, the shared state and the store handle.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, MemoryDb) {
    let config = Config::test_default();
    let db = MemoryDb::new();
    let state = Arc::new(AppState::new(config, Arc::new(db.clone())));
    (create_router(state.clone()), state, db)
}

/// Create an access token the way the identity provider does.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: Uuid, signing_key: &[u8]) -> String {
    #[derive(Serialize)]
    struct Metadata {
        full_name: String,
    }

    #[derive(Serialize)]
    struct Claims {
        sub: String,
        aud: String,
        exp: usize,
        iat: usize,
        email: String,
        user_metadata: Metadata,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        aud: "authenticated".to_string(),
        exp: now + 3600,
        iat: now,
        email: "test@example.com".to_string(),
        user_metadata: Metadata {
            full_name: "Test User".to_string(),
        },
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap()
}

/// Token for a fresh random user.
#[allow(dead_code)]
pub fn user_token(state: &AppState) -> String {
    create_test_jwt(Uuid::new_v4(), &state.config.jwt_secret)
}

/// Send a request with an optional bearer token and JSON body.
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A listing in the shape the search endpoint returns.
#[allow(dead_code)]
pub fn sample_job(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Backend Engineer",
        "company": "Acme",
        "location": "Pune, MH",
        "salary": "Salary not specified",
        "employmentType": "FULLTIME",
        "description": "Build services",
        "requirements": ["Rust"],
        "postedDate": "3/5/2024",
        "applyUrl": "https://example.com/apply",
        "employerLogo": "",
        "benefits": [],
        "responsibilities": []
    })
}
