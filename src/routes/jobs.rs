// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job search route (public).

use crate::error::Result;
use crate::models::{SearchRequest, SearchResponse};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/jobs/search", post(search_jobs))
}

/// Search the provider. Failures keep the response shape (`jobs: []`).
async fn search_jobs(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let response = state.job_search.search(&req).await?;
    Ok(Json(response))
}
