// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saved job routes (authenticated).

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{JobRecord, SavedJob};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/saved-jobs", get(list_saved_jobs).post(save_job))
        .route("/api/saved-jobs/ids", get(saved_job_ids))
        .route("/api/saved-jobs/toggle", post(toggle_saved_job))
        .route("/api/saved-jobs/{job_id}", delete(unsave_job))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SavedStateResponse {
    pub job_id: String,
    pub saved: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SavedIdsResponse {
    pub ids: Vec<String>,
}

async fn list_saved_jobs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<SavedJob>>> {
    Ok(Json(state.saved_jobs.list(&user).await?))
}

async fn saved_job_ids(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<SavedIdsResponse>> {
    let mut ids: Vec<String> = state.saved_jobs.saved_ids(&user).await?.into_iter().collect();
    ids.sort();
    Ok(Json(SavedIdsResponse { ids }))
}

/// 201 when newly saved, 200 when it already was.
async fn save_job(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(job): Json<JobRecord>,
) -> Result<(StatusCode, Json<SavedStateResponse>)> {
    let created = state.saved_jobs.save(Some(&user), &job).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(SavedStateResponse {
            job_id: job.id,
            saved: true,
        }),
    ))
}

async fn toggle_saved_job(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(job): Json<JobRecord>,
) -> Result<Json<SavedStateResponse>> {
    let saved = state.saved_jobs.toggle(&user, &job).await?;
    Ok(Json(SavedStateResponse {
        job_id: job.id,
        saved,
    }))
}

async fn unsave_job(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(job_id): Path<String>,
) -> Result<StatusCode> {
    state.saved_jobs.unsave(&user, &job_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
