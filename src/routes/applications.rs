// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application tracker routes (authenticated).

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Application, ApplicationStatus};
use crate::services::applications::{parse_status_filter, JobReference};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/applications", get(list_applications).post(apply))
        .route("/api/applications/{id}/status", put(update_status))
        .route("/api/applications/{id}/notes", put(update_notes))
}

#[derive(Debug, Deserialize)]
pub struct ApplicationsQuery {
    /// One status, or `all`
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct NotesUpdate {
    #[serde(default)]
    pub notes: String,
}

async fn list_applications(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ApplicationsQuery>,
) -> Result<Json<Vec<Application>>> {
    let status = parse_status_filter(params.status.as_deref())?;
    Ok(Json(state.applications.list(&user, status).await?))
}

async fn apply(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(job): Json<JobReference>,
) -> Result<(StatusCode, Json<Application>)> {
    let application = state.applications.apply(&user, &job).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

async fn update_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Application>> {
    Ok(Json(
        state
            .applications
            .set_status(&user, id, update.status)
            .await?,
    ))
}

async fn update_notes(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(update): Json<NotesUpdate>,
) -> Result<Json<Application>> {
    Ok(Json(
        state
            .applications
            .set_notes(&user, id, &update.notes)
            .await?,
    ))
}
