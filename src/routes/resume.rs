// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resume builder routes (public; drafts are never stored).

use crate::error::{AppError, Result};
use crate::resume::{templates, JsonResume, RequiredPart, ResumeDraft, TemplateSummary, Theme};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/resume/templates", get(list_templates))
        .route("/api/resume/templates/{id}", get(get_template))
        .route("/api/resume/completeness", post(check_completeness))
        .route("/api/resume/export", post(export_resume))
        .route("/api/resume/json", post(json_resume))
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub draft: ResumeDraft,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub draft: ResumeDraft,
    /// `flat` (default) or `elegant`
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CompletenessResponse {
    pub complete: bool,
    pub missing: Vec<RequiredPart>,
}

async fn list_templates() -> Json<Vec<TemplateSummary>> {
    Json(templates::all().iter().map(|t| t.summary()).collect())
}

/// A fresh draft seeded from the template.
async fn get_template(Path(id): Path<String>) -> Result<Json<ResumeDraft>> {
    let template = templates::find(&id)
        .ok_or_else(|| AppError::NotFound(format!("Resume template {}", id)))?;
    Ok(Json(ResumeDraft::from_template(template)))
}

async fn check_completeness(Json(req): Json<DraftRequest>) -> Json<CompletenessResponse> {
    let missing = req.draft.missing_sections();
    Json(CompletenessResponse {
        complete: missing.is_empty(),
        missing,
    })
}

async fn json_resume(Json(req): Json<DraftRequest>) -> Json<JsonResume> {
    Json(JsonResume::from_draft(&req.draft))
}

/// `Content-Disposition` with an ASCII fallback plus the RFC 5987 UTF-8 name.
fn content_disposition(file_name: &str) -> Result<HeaderValue> {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(file_name)
    );
    HeaderValue::from_str(&value).map_err(|e| AppError::Export(e.to_string()))
}

async fn export_resume(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExportRequest>,
) -> Result<Response> {
    let theme = match req.theme.as_deref() {
        Some(name) => name.parse::<Theme>()?,
        None => Theme::default(),
    };

    // Layout and encoding are CPU-bound.
    let engine = state.resume_engine.clone();
    let draft = req.draft;
    let artifact = tokio::task::spawn_blocking(move || engine.export(&draft, theme))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("export task failed: {}", e)))??;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(artifact.content_type),
            ),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&artifact.file_name)?,
            ),
        ],
        artifact.bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_ascii_and_utf8() {
        let value = content_disposition("José \"J\"-Resume.pdf").unwrap();
        let value = value.to_str().unwrap();
        assert!(value.starts_with("attachment; filename=\"Jos_ _J_-Resume.pdf\""));
        assert!(value.contains("filename*=UTF-8''Jos%C3%A9%20%22J%22-Resume.pdf"));
    }
}
