// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job application tracker.

use crate::db::{ApplicationPatch, Store};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Application, ApplicationStatus, JobRecord, NewApplication};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// The parts of a listing an application records.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JobReference {
    #[serde(alias = "jobId", alias = "id")]
    #[validate(length(min = 1, max = 512))]
    pub job_id: String,
    #[serde(alias = "jobTitle", alias = "title")]
    #[validate(length(max = 512))]
    pub job_title: String,
    #[validate(length(max = 512))]
    pub company: String,
}

impl From<&JobRecord> for JobReference {
    fn from(job: &JobRecord) -> Self {
        Self {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
        }
    }
}

/// Application operations over a [`Store`].
#[derive(Clone)]
pub struct ApplicationTracker {
    store: Arc<dyn Store>,
}

impl ApplicationTracker {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Record an application for `job`.
    ///
    /// At most one application exists per (user, job); a second attempt fails
    /// with [`AppError::DuplicateApplication`] and writes nothing.
    pub async fn apply(&self, user: &AuthUser, job: &JobReference) -> Result<Application> {
        job.validate()?;

        if self.store.find_application(user, &job.job_id).await?.is_some() {
            tracing::info!(user_id = %user.user_id, job_id = %job.job_id, "Duplicate application rejected");
            return Err(AppError::DuplicateApplication);
        }

        let new = NewApplication::new(user.user_id, &job.job_id, &job.job_title, &job.company);
        let application = self.store.insert_application(user, &new).await?;

        tracing::info!(
            user_id = %user.user_id,
            job_id = %job.job_id,
            application_id = %application.id,
            "Application recorded"
        );
        Ok(application)
    }

    /// Overwrite the status. Any transition is allowed.
    pub async fn set_status(
        &self,
        user: &AuthUser,
        app_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Application> {
        let patch = ApplicationPatch {
            status: Some(status),
            ..Default::default()
        };
        let application = self.store.update_application(user, app_id, &patch).await?;
        tracing::info!(application_id = %app_id, status = %status, "Application status updated");
        Ok(application)
    }

    /// Overwrite the notes. Empty text is stored as-is.
    pub async fn set_notes(&self, user: &AuthUser, app_id: Uuid, notes: &str) -> Result<Application> {
        let patch = ApplicationPatch {
            notes: Some(notes.to_string()),
            ..Default::default()
        };
        self.store.update_application(user, app_id, &patch).await
    }

    /// Newest first, optionally restricted to one status.
    pub async fn list(
        &self,
        user: &AuthUser,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>> {
        self.store.list_applications(user, status).await
    }
}

/// Parse a status filter where `all` (or nothing) means unfiltered.
pub fn parse_status_filter(raw: Option<&str>) -> Result<Option<ApplicationStatus>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(AppError::BadRequest),
    }
}
