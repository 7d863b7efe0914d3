// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saved jobs: a per-user bookmark set over job listings.

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{JobRecord, SavedJob};
use std::collections::HashSet;
use std::sync::Arc;

/// Saved-jobs operations over a [`Store`].
#[derive(Clone)]
pub struct SavedJobsManager {
    store: Arc<dyn Store>,
}

impl SavedJobsManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Bookmark `job` for `user`.
    ///
    /// Returns `false` without writing if the job is already saved. A missing
    /// user fails before the store is touched.
    pub async fn save(&self, user: Option<&AuthUser>, job: &JobRecord) -> Result<bool> {
        let user = user.ok_or(AppError::Unauthorized)?;

        if self.saved_ids(user).await?.contains(&job.id) {
            tracing::debug!(user_id = %user.user_id, job_id = %job.id, "Job already saved");
            return Ok(false);
        }

        self.store
            .insert_saved_job(user, &SavedJob::from_job(user.user_id, job))
            .await?;

        tracing::info!(user_id = %user.user_id, job_id = %job.id, "Job saved");
        Ok(true)
    }

    /// Remove a bookmark. Absent bookmarks are not an error.
    pub async fn unsave(&self, user: &AuthUser, job_id: &str) -> Result<()> {
        self.store.delete_saved_job(user, job_id).await?;
        tracing::info!(user_id = %user.user_id, job_id = %job_id, "Job unsaved");
        Ok(())
    }

    /// Flip membership and return the new state.
    pub async fn toggle(&self, user: &AuthUser, job: &JobRecord) -> Result<bool> {
        if self.saved_ids(user).await?.contains(&job.id) {
            self.unsave(user, &job.id).await?;
            Ok(false)
        } else {
            self.save(Some(user), job).await?;
            Ok(true)
        }
    }

    /// Newest first.
    pub async fn list(&self, user: &AuthUser) -> Result<Vec<SavedJob>> {
        self.store.list_saved_jobs(user).await
    }

    pub async fn saved_ids(&self, user: &AuthUser) -> Result<HashSet<String>> {
        Ok(self
            .list(user)
            .await?
            .into_iter()
            .map(|saved| saved.job_id)
            .collect())
    }
}

/// Client-side cache of saved job ids.
///
/// Changes only after the remote operation succeeds, so a failed save or
/// unsave leaves the displayed state untouched.
#[derive(Debug, Clone, Default)]
pub struct SavedSet {
    ids: HashSet<String>,
}

impl SavedSet {
    /// Load the membership set for `user`.
    pub async fn load(manager: &SavedJobsManager, user: &AuthUser) -> Result<Self> {
        Ok(Self {
            ids: manager.saved_ids(user).await?,
        })
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.ids.contains(job_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Toggle through `manager`, updating the cache on success.
    pub async fn toggle(
        &mut self,
        manager: &SavedJobsManager,
        user: &AuthUser,
        job: &JobRecord,
    ) -> Result<bool> {
        let saved = if self.contains(&job.id) {
            manager.unsave(user, &job.id).await?;
            false
        } else {
            manager.save(Some(user), job).await?;
            true
        };

        if saved {
            self.ids.insert(job.id.clone());
        } else {
            self.ids.remove(&job.id);
        }
        Ok(saved)
    }
}
