//! Saved job snapshot stored per user.

use crate::models::JobRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// A job the user bookmarked, frozen as it looked when saved.
///
/// `(user_id, job_id)` is the unique key. There is no partial update; a
/// saved job is only ever created or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SavedJob {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub posted_date: String,
    pub job_url: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl SavedJob {
    /// Snapshot a job record for `user_id`.
    pub fn from_job(user_id: Uuid, job: &JobRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            job_type: job.employment_type.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            posted_date: job.posted_date.clone(),
            job_url: job.apply_url.clone(),
            saved_at: Utc::now(),
        }
    }
}
