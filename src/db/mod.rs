//! Database layer (hosted relational store).
//!
//! Every operation is scoped by the calling [`AuthUser`]; the hosted store
//! additionally enforces row-level ownership on its side.

pub mod memory;
pub mod postgrest;

pub use memory::MemoryDb;
pub use postgrest::PostgrestDb;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Application, ApplicationStatus, NewApplication, Profile, ProfileUpdate, SavedJob};
use async_trait::async_trait;
use uuid::Uuid;

/// Table names as constants.
pub mod tables {
    pub const PROFILES: &str = "profiles";
    pub const SAVED_JOBS: &str = "saved_jobs";
    pub const JOB_APPLICATIONS: &str = "job_applications";
}

/// Partial update of an application row.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ApplicationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Typed record CRUD over the three user-owned tables.
///
/// Single-row writes are atomic; there are no multi-row transactions.
#[async_trait]
pub trait Store: Send + Sync {
    // ─── Profiles ────────────────────────────────────────────────

    async fn get_profile(&self, user: &AuthUser) -> Result<Option<Profile>>;

    async fn insert_profile(&self, user: &AuthUser, profile: &Profile) -> Result<Profile>;

    /// Write the present fields. Returns `NotFound` if the user has no profile.
    async fn update_profile(&self, user: &AuthUser, update: &ProfileUpdate) -> Result<Profile>;

    // ─── Saved Jobs ──────────────────────────────────────────────

    /// Saved jobs ordered by `saved_at` descending.
    async fn list_saved_jobs(&self, user: &AuthUser) -> Result<Vec<SavedJob>>;

    /// Insert a snapshot. Does not check for an existing `(user, job)` row.
    async fn insert_saved_job(&self, user: &AuthUser, job: &SavedJob) -> Result<()>;

    /// Delete by `(user, job_id)`. Deleting a missing row is not an error.
    async fn delete_saved_job(&self, user: &AuthUser, job_id: &str) -> Result<()>;

    // ─── Applications ────────────────────────────────────────────

    async fn find_application(&self, user: &AuthUser, job_id: &str)
        -> Result<Option<Application>>;

    async fn insert_application(
        &self,
        user: &AuthUser,
        application: &NewApplication,
    ) -> Result<Application>;

    /// Returns `NotFound` if no row with `app_id` belongs to the user.
    async fn update_application(
        &self,
        user: &AuthUser,
        app_id: Uuid,
        patch: &ApplicationPatch,
    ) -> Result<Application>;

    /// Applications ordered by `applied_at` descending.
    async fn list_applications(
        &self,
        user: &AuthUser,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>>;
}
