//! In-process store used for tests and offline development.
//!
//! Mirrors the hosted store's semantics: rows are owner-scoped, the saved job
//! table has a unique `(user_id, job_id)` key, and job applications have no
//! uniqueness constraint (callers check first).

use super::{ApplicationPatch, Store};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Application, ApplicationStatus, NewApplication, Profile, ProfileUpdate, SavedJob};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    /// Keyed by owning user
    profiles: DashMap<Uuid, Profile>,
    /// Keyed by (owning user, job id)
    saved_jobs: DashMap<(Uuid, String), SavedJob>,
    /// Keyed by application id
    applications: DashMap<Uuid, Application>,
}

/// DashMap-backed [`Store`].
#[derive(Clone)]
pub struct MemoryDb {
    tables: Arc<Tables>,
    available: Arc<AtomicBool>,
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDb {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Tables::default()),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A store whose every operation fails, as if the network were down.
    pub fn new_offline() -> Self {
        let db = Self::new();
        db.set_available(false);
        db
    }

    /// Toggle simulated availability. Data is kept while unavailable.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::Database(
                "Database not connected (offline mode)".to_string(),
            ))
        }
    }
}

#[async_trait]
impl Store for MemoryDb {
    async fn get_profile(&self, user: &AuthUser) -> Result<Option<Profile>> {
        self.check_available()?;
        Ok(self
            .tables
            .profiles
            .get(&user.user_id)
            .map(|p| p.value().clone()))
    }

    async fn insert_profile(&self, user: &AuthUser, profile: &Profile) -> Result<Profile> {
        self.check_available()?;
        let mut row = profile.clone();
        row.user_id = user.user_id;

        match self.tables.profiles.entry(user.user_id) {
            Entry::Occupied(_) => Err(AppError::Database(format!(
                "duplicate key value violates unique constraint on {}",
                super::tables::PROFILES
            ))),
            Entry::Vacant(slot) => {
                slot.insert(row.clone());
                Ok(row)
            }
        }
    }

    async fn update_profile(&self, user: &AuthUser, update: &ProfileUpdate) -> Result<Profile> {
        self.check_available()?;
        let mut row = self
            .tables
            .profiles
            .get_mut(&user.user_id)
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {}", user.user_id)))?;
        row.apply(update);
        Ok(row.clone())
    }

    async fn list_saved_jobs(&self, user: &AuthUser) -> Result<Vec<SavedJob>> {
        self.check_available()?;
        let mut jobs: Vec<SavedJob> = self
            .tables
            .saved_jobs
            .iter()
            .filter(|entry| entry.key().0 == user.user_id)
            .map(|entry| entry.value().clone())
            .collect();
        jobs.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(jobs)
    }

    async fn insert_saved_job(&self, user: &AuthUser, job: &SavedJob) -> Result<()> {
        self.check_available()?;
        let mut row = job.clone();
        row.user_id = user.user_id;

        match self
            .tables
            .saved_jobs
            .entry((user.user_id, job.job_id.clone()))
        {
            Entry::Occupied(_) => Err(AppError::Database(format!(
                "duplicate key value violates unique constraint on {}",
                super::tables::SAVED_JOBS
            ))),
            Entry::Vacant(slot) => {
                slot.insert(row);
                Ok(())
            }
        }
    }

    async fn delete_saved_job(&self, user: &AuthUser, job_id: &str) -> Result<()> {
        self.check_available()?;
        self.tables
            .saved_jobs
            .remove(&(user.user_id, job_id.to_string()));
        Ok(())
    }

    async fn find_application(
        &self,
        user: &AuthUser,
        job_id: &str,
    ) -> Result<Option<Application>> {
        self.check_available()?;
        Ok(self
            .tables
            .applications
            .iter()
            .find(|entry| entry.user_id == user.user_id && entry.job_id == job_id)
            .map(|entry| entry.value().clone()))
    }

    async fn insert_application(
        &self,
        user: &AuthUser,
        application: &NewApplication,
    ) -> Result<Application> {
        self.check_available()?;
        let mut row = application.clone().into_application();
        row.user_id = user.user_id;
        self.tables.applications.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_application(
        &self,
        user: &AuthUser,
        app_id: Uuid,
        patch: &ApplicationPatch,
    ) -> Result<Application> {
        self.check_available()?;
        let mut row = self
            .tables
            .applications
            .get_mut(&app_id)
            .filter(|row| row.user_id == user.user_id)
            .ok_or_else(|| AppError::NotFound(format!("Application {}", app_id)))?;

        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(notes) = &patch.notes {
            row.notes = Some(notes.clone());
        }
        Ok(row.clone())
    }

    async fn list_applications(
        &self,
        user: &AuthUser,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>> {
        self.check_available()?;
        let mut apps: Vec<Application> = self
            .tables
            .applications
            .iter()
            .filter(|entry| entry.user_id == user.user_id)
            .filter(|entry| status.map_or(true, |s| entry.status == s))
            .map(|entry| entry.value().clone())
            .collect();
        apps.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(apps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobRecord;

    fn user() -> AuthUser {
        AuthUser::new(Uuid::new_v4())
    }

    fn job(id: &str) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            title: "Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            salary: "Salary not specified".into(),
            employment_type: "FULLTIME".into(),
            description: "No description available".into(),
            requirements: vec![],
            posted_date: "Recently posted".into(),
            apply_url: None,
            employer_logo: String::new(),
            benefits: vec![],
            responsibilities: vec![],
        }
    }

    #[tokio::test]
    async fn test_saved_job_unique_key() {
        let db = MemoryDb::new();
        let user = user();
        let saved = SavedJob::from_job(user.user_id, &job("a"));

        db.insert_saved_job(&user, &saved).await.unwrap();
        let err = db.insert_saved_job(&user, &saved).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(db.list_saved_jobs(&user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rows_are_owner_scoped() {
        let db = MemoryDb::new();
        let alice = user();
        let bob = user();

        let app = db
            .insert_application(&alice, &NewApplication::new(alice.user_id, "a", "Eng", "Acme"))
            .await
            .unwrap();

        assert!(db.find_application(&bob, "a").await.unwrap().is_none());
        let err = db
            .update_application(
                &bob,
                app.id,
                &ApplicationPatch {
                    notes: Some("mine now".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_offline_mode_fails_without_losing_data() {
        let db = MemoryDb::new();
        let user = user();
        db.insert_saved_job(&user, &SavedJob::from_job(user.user_id, &job("a")))
            .await
            .unwrap();

        db.set_available(false);
        assert!(db.list_saved_jobs(&user).await.is_err());

        db.set_available(true);
        assert_eq!(db.list_saved_jobs(&user).await.unwrap().len(), 1);
    }
}
