// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hosted store client over its PostgREST interface.
//!
//! Requests carry the caller's access token so the store's row-level
//! security policies see the real user. Filters use PostgREST syntax
//! (`column=eq.value`, `order=column.desc`).

use super::{tables, ApplicationPatch, Store};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Application, ApplicationStatus, NewApplication, Profile, ProfileUpdate, SavedJob};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// PostgREST-backed [`Store`].
#[derive(Clone)]
pub struct PostgrestDb {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

impl PostgrestDb {
    /// Create a client for the project at `project_url`.
    pub fn new(project_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    /// Start a request with the project key and the caller's token.
    fn request(&self, method: reqwest::Method, table: &str, user: &AuthUser) -> reqwest::RequestBuilder {
        let token = if user.access_token.is_empty() {
            self.anon_key.as_str()
        } else {
            user.access_token.as_str()
        };
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        user: &AuthUser,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let response = self
            .request(reqwest::Method::GET, table, user)
            .query(&[("select", "*")])
            .query(filters)
            .send()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        check_response_json(response).await
    }

    /// Insert or patch and return the written rows.
    async fn write<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        table: &str,
        user: &AuthUser,
        filters: &[(&str, String)],
        body: &B,
    ) -> Result<Vec<T>> {
        let response = self
            .request(method, table, user)
            .header("Prefer", "return=representation")
            .query(filters)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        check_response_json(response).await
    }
}

/// `eq.` filter value; PostgREST needs reserved characters quoted.
fn eq(value: impl std::fmt::Display) -> String {
    let value = value.to_string();
    if value.contains([',', '.', ':', '(', ')', '"']) {
        format!("eq.\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        format!("eq.{}", value)
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::InvalidToken);
        }

        return Err(AppError::Database(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::Database(format!("JSON parse error: {}", e)))
}

fn first_row<T>(rows: Vec<T>, what: impl FnOnce() -> String) -> Result<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(what()))
}

#[async_trait]
impl Store for PostgrestDb {
    // ─── Profiles ────────────────────────────────────────────────

    async fn get_profile(&self, user: &AuthUser) -> Result<Option<Profile>> {
        let rows: Vec<Profile> = self
            .select(tables::PROFILES, user, &[("user_id", eq(user.user_id))])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_profile(&self, user: &AuthUser, profile: &Profile) -> Result<Profile> {
        let rows = self
            .write(reqwest::Method::POST, tables::PROFILES, user, &[], profile)
            .await?;
        first_row(rows, || format!("Inserted profile for user {}", user.user_id))
    }

    async fn update_profile(&self, user: &AuthUser, update: &ProfileUpdate) -> Result<Profile> {
        let rows = self
            .write(
                reqwest::Method::PATCH,
                tables::PROFILES,
                user,
                &[("user_id", eq(user.user_id))],
                update,
            )
            .await?;
        first_row(rows, || format!("Profile for user {}", user.user_id))
    }

    // ─── Saved Jobs ──────────────────────────────────────────────

    async fn list_saved_jobs(&self, user: &AuthUser) -> Result<Vec<SavedJob>> {
        self.select(
            tables::SAVED_JOBS,
            user,
            &[
                ("user_id", eq(user.user_id)),
                ("order", "saved_at.desc".to_string()),
            ],
        )
        .await
    }

    async fn insert_saved_job(&self, user: &AuthUser, job: &SavedJob) -> Result<()> {
        let _: Vec<SavedJob> = self
            .write(reqwest::Method::POST, tables::SAVED_JOBS, user, &[], job)
            .await?;
        Ok(())
    }

    async fn delete_saved_job(&self, user: &AuthUser, job_id: &str) -> Result<()> {
        let response = self
            .request(reqwest::Method::DELETE, tables::SAVED_JOBS, user)
            .query(&[("user_id", eq(user.user_id)), ("job_id", eq(job_id))])
            .send()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Database(format!("HTTP {}: {}", status, body)));
        }
        Ok(())
    }

    // ─── Applications ────────────────────────────────────────────

    async fn find_application(
        &self,
        user: &AuthUser,
        job_id: &str,
    ) -> Result<Option<Application>> {
        let rows: Vec<Application> = self
            .select(
                tables::JOB_APPLICATIONS,
                user,
                &[
                    ("user_id", eq(user.user_id)),
                    ("job_id", eq(job_id)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_application(
        &self,
        user: &AuthUser,
        application: &NewApplication,
    ) -> Result<Application> {
        let rows = self
            .write(
                reqwest::Method::POST,
                tables::JOB_APPLICATIONS,
                user,
                &[],
                application,
            )
            .await?;
        first_row(rows, || format!("Inserted application {}", application.id))
    }

    async fn update_application(
        &self,
        user: &AuthUser,
        app_id: Uuid,
        patch: &ApplicationPatch,
    ) -> Result<Application> {
        let rows = self
            .write(
                reqwest::Method::PATCH,
                tables::JOB_APPLICATIONS,
                user,
                &[("id", eq(app_id)), ("user_id", eq(user.user_id))],
                patch,
            )
            .await?;
        first_row(rows, || format!("Application {}", app_id))
    }

    async fn list_applications(
        &self,
        user: &AuthUser,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>> {
        let mut filters = vec![
            ("user_id", eq(user.user_id)),
            ("order", "applied_at.desc".to_string()),
        ];
        if let Some(status) = status {
            filters.push(("status", eq(status)));
        }
        self.select(tables::JOB_APPLICATIONS, user, &filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_filter_quotes_reserved_characters() {
        assert_eq!(eq("abc123"), "eq.abc123");
        assert_eq!(eq("Acme, Inc."), "eq.\"Acme, Inc.\"");
        assert_eq!(eq("say \"hi\"."), "eq.\"say \\\"hi\\\".\"");
    }

    #[test]
    fn test_rest_url_strips_trailing_slash() {
        let db = PostgrestDb::new("https://example.supabase.co/", "anon");
        assert_eq!(
            db.table_url(tables::SAVED_JOBS),
            "https://example.supabase.co/rest/v1/saved_jobs"
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_is_database_error() {
        let db = PostgrestDb::new("http://127.0.0.1:9", "anon");
        let err = db
            .list_saved_jobs(&AuthUser::new(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
