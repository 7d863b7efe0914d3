// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity provider client.
//!
//! Handles:
//! - Email/password sign-up with profile metadata
//! - Password sign-in returning a session
//! - Sign-out (revokes the session's refresh token)
//! - Current user lookup for an access token
//!
//! Client-side API: the server never calls it. Signed-in requests reach the
//! routes with a token that `middleware::auth` verifies locally.

use crate::error::AppError;
use crate::middleware::auth::UserMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as the identity provider reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

impl IdentityUser {
    pub fn full_name(&self) -> Option<&str> {
        self.user_metadata
            .as_ref()
            .and_then(|m| m.full_name.as_deref())
            .filter(|n| !n.trim().is_empty())
    }
}

/// Tokens returned by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    pub user: IdentityUser,
}

/// Sign-up yields a session when the project auto-confirms emails, otherwise
/// just the pending user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignUpOutcome {
    Session(Session),
    PendingConfirmation(IdentityUser),
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a UserMetadata,
}

/// Provider error body; different endpoints use different keys.
#[derive(Debug, Default, Deserialize)]
struct ProviderError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ProviderError {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

/// Identity provider REST client.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
}

impl IdentityClient {
    pub fn new(project_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url: format!("{}/auth/v1", project_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    /// Register a new account.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<SignUpOutcome, AppError> {
        let response = self
            .http
            .post(format!("{}/signup", self.auth_url))
            .header("apikey", &self.anon_key)
            .json(&SignUpBody {
                email,
                password,
                data: metadata,
            })
            .send()
            .await
            .map_err(|e| AppError::Identity(format!("Sign-up request failed: {}", e)))?;

        check_response_json(response).await
    }

    /// Exchange email and password for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let response = self
            .http
            .post(format!("{}/token", self.auth_url))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| AppError::Identity(format!("Sign-in request failed: {}", e)))?;

        check_response_json(response).await
    }

    /// Revoke the session on the provider side.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/logout", self.auth_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Identity(format!("Sign-out request failed: {}", e)))?;

        check_response(response).await?;
        Ok(())
    }

    /// Look up the user an access token belongs to.
    pub async fn current_user(&self, access_token: &str) -> Result<IdentityUser, AppError> {
        let response = self
            .http
            .get(format!("{}/user", self.auth_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Identity(e.to_string()))?;

        check_response_json(response).await
    }
}

/// Check response status, mapping provider errors to [`AppError`].
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(AppError::InvalidToken);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ProviderError>(&body)
        .ok()
        .and_then(ProviderError::into_message)
        .unwrap_or(body);

    tracing::warn!(status = %status, error = %message, "Identity provider rejected request");
    Err(AppError::Identity(message))
}

async fn check_response_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    check_response(response)
        .await?
        .json()
        .await
        .map_err(|e| AppError::Identity(format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_up_outcome_variants() {
        let id = Uuid::new_v4();
        let pending: SignUpOutcome = serde_json::from_value(json!({
            "id": id,
            "email": "ada@example.com",
            "user_metadata": { "full_name": "Ada" }
        }))
        .unwrap();
        assert!(matches!(pending, SignUpOutcome::PendingConfirmation(ref u) if u.id == id));

        let session: SignUpOutcome = serde_json::from_value(json!({
            "access_token": "tok",
            "refresh_token": "ref",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": { "id": id }
        }))
        .unwrap();
        assert!(matches!(session, SignUpOutcome::Session(ref s) if s.access_token == "tok"));
    }

    #[test]
    fn test_user_equality_includes_metadata() {
        let user = |name: &str| -> IdentityUser {
            serde_json::from_value(json!({
                "id": "6f1c7f64-3f9e-4b8a-9c55-1d2a3b4c5d6e",
                "email": "ada@example.com",
                "user_metadata": { "full_name": name }
            }))
            .unwrap()
        };
        assert_eq!(user("Ada"), user("Ada"));
        assert_ne!(user("Ada"), user("Grace"));
    }

    #[test]
    fn test_blank_full_name_ignored() {
        let user = IdentityUser {
            id: Uuid::new_v4(),
            email: None,
            user_metadata: Some(UserMetadata {
                full_name: Some("  ".into()),
            }),
        };
        assert_eq!(user.full_name(), None);
    }

    #[test]
    fn test_provider_error_message_precedence() {
        let err: ProviderError = serde_json::from_value(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        }))
        .unwrap();
        assert_eq!(err.into_message().as_deref(), Some("Invalid login credentials"));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_identity_error() {
        let client = IdentityClient::new("http://127.0.0.1:9", "anon");
        let err = client.sign_in("a@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, AppError::Identity(_)));
    }
}
