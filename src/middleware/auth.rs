// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access-token authentication middleware.
//!
//! The identity provider signs access tokens with the project's HS256 secret,
//! so tokens are verified locally on every request.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Cookie the web client stores its access token in.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// Audience the identity provider puts on user tokens.
pub const TOKEN_AUDIENCE: &str = "authenticated";

/// Metadata supplied at sign-up.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Access token claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: usize,
    pub aud: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Authenticated user extracted from the access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Raw token, forwarded to the hosted store for row-level security
    pub access_token: String,
}

impl AuthUser {
    /// A user with no identity metadata and no forwardable token.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            email: None,
            full_name: None,
            access_token: String::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// Verify `token` and build the user it names.
pub fn verify_access_token(token: &str, secret: &[u8]) -> Result<AuthUser, AppError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[TOKEN_AUDIENCE]);

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Rejected access token");
        AppError::InvalidToken
    })?;

    let user_id = Uuid::parse_str(&token_data.claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(AuthUser {
        user_id,
        email: token_data.claims.email,
        full_name: token_data
            .claims
            .user_metadata
            .full_name
            .filter(|n| !n.trim().is_empty()),
        access_token: token.to_string(),
    })
}

/// Middleware that requires a valid access token.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Header first, then cookie
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => h[7..].trim().to_string(),
        Some(_) => return Err(AppError::InvalidToken),
        None => match jar.get(ACCESS_TOKEN_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => return Err(AppError::Unauthorized),
        },
    };

    let auth_user = verify_access_token(&token, &state.config.jwt_secret)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECRET: &[u8] = b"unit_test_secret";

    fn token(sub: &str, aud: &str, exp_offset: i64) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let claims = serde_json::json!({
            "sub": sub,
            "aud": aud,
            "iat": now,
            "exp": now + exp_offset,
            "email": "ada@example.com",
            "user_metadata": { "full_name": "Ada Lovelace" }
        });
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let id = Uuid::new_v4();
        let user = verify_access_token(&token(&id.to_string(), TOKEN_AUDIENCE, 3600), SECRET)
            .unwrap();
        assert_eq!(user.user_id, id);
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(user.full_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_verify_rejects_wrong_audience_and_expiry() {
        let id = Uuid::new_v4().to_string();
        assert!(matches!(
            verify_access_token(&token(&id, "anon", 3600), SECRET),
            Err(AppError::InvalidToken)
        ));
        assert!(matches!(
            verify_access_token(&token(&id, TOKEN_AUDIENCE, -3600), SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_non_uuid_subject() {
        assert!(verify_access_token(&token("12345", TOKEN_AUDIENCE, 3600), SECRET).is_err());
    }
}
