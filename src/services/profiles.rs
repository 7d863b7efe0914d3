// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profiles, created lazily from identity data.

use crate::db::Store;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Profile, ProfileUpdate};
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn Store>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Return the caller's profile, inserting one seeded from identity
    /// metadata if none exists yet.
    pub async fn get_or_create(&self, user: &AuthUser) -> Result<Profile> {
        if let Some(profile) = self.store.get_profile(user).await? {
            return Ok(profile);
        }

        let profile = Profile::initial(
            user.user_id,
            user.full_name.as_deref(),
            user.email.as_deref(),
        );
        match self.store.insert_profile(user, &profile).await {
            Ok(profile) => {
                tracing::info!(user_id = %user.user_id, "Created profile");
                Ok(profile)
            }
            // Lost the race with a concurrent first view
            Err(err) => match self.store.get_profile(user).await? {
                Some(existing) => {
                    tracing::debug!(user_id = %user.user_id, "Profile created concurrently");
                    Ok(existing)
                }
                None => Err(err),
            },
        }
    }

    /// Write the provided fields and return the merged profile.
    pub async fn update(&self, user: &AuthUser, update: &ProfileUpdate) -> Result<Profile> {
        update.validate()?;

        let current = self.get_or_create(user).await?;
        if update.is_empty() {
            return Ok(current);
        }

        let profile = self.store.update_profile(user, update).await?;
        tracing::debug!(user_id = %user.user_id, "Updated profile");
        Ok(profile)
    }
}
