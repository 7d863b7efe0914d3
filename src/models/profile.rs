//! User profile model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// One profile per user, created lazily on first view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub job_alerts_enabled: bool,
    pub preferred_location: Option<String>,
    pub preferred_salary_min: Option<i64>,
    pub preferred_job_types: Option<Vec<String>>,
}

impl Profile {
    /// Initial profile seeded from identity provider data.
    pub fn initial(user_id: Uuid, full_name: Option<&str>, email: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            full_name: full_name.unwrap_or_default().to_string(),
            email: email.unwrap_or_default().to_string(),
            phone: String::new(),
            location: String::new(),
            bio: None,
            job_alerts_enabled: false,
            preferred_location: None,
            preferred_salary_min: None,
            preferred_job_types: None,
        }
    }

    /// Overwrite the fields present in `update`.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(v) = &update.full_name {
            self.full_name = v.clone();
        }
        if let Some(v) = &update.phone {
            self.phone = v.clone();
        }
        if let Some(v) = &update.location {
            self.location = v.clone();
        }
        if let Some(v) = &update.bio {
            self.bio = Some(v.clone());
        }
        if let Some(v) = update.job_alerts_enabled {
            self.job_alerts_enabled = v;
        }
        if let Some(v) = &update.preferred_location {
            self.preferred_location = Some(v.clone());
        }
        if let Some(v) = update.preferred_salary_min {
            self.preferred_salary_min = Some(v);
        }
        if let Some(v) = &update.preferred_job_types {
            self.preferred_job_types = Some(v.clone());
        }
    }
}

/// Partial profile update; only `Some` fields are written.
///
/// Email is owned by the identity provider and cannot be changed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_alerts_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub preferred_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub preferred_salary_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 4))]
    pub preferred_job_types: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ProfileUpdate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut profile = Profile::initial(Uuid::new_v4(), Some("Ada"), Some("ada@example.com"));
        profile.phone = "555".into();

        profile.apply(&ProfileUpdate {
            location: Some("Pune".into()),
            preferred_salary_min: Some(50_000),
            ..Default::default()
        });

        assert_eq!(profile.full_name, "Ada");
        assert_eq!(profile.phone, "555");
        assert_eq!(profile.location, "Pune");
        assert_eq!(profile.preferred_salary_min, Some(50_000));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let update = ProfileUpdate {
            preferred_salary_min: Some(-1),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
