// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Normalized job listing and search request/response models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One job listing after provider quirks have been removed.
///
/// Every displayable field is always populated; see
/// [`crate::services::job_search::normalize_job`] for the fallback literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub employment_type: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub posted_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub employer_logo: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// Employment type filter, in the order the search form offers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "FULLTIME")]
    FullTime,
    #[serde(rename = "PARTTIME")]
    PartTime,
    #[serde(rename = "CONTRACTOR")]
    Contractor,
    #[serde(rename = "INTERN")]
    Intern,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contractor,
        EmploymentType::Intern,
    ];

    /// Token used by the search provider.
    pub fn provider_code(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Contractor => "CONTRACTOR",
            EmploymentType::Intern => "INTERN",
        }
    }

    /// Parse a comma-separated filter such as `FULLTIME,INTERN`.
    ///
    /// Tokens are case-insensitive; duplicates collapse. Returns the unknown
    /// token on failure.
    pub fn parse_list(raw: &str) -> Result<Vec<EmploymentType>, String> {
        let mut types = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let ty = Self::ALL
                .into_iter()
                .find(|t| t.provider_code().eq_ignore_ascii_case(token))
                .ok_or_else(|| token.to_string())?;
            if !types.contains(&ty) {
                types.push(ty);
            }
        }
        Ok(types)
    }

    /// Join a list into the provider's comma-separated vocabulary.
    pub fn join(types: &[EmploymentType]) -> String {
        types
            .iter()
            .map(|t| t.provider_code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Search request accepted by the gateway. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[validate(length(max = 200))]
    pub query: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(range(min = 1, max = 100))]
    pub page: Option<u32>,
    /// Comma-separated provider vocabulary (`FULLTIME,PARTTIME,...`).
    #[serde(alias = "employment_types")]
    pub employment_types: Option<String>,
}

/// Successful search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResponse {
    pub jobs: Vec<JobRecord>,
    pub total: u32,
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employment_types() {
        let types = EmploymentType::parse_list("fulltime, INTERN,FULLTIME").unwrap();
        assert_eq!(types, vec![EmploymentType::FullTime, EmploymentType::Intern]);
        assert_eq!(EmploymentType::join(&types), "FULLTIME,INTERN");
    }

    #[test]
    fn test_parse_employment_types_rejects_unknown() {
        assert_eq!(
            EmploymentType::parse_list("FULLTIME,GIG").unwrap_err(),
            "GIG".to_string()
        );
    }

    #[test]
    fn test_job_record_wire_names() {
        let job = JobRecord {
            id: "1".into(),
            title: "Engineer".into(),
            company: "Acme".into(),
            location: "Pune, MH".into(),
            salary: "Salary not specified".into(),
            employment_type: "FULLTIME".into(),
            description: "Build things".into(),
            requirements: vec![],
            posted_date: "Recently posted".into(),
            apply_url: None,
            employer_logo: String::new(),
            benefits: vec![],
            responsibilities: vec![],
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["employmentType"], "FULLTIME");
        assert_eq!(value["postedDate"], "Recently posted");
        assert!(value.get("applyUrl").is_none());
    }
}
