// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job search gateway.
//!
//! Handles:
//! - Translating search requests into the provider's query vocabulary
//! - One outbound call per search (no retry, no cache)
//! - Normalizing heterogeneous provider items into [`JobRecord`]s
//! - Discarding stale responses when searches overlap ([`SearchSequencer`])

use crate::error::{AppError, Result};
use crate::models::{EmploymentType, JobRecord, SearchRequest, SearchResponse};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use validator::Validate;

pub const DEFAULT_QUERY: &str = "software developer";
pub const DEFAULT_LOCATION: &str = "India";
pub const DEFAULT_EMPLOYMENT_TYPES: &str = "FULLTIME";

/// Experience filters appended to every search.
pub const EXPERIENCE_FILTERS: &str =
    "no_experience,under_3_years_experience,more_than_3_years_experience";

pub const FALLBACK_TITLE: &str = "Unknown Title";
pub const FALLBACK_COMPANY: &str = "Unknown Company";
pub const FALLBACK_LOCATION: &str = "Remote";
pub const FALLBACK_SALARY: &str = "Salary not specified";
pub const FALLBACK_EMPLOYMENT_TYPE: &str = "Full-time";
pub const FALLBACK_DESCRIPTION: &str = "No description available";
pub const FALLBACK_POSTED: &str = "Recently posted";

/// Provider query parameters derived from a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderQuery {
    pub query: String,
    pub location: String,
    pub page: u32,
    pub employment_types: String,
}

impl ProviderQuery {
    /// Apply defaults and translate the request.
    ///
    /// A query that is present but blank is rejected rather than defaulted.
    pub fn from_request(req: &SearchRequest) -> Result<Self> {
        req.validate()?;

        let query = match req.query.as_deref() {
            None => DEFAULT_QUERY.to_string(),
            Some(q) if q.trim().is_empty() => {
                return Err(AppError::Validation(
                    "Please enter a job title or keyword to search".to_string(),
                ))
            }
            Some(q) => q.trim().to_string(),
        };

        let employment_types = match req.employment_types.as_deref() {
            None => DEFAULT_EMPLOYMENT_TYPES.to_string(),
            Some(raw) => {
                let types = EmploymentType::parse_list(raw).map_err(|token| {
                    AppError::Validation(format!("Unknown employment type '{}'", token))
                })?;
                if types.is_empty() {
                    DEFAULT_EMPLOYMENT_TYPES.to_string()
                } else {
                    EmploymentType::join(&types)
                }
            }
        };

        Ok(Self {
            query,
            location: regional_location(req.location.as_deref()),
            page: req.page.unwrap_or(1),
            employment_types,
        })
    }

    /// Query string pairs, in the order the provider documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("page", self.page.to_string()),
            ("num_pages", "1".to_string()),
            ("employment_types", self.employment_types.clone()),
            ("date_posted", "all".to_string()),
            ("job_requirements", EXPERIENCE_FILTERS.to_string()),
            ("location", self.location.clone()),
        ]
    }
}

/// Scope a location to the default region unless it already names it or is
/// `remote`.
fn regional_location(location: Option<&str>) -> String {
    let location = match location.map(str::trim) {
        Some(l) if !l.is_empty() => l,
        _ => return DEFAULT_LOCATION.to_string(),
    };

    let lower = location.to_lowercase();
    if lower.contains(&DEFAULT_LOCATION.to_lowercase()) || lower == "remote" {
        location.to_string()
    } else {
        format!("{}, {}", location, DEFAULT_LOCATION)
    }
}

/// Provider envelope. `data` may be missing on odd responses.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Option<Vec<Value>>,
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// Non-blank string field, or `None`.
fn text(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Array of non-blank strings; anything else counts as absent.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn salary(raw: &Value) -> String {
    if let Some(s) = text(raw, "job_salary_range").or_else(|| text(raw, "job_salary")) {
        return s;
    }

    let min = text(raw, "job_min_salary");
    let max = text(raw, "job_max_salary");
    let range = match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", min, max),
        (Some(min), None) => format!("From {}", min),
        (None, Some(max)) => format!("Up to {}", max),
        (None, None) => return FALLBACK_SALARY.to_string(),
    };

    match (text(raw, "job_salary_currency"), text(raw, "job_salary_period")) {
        (Some(cur), Some(period)) => format!("{} {} / {}", cur, range, period.to_lowercase()),
        (Some(cur), None) => format!("{} {}", cur, range),
        (None, Some(period)) => format!("{} / {}", range, period.to_lowercase()),
        (None, None) => range,
    }
}

fn location(raw: &Value) -> String {
    match (text(raw, "job_city"), text(raw, "job_state")) {
        (Some(city), Some(state)) => format!("{}, {}", city, state),
        _ => text(raw, "job_country").unwrap_or_else(|| FALLBACK_LOCATION.to_string()),
    }
}

fn posted_date(raw: &Value) -> String {
    text(raw, "job_posted_at_datetime_utc")
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc).format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| FALLBACK_POSTED.to_string())
}

/// Fallback id: `employer-millis-random`.
fn synthesize_id(raw: &Value) -> String {
    let employer = text(raw, "employer_name").unwrap_or_else(|| "unknown".to_string());
    let suffix: u32 = rand::thread_rng().gen();
    format!(
        "{}-{}-{:08x}",
        employer,
        Utc::now().timestamp_millis(),
        suffix
    )
}

/// Map one provider item to a [`JobRecord`].
///
/// Every field that a consumer displays gets a fallback literal when the
/// provider omits it, sends `null`, or sends a blank or mistyped value.
pub fn normalize_job(raw: &Value) -> JobRecord {
    let highlights = raw.get("job_highlights");
    let highlight = |key: &str| string_list(highlights.and_then(|h| h.get(key)));

    JobRecord {
        id: text(raw, "job_id").unwrap_or_else(|| synthesize_id(raw)),
        title: text(raw, "job_title").unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        company: text(raw, "employer_name").unwrap_or_else(|| FALLBACK_COMPANY.to_string()),
        location: location(raw),
        salary: salary(raw),
        employment_type: text(raw, "job_employment_type")
            .unwrap_or_else(|| FALLBACK_EMPLOYMENT_TYPE.to_string()),
        description: text(raw, "job_description")
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
        requirements: highlight("Qualifications")
            .filter(|q| !q.is_empty())
            .or_else(|| string_list(raw.get("job_required_skills")))
            .unwrap_or_default(),
        posted_date: posted_date(raw),
        apply_url: text(raw, "job_apply_link").or_else(|| text(raw, "job_google_link")),
        employer_logo: text(raw, "employer_logo").unwrap_or_default(),
        benefits: highlight("Benefits").unwrap_or_default(),
        responsibilities: highlight("Responsibilities").unwrap_or_default(),
    }
}

/// Normalize a batch, guaranteeing ids are unique within it.
pub fn normalize_jobs(items: &[Value]) -> Vec<JobRecord> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .map(|raw| {
            let mut job = normalize_job(raw);
            while !seen.insert(job.id.clone()) {
                job.id = synthesize_id(raw);
            }
            job
        })
        .collect()
}

// ─── Gateway ─────────────────────────────────────────────────────────────────

/// Stateless proxy in front of the job search provider.
#[derive(Clone)]
pub struct JobSearchGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl JobSearchGateway {
    pub fn new(base_url: &str, api_key: &str, api_host: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_host: api_host.to_string(),
        }
    }

    /// Run one search. Provider failures become [`AppError::JobSearch`].
    pub async fn search(&self, req: &SearchRequest) -> Result<SearchResponse> {
        let query = ProviderQuery::from_request(req)?;

        tracing::info!(
            query = %query.query,
            location = %query.location,
            page = query.page,
            employment_types = %query.employment_types,
            "Searching jobs"
        );

        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| AppError::JobSearch(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!("Job search provider rate limit hit (429)");
            }
            return Err(AppError::JobSearch(format!(
                "API request failed: {}",
                status
            )));
        }

        let body: ProviderResponse = response
            .json()
            .await
            .map_err(|e| AppError::JobSearch(format!("Invalid provider response: {}", e)))?;

        let jobs = normalize_jobs(body.data.as_deref().unwrap_or_default());

        tracing::debug!(
            provider_status = ?body.status,
            total = jobs.len(),
            "Job search response received"
        );

        Ok(SearchResponse {
            total: jobs.len() as u32,
            page: query.page,
            jobs,
        })
    }
}

// ─── Response sequencing ─────────────────────────────────────────────────────

/// Token identifying one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Issues increasing tickets so that only the newest search may apply its
/// response.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new search; every earlier ticket becomes stale.
    pub fn issue(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True if no search was issued after `ticket`.
    pub fn is_latest(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Holds the results of the newest search, ignoring late arrivals.
#[derive(Debug)]
pub struct LatestResults<T> {
    sequencer: SearchSequencer,
    current: Mutex<Option<T>>,
}

impl<T: Clone> Default for LatestResults<T> {
    fn default() -> Self {
        Self {
            sequencer: SearchSequencer::new(),
            current: Mutex::new(None),
        }
    }
}

impl<T: Clone> LatestResults<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> SearchTicket {
        self.sequencer.issue()
    }

    /// Store `value` if `ticket` is still the newest. Returns whether it was
    /// applied.
    pub fn complete(&self, ticket: SearchTicket, value: T) -> bool {
        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Checked under the lock so a newer completion cannot interleave.
        if !self.sequencer.is_latest(ticket) {
            tracing::debug!(?ticket, "Discarding stale search response");
            return false;
        }
        *current = Some(value);
        true
    }

    pub fn current(&self) -> Option<T> {
        match self.current.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
