// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Job-Hunt: search job listings, track saved jobs and applications, and
//! build a resume.
//!
//! This crate provides the backend API in front of the job search provider
//! and the hosted store, plus the resume assembly engine.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod resume;
pub mod routes;
pub mod services;

use config::Config;
use db::Store;
use resume::ResumeEngine;
use services::{ApplicationTracker, JobSearchGateway, ProfileService, SavedJobsManager};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub job_search: JobSearchGateway,
    pub saved_jobs: SavedJobsManager,
    pub applications: ApplicationTracker,
    pub profiles: ProfileService,
    pub resume_engine: ResumeEngine,
}

impl AppState {
    /// Wire every service to `store`.
    pub fn new(config: Config, store: Arc<dyn Store>) -> Self {
        let job_search = JobSearchGateway::new(
            &config.job_search_base_url,
            &config.rapidapi_key,
            &config.job_search_host,
        );
        Self {
            job_search,
            saved_jobs: SavedJobsManager::new(store.clone()),
            applications: ApplicationTracker::new(store.clone()),
            profiles: ProfileService::new(store),
            resume_engine: ResumeEngine::default(),
            config,
        }
    }
}
