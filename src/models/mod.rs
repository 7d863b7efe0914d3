// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod application;
pub mod job;
pub mod profile;
pub mod saved_job;

pub use application::{Application, ApplicationStatus, NewApplication};
pub use job::{EmploymentType, JobRecord, SearchRequest, SearchResponse};
pub use profile::{Profile, ProfileUpdate};
pub use saved_job::SavedJob;
