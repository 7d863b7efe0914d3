// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod applications;
pub mod identity;
pub mod job_search;
pub mod profiles;
pub mod saved_jobs;
pub mod session;

pub use applications::{ApplicationTracker, JobReference};
pub use identity::{IdentityClient, IdentityUser, Session, SignUpOutcome};
pub use job_search::{JobSearchGateway, LatestResults, SearchSequencer, SearchTicket};
pub use profiles::ProfileService;
pub use saved_jobs::{SavedJobsManager, SavedSet};
pub use session::{AuthEvent, SessionContext, SubscriptionId};
