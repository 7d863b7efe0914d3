// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job-Hunt API Server
//!
//! Proxies job searches to the provider, stores saved jobs, applications
//! and profiles in the hosted store, and exports resumes.

use job_hunt::{
    config::{Config, StoreBackend},
    db::{MemoryDb, PostgrestDb, Store},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Job-Hunt API");

    let store: Arc<dyn Store> = match config.store_backend {
        StoreBackend::Postgrest => {
            tracing::info!(url = %config.supabase_url, "Using hosted store");
            Arc::new(PostgrestDb::new(&config.supabase_url, &config.supabase_anon_key))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Arc::new(MemoryDb::new())
        }
    };

    if config.rapidapi_key.is_empty() {
        tracing::warn!("RAPIDAPI_KEY is empty; job searches will fail");
    }

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store));

    // Build router
    let app = job_hunt::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["job_hunt=debug", "info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry().with(filter).with(format).init();
}
