//! Application configuration loaded from environment variables.
//!
//! The hosted store and the identity provider share one project URL and
//! anon key; the JWT secret is used locally to verify access tokens without
//! a round trip to the identity provider.

use std::env;

const DEFAULT_JOB_SEARCH_BASE_URL: &str = "https://jsearch.p.rapidapi.com";
const DEFAULT_JOB_SEARCH_HOST: &str = "jsearch.p.rapidapi.com";

/// Which persistence backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Hosted relational store via its REST interface.
    Postgrest,
    /// In-process store; data is lost on restart.
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgrest" | "supabase" => Ok(StoreBackend::Postgrest),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid("STORE_BACKEND", s.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Project URL of the hosted store / identity provider
    pub supabase_url: String,
    /// Public anon key sent as the `apikey` header
    pub supabase_anon_key: String,
    /// Job search provider base URL
    pub job_search_base_url: String,
    /// Value of the `X-RapidAPI-Host` header
    pub job_search_host: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Persistence backend
    pub store_backend: StoreBackend,

    // --- Secrets ---
    /// HS256 secret the identity provider signs access tokens with
    pub jwt_secret: Vec<u8>,
    /// Job search provider API key
    pub rapidapi_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => StoreBackend::Postgrest,
        };

        Ok(Self {
            supabase_url: env::var("SUPABASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_URL"))?,
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            job_search_base_url: env::var("JOB_SEARCH_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_JOB_SEARCH_BASE_URL.to_string()),
            job_search_host: env::var("JOB_SEARCH_HOST")
                .unwrap_or_else(|_| DEFAULT_JOB_SEARCH_HOST.to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            store_backend,

            jwt_secret: env::var("SUPABASE_JWT_SECRET")
                .map_err(|_| ConfigError::Missing("SUPABASE_JWT_SECRET"))?
                .into_bytes(),
            rapidapi_key: env::var("RAPIDAPI_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("RAPIDAPI_KEY"))?,
        })
    }

    /// Deterministic configuration for tests.
    pub fn test_default() -> Self {
        Self {
            supabase_url: "http://127.0.0.1:54321".to_string(),
            supabase_anon_key: "test_anon_key".to_string(),
            job_search_base_url: "http://127.0.0.1:9".to_string(),
            job_search_host: DEFAULT_JOB_SEARCH_HOST.to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            store_backend: StoreBackend::Memory,
            jwt_secret: b"test_jwt_secret_32_bytes_minimum!".to_vec(),
            rapidapi_key: "test_rapidapi_key".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("SUPABASE_URL", "https://example.supabase.co/");
        env::set_var("SUPABASE_ANON_KEY", "anon");
        env::set_var("SUPABASE_JWT_SECRET", "test_jwt_secret_32_bytes_minimum!");
        env::set_var("RAPIDAPI_KEY", " key ");
        env::set_var("STORE_BACKEND", "memory");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.supabase_url, "https://example.supabase.co");
        assert_eq!(config.rapidapi_key, "key");
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.job_search_base_url, DEFAULT_JOB_SEARCH_BASE_URL);
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("Supabase".parse::<StoreBackend>().unwrap(), StoreBackend::Postgrest);
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }
}
