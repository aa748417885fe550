//! Search-engine connection settings loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `ELASTICSEARCH_URL`: Base URL of the cluster (default: "http://localhost:9200")
//! - `ELASTICSEARCH_USERNAME`: Basic-auth user
//! - `ELASTICSEARCH_PASSWORD`: Basic-auth password
//! - `ELASTICSEARCH_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `RUST_LOG`: Logging level (default: "info,search_service=debug")

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the cluster (e.g., `http://localhost:9200`)
    pub elasticsearch_url: String,

    /// Basic-auth user; credentials are sent only when this is set
    pub elasticsearch_username: Option<String>,

    pub elasticsearch_password: Option<String>,

    /// Upper bound for a single HTTP exchange with the cluster
    pub elasticsearch_request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            elasticsearch_url: env_or("ELASTICSEARCH_URL", "http://localhost:9200".to_string())?,
            elasticsearch_username: std::env::var("ELASTICSEARCH_USERNAME").ok(),
            elasticsearch_password: std::env::var("ELASTICSEARCH_PASSWORD").ok(),
            elasticsearch_request_timeout_seconds: env_or(
                "ELASTICSEARCH_REQUEST_TIMEOUT_SECONDS",
                30,
            )?,
        })
    }

    /// Like [`Config::from_env`], reading a `.env` file first if one exists.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
