use anyhow::{Context, Result};

use crate::cache::DEFAULT_TTL_SECS;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a local run needs no `.env` at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    pub cache_ttl_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379/0".to_string()),
            cache_ttl_secs: match std::env::var("CACHE_TTL_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .context("CACHE_TTL_SECS must be a number of seconds")?,
                Err(_) => DEFAULT_TTL_SECS,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
