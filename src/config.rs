// src/config.rs

use std::env;
use std::time::Duration;

use dotenvy::dotenv;

/// Score (0-100) at or above which a subject counts as verified.
pub const VERIFICATION_THRESHOLD: i64 = 70;

/// Maximum number of skills returned per candidate in search results.
pub const SKILL_DISPLAY_LIMIT: usize = 5;

/// Default lifetime of an unconsumed assessment session.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub session_ttl: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            session_ttl: Duration::from_secs(session_ttl_secs),
            rust_log,
        }
    }
}
