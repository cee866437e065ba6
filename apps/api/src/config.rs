use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_BASE;
use crate::session::store::{DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS};

/// Application configuration loaded from environment variables.
///
/// The generation API key is optional: without it every recommendation and chat
/// request is served from static content.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Seconds of inactivity after which a session is evicted.
    pub session_idle_ttl_secs: u64,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            session_idle_ttl_secs: optional_env("SESSION_IDLE_TTL_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("SESSION_IDLE_TTL_SECS must be a whole number of seconds")?
                .unwrap_or(DEFAULT_IDLE_TTL.as_secs()),
            max_sessions: optional_env("MAX_SESSIONS")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_SESSIONS must be a positive integer")?
                .unwrap_or(DEFAULT_MAX_SESSIONS),
        })
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
