use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The service starts without a Gemini key; `/recommend` then always serves
/// the degraded rule-based payload and `/health` reports
/// `gemini_configured: false`.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// True outside production (`APP_ENV=development`). Controls whether 500
    /// bodies carry a `details` field.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            debug: std::env::var("APP_ENV")
                .map(|v| v == "development")
                .unwrap_or(false),
        })
    }
}

/// Reads an env var, treating empty values as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
