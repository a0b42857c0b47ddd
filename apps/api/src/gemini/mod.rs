//! Gemini client — the single point of entry for all generateContent calls.
//!
//! No other module may talk to the Gemini API directly; handlers depend on
//! the [`TextGenerator`] trait so tests can substitute scripted backends.
//!
//! Model and decoding parameters are hardcoded constants, not per-request
//! knobs.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-2.0-flash-exp";

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;
const MAX_OUTPUT_TOKENS: u32 = 4096;

/// Total attempts per request, first try included.
pub const MAX_ATTEMPTS: u32 = 3;
/// Per-attempt ceiling; the upstream call must never block unbounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned no text content")]
    EmptyContent,

    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,
}

/// Generation backend seam. Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns raw generated text, or an error once the retry budget is
    /// spent. Callers treat any error as "no AI recommendation available".
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts, if any.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let parts = &candidate.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Gemini generateContent client with a bounded retry budget.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// One request/response cycle against the API. Succeeds iff a non-empty
    /// text payload comes back.
    async fn attempt(&self, prompt: &str) -> Result<String, GeminiError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.text().ok_or(GeminiError::EmptyContent)
    }

    async fn logged_attempt(&self, prompt: &str, attempt: u32) -> Result<String, GeminiError> {
        let result = self.attempt(prompt).await;
        if result.is_ok() {
            debug!("Gemini call succeeded on attempt {attempt}");
        }
        result
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        with_retries(MAX_ATTEMPTS, |attempt| self.logged_attempt(prompt, attempt)).await
    }
}

/// Stand-in backend used when no API key is configured. Every request
/// reports the degraded condition immediately.
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeminiError> {
        Err(GeminiError::NotConfigured)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Retry loop
// ────────────────────────────────────────────────────────────────────────────

/// Runs `attempt` up to `max_attempts` times (the counter passed in is
/// 1-based), sleeping with exponential backoff between tries: 1s, 2s, 4s...
/// Returns the last error once the budget is spent.
pub async fn with_retries<T, E, F, Fut>(max_attempts: u32, mut attempt: F) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut last_error = match attempt(1).await {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    for n in 2..=max_attempts {
        let delay = Duration::from_millis(1000 * (1 << (n - 2)));
        warn!(
            "attempt {} of {} failed ({last_error}), retrying after {}ms",
            n - 1,
            max_attempts,
            delay.as_millis()
        );
        tokio::time::sleep(delay).await;

        match attempt(n).await {
            Ok(value) => return Ok(value),
            Err(e) => last_error = e,
        }
    }

    Err(last_error)
}
