use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Generator failures are deliberately absent: exhausted Gemini retries are a
/// degraded 200 assembled in the handler, never an error response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether 500 bodies include a `details` field. Set once at startup
    /// from config; defaults to off.
    pub fn set_debug_mode(debug: bool) {
        let _ = DEBUG_MODE.set(debug);
    }
}

static DEBUG_MODE: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                let details = if DEBUG_MODE.get().copied().unwrap_or(false) {
                    json!(format!("{e}"))
                } else {
                    json!(null)
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "An unexpected error occurred",
                        "details": details,
                    })),
                )
                    .into_response()
            }
        }
    }
}
