use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports dataset coverage and whether a Gemini key is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "All India Crop Recommendation API",
        "states_covered": state.reference.states.len(),
        "gemini_configured": state.config.gemini_api_key.is_some(),
        "languages_supported": state.reference.languages.len(),
    }))
}
