pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::recommend::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/states", get(handlers::handle_states))
        .route("/recommend", post(handlers::handle_recommend))
        .fallback(not_found)
        .with_state(state)
}
