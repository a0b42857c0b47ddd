mod config;
mod errors;
mod gemini;
mod recommend;
mod reference;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::gemini::{DisabledGenerator, GeminiClient, TextGenerator};
use crate::reference::ReferenceData;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    AppError::set_debug_mode(config.debug);

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting All India Crop Recommendation API v{}", env!("CARGO_PKG_VERSION"));

    // Build the immutable reference tables once; handlers share them read-only.
    let reference = Arc::new(ReferenceData::load());
    info!("Covering {} states/UTs", reference.states.len());
    info!("Supporting {} languages", reference.languages.len());

    let generator: Arc<dyn TextGenerator> = match &config.gemini_api_key {
        Some(key) => {
            info!("Gemini client initialized (model: {})", gemini::MODEL);
            Arc::new(GeminiClient::new(key.clone())?)
        }
        None => {
            info!("GEMINI_API_KEY not set — serving rule-based recommendations only");
            Arc::new(DisabledGenerator)
        }
    };

    let state = AppState {
        reference,
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
