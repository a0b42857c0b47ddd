use std::sync::Arc;

use crate::config::Config;
use crate::gemini::TextGenerator;
use crate::reference::ReferenceData;

/// Shared application state injected into all route handlers via Axum
/// extractors. The reference tables are immutable after load, so cloning the
/// state only bumps `Arc` counts.
#[derive(Clone)]
pub struct AppState {
    pub reference: Arc<ReferenceData>,
    /// Pluggable generation backend: `GeminiClient` in production,
    /// `DisabledGenerator` without an API key, scripted mocks in tests.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
