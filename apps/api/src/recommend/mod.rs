//! Recommendation pipeline: rule engine → prompt builder → Gemini →
//! response extractor, orchestrated by the `/recommend` handler.

pub mod extract;
pub mod handlers;
pub mod prompt;
pub mod rules;

use serde::Deserialize;

/// Raw form submission for `/recommend`. Every field arrives as free text;
/// presence of `soil_type`, `state`, and `district` is validated in the
/// handler (empty strings count as missing). Request-scoped, never stored.
#[derive(Debug, Default, Deserialize)]
pub struct FarmerInput {
    pub soil_type: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub season: Option<String>,
    pub farm_size: Option<String>,
    pub irrigation: Option<String>,
    pub budget: Option<String>,
    pub previous_crop: Option<String>,
    pub language: Option<String>,
}

impl FarmerInput {
    /// Requested output language, defaulting to english.
    pub fn language_or_default(&self) -> &str {
        non_empty(&self.language).unwrap_or("english")
    }
}

/// Treats `None`, empty, and whitespace-only values as absent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
