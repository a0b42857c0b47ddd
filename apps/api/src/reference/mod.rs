//! Agronomic reference data: states, soil profiles, seasonal crop lists,
//! and regional languages.
//!
//! Everything here is built once at startup into a [`ReferenceData`] and
//! shared read-only via `Arc` in `AppState`. No table is ever reloaded or
//! mutated after `ReferenceData::load()` returns, so handlers can read it
//! concurrently without locks.

use std::collections::BTreeMap;

use serde::Serialize;

mod languages;
mod seasons;
mod soils;
mod states;

/// Static record for one Indian state or union territory.
#[derive(Debug, Clone, Serialize)]
pub struct StateRecord {
    pub climate: String,
    pub major_crops: Vec<String>,
    pub soil_types: Vec<String>,
    pub rainfall: String,
    pub districts: Vec<String>,
}

/// Crop suitability and remediation advice for one soil type.
#[derive(Debug, Clone, Serialize)]
pub struct SoilProfile {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub characteristics: String,
    pub improvement: String,
}

/// Display names for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub name: String,
    pub native: String,
}

/// All immutable lookup tables the service needs.
#[derive(Debug)]
pub struct ReferenceData {
    pub states: BTreeMap<String, StateRecord>,
    pub soils: BTreeMap<String, SoilProfile>,
    pub seasons: BTreeMap<String, Vec<String>>,
    pub languages: BTreeMap<String, Language>,
    pub state_languages: BTreeMap<String, String>,
}

impl ReferenceData {
    pub fn load() -> Self {
        Self {
            states: states::build(),
            soils: soils::build(),
            seasons: seasons::build(),
            languages: languages::build_languages(),
            state_languages: languages::build_state_map(),
        }
    }

    /// State lookup. Case-sensitive: state names arrive from a fixed
    /// dropdown, not free text.
    pub fn state(&self, name: &str) -> Option<&StateRecord> {
        self.states.get(name)
    }

    /// Soil lookup by lower-cased key. `None` is a degraded case for the
    /// rule engine, not an error.
    pub fn soil(&self, soil_type: &str) -> Option<&SoilProfile> {
        self.soils.get(&soil_type.to_lowercase())
    }

    /// Seasonal crop list by lower-cased key.
    pub fn season(&self, season: &str) -> Option<&[String]> {
        self.seasons.get(&season.to_lowercase()).map(Vec::as_slice)
    }

    /// English display name for a language code, falling back to the code
    /// itself for unknown codes.
    pub fn language_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.languages
            .get(code)
            .map(|l| l.name.as_str())
            .unwrap_or(code)
    }
}

/// Converts a static slice of names into an owned list.
fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
