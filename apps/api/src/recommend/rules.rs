//! Rule engine — pure crop pre-filtering over the static reference tables.
//!
//! Total for any known state: unknown soil types degrade to empty lists and
//! "N/A" advice, unknown seasons disable filtering. Nothing in here can fail,
//! and no crop name is ever invented — every suggestion originates from a
//! soil profile or the state's major-crop list.

use serde::Serialize;

use crate::reference::{ReferenceData, StateRecord};

/// Output of the rule engine, consumed by the prompt builder and echoed to
/// the client as the non-AI fallback.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionBundle {
    pub primary_crops: Vec<String>,
    pub secondary_crops: Vec<String>,
    pub state_specific_crops: Vec<String>,
    pub soil_characteristics: String,
    pub soil_improvement: String,
    pub season: String,
    pub state_climate: String,
    pub state_rainfall: String,
}

/// How many state major crops to surface beyond the soil-based lists.
const STATE_CROP_LIMIT: usize = 3;

/// Computes the rule-based suggestion bundle for one request.
///
/// Season filtering keeps a crop when it appears in the seasonal list OR in
/// the state's major crops. The OR is deliberate: it was the original
/// behavior, and "fixing" it to strict seasonal filtering would silently
/// drop state staples.
pub fn rule_based_suggestions(
    reference: &ReferenceData,
    state: &StateRecord,
    soil_type: &str,
    season: Option<&str>,
) -> SuggestionBundle {
    let soil = reference.soil(soil_type);

    let mut primary_crops = soil.map(|s| s.primary.clone()).unwrap_or_default();
    let mut secondary_crops = soil.map(|s| s.secondary.clone()).unwrap_or_default();

    let season = season.map(|s| s.trim().to_lowercase()).unwrap_or_default();

    if let Some(seasonal) = reference.season(&season) {
        let keep = |crop: &String| {
            seasonal.contains(crop) || state.major_crops.contains(crop)
        };
        primary_crops.retain(keep);
        secondary_crops.retain(keep);
    }

    let state_specific_crops: Vec<String> = state
        .major_crops
        .iter()
        .filter(|c| !primary_crops.contains(c))
        .take(STATE_CROP_LIMIT)
        .cloned()
        .collect();

    SuggestionBundle {
        primary_crops,
        secondary_crops,
        state_specific_crops,
        soil_characteristics: soil
            .map(|s| s.characteristics.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        soil_improvement: soil
            .map(|s| s.improvement.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        season: if season.is_empty() {
            "Not specified".to_string()
        } else {
            season
        },
        state_climate: state.climate.clone(),
        state_rainfall: state.rainfall.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData::load()
    }

    #[test]
    fn test_black_soil_kharif_maharashtra_filters_sorghum() {
        let data = reference();
        let state = data.state("Maharashtra").unwrap();
        let bundle = rule_based_suggestions(&data, state, "black", Some("kharif"));

        // cotton and soybean survive via the kharif list, wheat via
        // Maharashtra's major crops; sorghum is in neither.
        assert_eq!(bundle.primary_crops, vec!["cotton", "soybean", "wheat"]);
        assert_eq!(bundle.season, "kharif");
    }

    #[test]
    fn test_primary_crops_subset_of_soil_profile() {
        let data = reference();
        let state = data.state("Gujarat").unwrap();
        for soil_type in data.soils.keys() {
            let profile = data.soil(soil_type).unwrap().clone();
            let bundle = rule_based_suggestions(&data, state, soil_type, Some("rabi"));
            for crop in &bundle.primary_crops {
                assert!(profile.primary.contains(crop), "{crop} not in {soil_type}");
            }
            for crop in &bundle.secondary_crops {
                assert!(profile.secondary.contains(crop), "{crop} not in {soil_type}");
            }
        }
    }

    #[test]
    fn test_season_filter_uses_or_semantics() {
        let data = reference();
        let state = data.state("Punjab").unwrap();
        let bundle = rule_based_suggestions(&data, state, "alluvial", Some("rabi"));

        for crop in &bundle.primary_crops {
            let seasonal = data.season("rabi").unwrap().contains(crop);
            let state_major = state.major_crops.contains(crop);
            assert!(seasonal || state_major, "{crop} matches neither season nor state");
        }
        // sugarcane is not a rabi crop but is a Punjab major crop, so the
        // OR keeps it.
        assert!(bundle.primary_crops.contains(&"sugarcane".to_string()));
    }

    #[test]
    fn test_unknown_soil_degrades_without_error() {
        let data = reference();
        let state = data.state("Kerala").unwrap();
        let bundle = rule_based_suggestions(&data, state, "volcanic", Some("kharif"));

        assert!(bundle.primary_crops.is_empty());
        assert!(bundle.secondary_crops.is_empty());
        assert_eq!(bundle.soil_characteristics, "N/A");
        assert_eq!(bundle.soil_improvement, "N/A");
        // state crops still come through
        assert_eq!(bundle.state_specific_crops.len(), 3);
    }

    #[test]
    fn test_unknown_season_passes_lists_through() {
        let data = reference();
        let state = data.state("Rajasthan").unwrap();
        let unfiltered = rule_based_suggestions(&data, state, "sandy", None);
        let bogus = rule_based_suggestions(&data, state, "sandy", Some("monsoon"));

        let profile = data.soil("sandy").unwrap();
        assert_eq!(unfiltered.primary_crops, profile.primary);
        assert_eq!(bogus.primary_crops, profile.primary);
        assert_eq!(bogus.season, "monsoon");
    }

    #[test]
    fn test_missing_season_reads_not_specified() {
        let data = reference();
        let state = data.state("Bihar").unwrap();
        let bundle = rule_based_suggestions(&data, state, "alluvial", None);
        assert_eq!(bundle.season, "Not specified");

        let blank = rule_based_suggestions(&data, state, "alluvial", Some("  "));
        assert_eq!(blank.season, "Not specified");
    }

    #[test]
    fn test_state_specific_crops_capped_and_disjoint() {
        let data = reference();
        for (name, state) in &data.states {
            for soil_type in data.soils.keys() {
                let bundle = rule_based_suggestions(&data, state, soil_type, Some("kharif"));
                assert!(
                    bundle.state_specific_crops.len() <= 3,
                    "{name}/{soil_type} exceeds cap"
                );
                for crop in &bundle.state_specific_crops {
                    assert!(
                        !bundle.primary_crops.contains(crop),
                        "{name}/{soil_type}: {crop} duplicated"
                    );
                }
            }
        }
    }

    #[test]
    fn test_state_specific_crops_preserve_major_crop_order() {
        let data = reference();
        let state = data.state("Maharashtra").unwrap();
        // black/kharif keeps cotton+wheat in primary, so the first three
        // remaining major crops are sugarcane, rice, pulses in that order.
        let bundle = rule_based_suggestions(&data, state, "black", Some("kharif"));
        assert_eq!(
            bundle.state_specific_crops,
            vec!["sugarcane", "rice", "pulses"]
        );
    }

    #[test]
    fn test_soil_and_season_keys_are_case_insensitive() {
        let data = reference();
        let state = data.state("Maharashtra").unwrap();
        let bundle = rule_based_suggestions(&data, state, "Black", Some("KHARIF"));
        assert_eq!(bundle.primary_crops, vec!["cotton", "soybean", "wheat"]);
    }

    #[test]
    fn test_bundle_echoes_state_climate_and_rainfall() {
        let data = reference();
        let state = data.state("Ladakh").unwrap();
        let bundle = rule_based_suggestions(&data, state, "mountain", None);
        assert_eq!(bundle.state_climate, "Cold desert");
        assert_eq!(bundle.state_rainfall, "100-200mm");
    }
}
