//! Prompt builder — deterministic template fill for the Gemini request.
//!
//! All farmer-supplied values are interpolated as opaque display text. The
//! consumer is a language model, not an interpreter, so there is nothing to
//! escape beyond keeping the instruction block intact.

use crate::recommend::rules::SuggestionBundle;
use crate::recommend::FarmerInput;
use crate::reference::{ReferenceData, StateRecord};

/// Recommendation prompt. Slots are filled with `.replace` before sending;
/// the embedded JSON schema is literal text the model must echo.
const RECOMMEND_PROMPT_TEMPLATE: &str = r#"You are an agricultural expert specializing in Indian farming practices.

STATE INFORMATION - {state} / {district}:
- Climate: {climate}
- Average Rainfall: {rainfall}
- Major Crops: {major_crops}
- Common Soil Types: {soil_types}

FARMER'S INPUT DATA:
- State: {state}
- District: {district}
- Soil Type: {soil_type}
- Season: {season}
- Farm Size: {farm_size} acres
- Irrigation: {irrigation}
- Budget: ₹{budget}
- Previous Crop: {previous_crop}

RULE-BASED ANALYSIS:
- Soil Characteristics: {soil_characteristics}
- Soil Improvement Tips: {soil_improvement}
- Primary Crops for Soil: {primary_crops}
- State-Specific Crops: {state_crops}

{language_instruction}

TASK: Provide detailed crop recommendations in the following EXACT JSON structure:

{
  "recommended_crops": [
    {
      "name": "Crop Name",
      "climate_suitability": "Explanation of why this crop suits the climate",
      "water_requirement": "Detailed water needs (e.g., 600-800mm, irrigation frequency)",
      "growth_cycle": {
        "duration": "Total duration from sowing to harvest",
        "stages": "Key growth stages and their duration",
        "critical_periods": "When crop needs most attention"
      },
      "benefits": {
        "yield_potential": "Expected yield per acre",
        "market_demand": "Current market situation",
        "profitability": "Income potential and ROI",
        "nutritional_value": "If applicable",
        "other_benefits": "Soil improvement, short duration, etc."
      },
      "cultivation_practices": {
        "sowing_time": "Best time to sow",
        "seed_rate": "Seeds needed per acre",
        "spacing": "Row to row and plant to plant distance",
        "fertilizers": "NPK requirements and application schedule",
        "pest_diseases": "Common issues and prevention"
      }
    }
  ]
}

Provide 3-5 most suitable crops. Respond ONLY with valid JSON, no additional text."#;

/// Builds the full prompt for one request.
pub fn build_prompt(
    reference: &ReferenceData,
    input: &FarmerInput,
    state: &StateRecord,
    bundle: &SuggestionBundle,
) -> String {
    let language = input.language_or_default();
    let language_instruction = if language == "english" {
        String::new()
    } else {
        let name = reference.language_name(language);
        format!(
            "IMPORTANT: Provide ALL recommendations, explanations, and text content \
             in {name} language. The JSON structure should remain in English, but all \
             values, descriptions, and text should be in {name}."
        )
    };

    RECOMMEND_PROMPT_TEMPLATE
        .replace("{state}", or_not_specified(&input.state))
        .replace("{district}", or_not_specified(&input.district))
        .replace("{climate}", &state.climate)
        .replace("{rainfall}", &state.rainfall)
        .replace("{major_crops}", &state.major_crops.join(", "))
        .replace("{soil_types}", &state.soil_types.join(", "))
        .replace("{soil_type}", or_not_specified(&input.soil_type))
        .replace("{season}", or_not_specified(&input.season))
        .replace("{farm_size}", or_not_specified(&input.farm_size))
        .replace("{irrigation}", or_not_specified(&input.irrigation))
        .replace("{budget}", or_not_specified(&input.budget))
        .replace("{previous_crop}", or_not_specified(&input.previous_crop))
        .replace("{soil_characteristics}", &bundle.soil_characteristics)
        .replace("{soil_improvement}", &bundle.soil_improvement)
        .replace("{primary_crops}", &bundle.primary_crops.join(", "))
        .replace("{state_crops}", &bundle.state_specific_crops.join(", "))
        .replace("{language_instruction}", &language_instruction)
}

fn or_not_specified(value: &Option<String>) -> &str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => "Not specified",
    }
}
