//! Soil profile dataset: crop suitability and remediation advice keyed by
//! soil texture/type.

use std::collections::BTreeMap;

use super::{list, SoilProfile};

fn profile(
    primary: &[&str],
    secondary: &[&str],
    characteristics: &str,
    improvement: &str,
) -> SoilProfile {
    SoilProfile {
        primary: list(primary),
        secondary: list(secondary),
        characteristics: characteristics.to_string(),
        improvement: improvement.to_string(),
    }
}

pub(super) fn build() -> BTreeMap<String, SoilProfile> {
    let mut soils = BTreeMap::new();

    soils.insert(
        "sandy".to_string(),
        profile(
            &["groundnut", "millet", "watermelon", "pulses"],
            &["maize", "sunflower", "cashew"],
            "Well-drained, low water retention, low nutrients",
            "Add organic matter, mulching, frequent irrigation",
        ),
    );

    soils.insert(
        "clay".to_string(),
        profile(
            &["rice", "wheat", "sugarcane", "cotton"],
            &["jute", "soybean", "lentil"],
            "High water retention, nutrient-rich, poor drainage",
            "Add gypsum, organic matter, improve drainage",
        ),
    );

    soils.insert(
        "loam".to_string(),
        profile(
            &["wheat", "potato", "vegetables", "maize"],
            &["pulses", "oilseeds", "sugarcane"],
            "Balanced drainage and nutrients, ideal for most crops",
            "Maintain organic matter, crop rotation",
        ),
    );

    soils.insert(
        "red".to_string(),
        profile(
            &["groundnut", "cotton", "pulses", "millets"],
            &["maize", "oilseeds", "tobacco"],
            "Iron-rich, porous, low fertility",
            "Add lime, fertilizers, green manuring",
        ),
    );

    soils.insert(
        "black".to_string(),
        profile(
            &["cotton", "soybean", "sorghum", "wheat"],
            &["sunflower", "pulses", "safflower"],
            "Moisture retentive, rich in calcium and magnesium",
            "Proper drainage, avoid over-watering",
        ),
    );

    soils.insert(
        "alluvial".to_string(),
        profile(
            &["rice", "wheat", "sugarcane", "jute"],
            &["maize", "pulses", "vegetables"],
            "Fertile, well-drained, rich in potash",
            "Regular fertilization, crop rotation",
        ),
    );

    soils.insert(
        "laterite".to_string(),
        profile(
            &["cashew", "coconut", "rubber", "areca nut"],
            &["tapioca", "pulses", "groundnut"],
            "Acidic, poor in nutrients, good drainage",
            "Add lime, organic manure, mulching",
        ),
    );

    soils.insert(
        "mountain".to_string(),
        profile(
            &["wheat", "barley", "potato", "maize"],
            &["pulses", "oilseeds", "vegetables"],
            "Variable, often rocky, moderate fertility",
            "Terracing, erosion control, organic matter",
        ),
    );

    soils
}
