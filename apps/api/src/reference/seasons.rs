//! Seasonal crop lists for the Indian agricultural calendar.
//!
//! Kharif: monsoon-sown. Rabi: winter-sown. Zaid: short summer cycle.
//! Perennial: year-round plantation crops.

use std::collections::BTreeMap;

use super::list;

pub(super) fn build() -> BTreeMap<String, Vec<String>> {
    let mut seasons = BTreeMap::new();

    seasons.insert(
        "kharif".to_string(),
        list(&[
            "rice", "maize", "cotton", "soybean", "groundnut", "bajra", "jowar", "tur",
            "moong", "urad",
        ]),
    );

    seasons.insert(
        "rabi".to_string(),
        list(&[
            "wheat", "mustard", "potato", "chickpea", "lentil", "barley", "peas", "gram",
            "onion",
        ]),
    );

    seasons.insert(
        "zaid".to_string(),
        list(&[
            "watermelon", "cucumber", "muskmelon", "vegetables", "fodder", "bitter gourd",
            "pumpkin",
        ]),
    );

    seasons.insert(
        "perennial".to_string(),
        list(&[
            "sugarcane", "banana", "coconut", "areca nut", "cashew", "rubber", "tea",
            "coffee",
        ]),
    );

    seasons
}
