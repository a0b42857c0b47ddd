//! Supported languages and the state → dominant-regional-language map used
//! to preselect a recommendation language.

use std::collections::BTreeMap;

use super::Language;

fn lang(name: &str, native: &str) -> Language {
    Language {
        name: name.to_string(),
        native: native.to_string(),
    }
}

pub(super) fn build_languages() -> BTreeMap<String, Language> {
    let mut languages = BTreeMap::new();
    languages.insert("english".to_string(), lang("English", "English"));
    languages.insert("hindi".to_string(), lang("Hindi", "हिंदी"));
    languages.insert("tamil".to_string(), lang("Tamil", "தமிழ்"));
    languages.insert("telugu".to_string(), lang("Telugu", "తెలుగు"));
    languages.insert("kannada".to_string(), lang("Kannada", "ಕನ್ನಡ"));
    languages.insert("malayalam".to_string(), lang("Malayalam", "മലയാളം"));
    languages.insert("marathi".to_string(), lang("Marathi", "मराठी"));
    languages.insert("bengali".to_string(), lang("Bengali", "বাংলা"));
    languages.insert("gujarati".to_string(), lang("Gujarati", "ગુજરાતી"));
    languages.insert("punjabi".to_string(), lang("Punjabi", "ਪੰਜਾਬੀ"));
    languages.insert("odia".to_string(), lang("Odia", "ଓଡ଼ିଆ"));
    languages.insert("assamese".to_string(), lang("Assamese", "অসমীয়া"));
    languages.insert("konkani".to_string(), lang("Konkani", "कोंकणी"));
    languages
}

pub(super) fn build_state_map() -> BTreeMap<String, String> {
    let pairs = [
        ("Tamil Nadu", "tamil"),
        ("Karnataka", "kannada"),
        ("Kerala", "malayalam"),
        ("Andhra Pradesh", "telugu"),
        ("Telangana", "telugu"),
        ("Maharashtra", "marathi"),
        ("Gujarat", "gujarati"),
        ("Punjab", "punjabi"),
        ("West Bengal", "bengali"),
        ("Rajasthan", "hindi"),
        ("Uttar Pradesh", "hindi"),
        ("Bihar", "hindi"),
        ("Madhya Pradesh", "hindi"),
        ("Haryana", "hindi"),
        ("Jharkhand", "hindi"),
        ("Chhattisgarh", "hindi"),
        ("Uttarakhand", "hindi"),
        ("Himachal Pradesh", "hindi"),
        ("Delhi", "hindi"),
        ("Jammu and Kashmir", "hindi"),
        ("Assam", "assamese"),
        ("Odisha", "odia"),
        ("Goa", "konkani"),
        ("Arunachal Pradesh", "english"),
        ("Manipur", "english"),
        ("Meghalaya", "english"),
        ("Mizoram", "english"),
        ("Nagaland", "english"),
        ("Sikkim", "english"),
        ("Tripura", "bengali"),
        ("Ladakh", "hindi"),
    ];

    pairs
        .into_iter()
        .map(|(state, code)| (state.to_string(), code.to_string()))
        .collect()
}
