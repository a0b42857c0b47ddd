//! Response extractor — best-effort JSON recovery from generator output.
//!
//! Models frequently wrap the requested JSON in prose or code fences. The
//! extractor takes the span from the first `{` to the last `}` and attempts
//! a strict parse; anything that fails comes back as a raw-text fallback.
//! No error ever crosses this boundary.

use serde_json::{json, Value};

/// Two-phase extraction result: a parsed JSON document, or the untouched
/// raw text when no parseable span exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Parsed(Value),
    Fallback(String),
}

impl Extraction {
    /// Collapses to the wire representation: the parsed document as-is, or
    /// `{"raw_response": <text>}` for the fallback case.
    pub fn into_value(self) -> Value {
        match self {
            Extraction::Parsed(value) => value,
            Extraction::Fallback(raw) => json!({ "raw_response": raw }),
        }
    }
}

/// Extracts the first-`{`-to-last-`}` span and parses it strictly.
///
/// The parsed structure is trusted as-is; there is no validation against
/// the requested schema.
pub fn extract(raw: &str) -> Extraction {
    let span = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => return Extraction::Fallback(raw.to_string()),
    };

    match serde_json::from_str::<Value>(span) {
        Ok(value) => Extraction::Parsed(value),
        Err(err) => {
            tracing::warn!("failed to parse generator JSON span: {err}");
            Extraction::Fallback(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_json_between_noise() {
        let result = extract("noise {\"a\":1} noise");
        assert_eq!(result, Extraction::Parsed(json!({"a": 1})));
    }

    #[test]
    fn test_no_braces_falls_back_to_raw_response() {
        let raw = "I could not produce JSON, sorry.";
        let result = extract(raw);
        assert_eq!(result, Extraction::Fallback(raw.to_string()));
        assert_eq!(
            result.into_value(),
            json!({ "raw_response": "I could not produce JSON, sorry." })
        );
    }

    #[test]
    fn test_invalid_json_span_falls_back_with_full_text() {
        let raw = "prefix {not json at all} suffix";
        match extract(raw) {
            Extraction::Fallback(text) => assert_eq!(text, raw),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_span_covers_first_open_to_last_close() {
        // Nested objects survive because the span is outermost-brace based.
        let raw = "```json\n{\"outer\": {\"inner\": [1, 2]}}\n```";
        assert_eq!(
            extract(raw),
            Extraction::Parsed(json!({"outer": {"inner": [1, 2]}}))
        );
    }

    #[test]
    fn test_close_before_open_is_fallback() {
        let raw = "} backwards {";
        assert_eq!(extract(raw), Extraction::Fallback(raw.to_string()));
    }

    #[test]
    fn test_bare_json_document_parses() {
        let raw = r#"{"recommended_crops": []}"#;
        assert_eq!(
            extract(raw),
            Extraction::Parsed(json!({"recommended_crops": []}))
        );
    }

    #[test]
    fn test_empty_input_is_fallback() {
        assert_eq!(extract(""), Extraction::Fallback(String::new()));
    }
}
