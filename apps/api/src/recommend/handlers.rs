//! Axum route handlers for the lookup and recommendation endpoints.

use std::collections::BTreeMap;

use axum::{extract::State, Form, Json};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::recommend::extract::extract;
use crate::recommend::prompt::build_prompt;
use crate::recommend::rules::rule_based_suggestions;
use crate::recommend::{non_empty, FarmerInput};
use crate::state::AppState;

/// GET /states
///
/// Full reference dataset for client-side form population.
pub async fn handle_states(State(state): State<AppState>) -> Json<Value> {
    let reference = &state.reference;
    let states: Vec<&String> = reference.states.keys().collect();
    let districts: BTreeMap<&String, &Vec<String>> = reference
        .states
        .iter()
        .map(|(name, record)| (name, &record.districts))
        .collect();

    Json(json!({
        "states": states,
        "districts": districts,
        "state_data": reference.states,
        "languages": reference.languages,
        "state_language_map": reference.state_languages,
    }))
}

/// POST /recommend
///
/// Validates the form, runs the rule engine, asks Gemini for the detailed
/// recommendation, and extracts the JSON reply. Exhausted retries degrade to
/// a 200 carrying the rule-based bundle — the caller always gets usable
/// content.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Form(input): Form<FarmerInput>,
) -> Result<Json<Value>, AppError> {
    let required = [
        ("soil_type", &input.soil_type),
        ("state", &input.state),
        ("district", &input.district),
    ];
    let missing: Vec<&str> = required
        .into_iter()
        .filter(|(_, value)| non_empty(value).is_none())
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let state_name = non_empty(&input.state).unwrap_or_default();
    let Some(record) = state.reference.state(state_name) else {
        return Err(AppError::Validation(format!(
            "Invalid state: {state_name}. Please select a valid Indian state."
        )));
    };

    let language = input.language_or_default();
    let bundle = rule_based_suggestions(
        &state.reference,
        record,
        non_empty(&input.soil_type).unwrap_or_default(),
        input.season.as_deref(),
    );
    let prompt = build_prompt(&state.reference, &input, record, &bundle);

    let raw = match state.generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("AI recommendation unavailable: {e}");
            return Ok(Json(json!({
                "error": "Failed to get AI recommendation. Using rule-based suggestions.",
                "rule_suggestions": bundle,
                "state_info": record,
            })));
        }
    };

    Ok(Json(json!({
        "success": true,
        "ai_recommendation": extract(&raw).into_value(),
        "rule_suggestions": bundle,
        "state_info": record,
        "inputs": sanitize_inputs(&input),
        "language": language,
    })))
}

/// Echoes back only the fields the farmer actually filled in.
fn sanitize_inputs(input: &FarmerInput) -> Map<String, Value> {
    let fields = [
        ("soil_type", &input.soil_type),
        ("state", &input.state),
        ("district", &input.district),
        ("season", &input.season),
        ("farm_size", &input.farm_size),
        ("irrigation", &input.irrigation),
        ("budget", &input.budget),
        ("previous_crop", &input.previous_crop),
        ("language", &input.language),
    ];

    fields
        .into_iter()
        .filter_map(|(name, value)| {
            non_empty(value).map(|v| (name.to_string(), Value::String(v.to_string())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::gemini::{GeminiError, TextGenerator};
    use crate::reference::ReferenceData;
    use crate::routes::build_router;

    /// Generator returning a fixed reply.
    struct ScriptedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeminiError> {
            Ok(self.0.to_string())
        }
    }

    /// Generator that always reports an exhausted retry budget.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeminiError> {
            Err(GeminiError::EmptyContent)
        }
    }

    fn test_state(generator: impl TextGenerator + 'static) -> AppState {
        AppState {
            reference: Arc::new(ReferenceData::load()),
            generator: Arc::new(generator),
            config: Config {
                gemini_api_key: Some("test-key".to_string()),
                port: 5000,
                rust_log: "info".to_string(),
                debug: false,
            },
        }
    }

    fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/recommend")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_district_lists_exactly_district() {
        let app = build_router(test_state(FailingGenerator));
        let response = app
            .oneshot(form_request("soil_type=black&state=Maharashtra"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing required fields: district");
    }

    #[tokio::test]
    async fn test_empty_values_count_as_missing() {
        let app = build_router(test_state(FailingGenerator));
        let response = app
            .oneshot(form_request("soil_type=&state=&district="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Missing required fields: soil_type, state, district"
        );
    }

    #[tokio::test]
    async fn test_unknown_state_is_rejected() {
        let app = build_router(test_state(FailingGenerator));
        let response = app
            .oneshot(form_request("soil_type=black&state=Atlantis&district=Pune"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Invalid state: Atlantis. Please select a valid Indian state."
        );
    }

    #[tokio::test]
    async fn test_generator_failure_degrades_to_rule_bundle() {
        let app = build_router(test_state(FailingGenerator));
        let response = app
            .oneshot(form_request(
                "soil_type=black&state=Maharashtra&district=Pune&season=kharif",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Failed to get AI recommendation. Using rule-based suggestions."
        );
        assert_eq!(
            body["rule_suggestions"]["primary_crops"],
            json!(["cotton", "soybean", "wheat"])
        );
        assert_eq!(body["state_info"]["rainfall"], "400-3000mm");
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn test_success_extracts_json_from_noisy_reply() {
        let app = build_router(test_state(ScriptedGenerator(
            "Here you go:\n{\"recommended_crops\": [{\"name\": \"Cotton\"}]}\nHope it helps!",
        )));
        let response = app
            .oneshot(form_request(
                "soil_type=black&state=Maharashtra&district=Pune&season=kharif&language=marathi",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["ai_recommendation"]["recommended_crops"][0]["name"],
            "Cotton"
        );
        assert_eq!(body["language"], "marathi");
        assert_eq!(body["rule_suggestions"]["season"], "kharif");
    }

    #[tokio::test]
    async fn test_unparseable_reply_wraps_raw_response() {
        let app = build_router(test_state(ScriptedGenerator("no json here")));
        let response = app
            .oneshot(form_request(
                "soil_type=alluvial&state=Punjab&district=Ludhiana",
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["ai_recommendation"]["raw_response"], "no json here");
    }

    #[tokio::test]
    async fn test_inputs_echo_omits_empty_fields() {
        let app = build_router(test_state(ScriptedGenerator("{\"ok\": true}")));
        let response = app
            .oneshot(form_request(
                "soil_type=black&state=Maharashtra&district=Pune&budget=&irrigation=drip",
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        let inputs = body["inputs"].as_object().unwrap();
        assert_eq!(inputs["irrigation"], "drip");
        assert!(!inputs.contains_key("budget"));
        assert!(!inputs.contains_key("previous_crop"));
        // language defaults in the response even when not submitted
        assert_eq!(body["language"], "english");
        assert!(!inputs.contains_key("language"));
    }

    #[tokio::test]
    async fn test_states_endpoint_shape() {
        let app = build_router(test_state(FailingGenerator));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/states")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["states"].as_array().unwrap().len(), 31);
        assert!(body["districts"]["Goa"]
            .as_array()
            .unwrap()
            .contains(&json!("North Goa")));
        assert_eq!(
            body["state_data"]["Maharashtra"]["climate"],
            "Tropical to semi-arid"
        );
        assert_eq!(body["languages"]["hindi"]["native"], "हिंदी");
        assert_eq!(body["state_language_map"]["Tamil Nadu"], "tamil");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let app = build_router(test_state(FailingGenerator));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn test_health_reports_coverage_and_key_presence() {
        let app = build_router(test_state(FailingGenerator));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "All India Crop Recommendation API");
        assert_eq!(body["states_covered"], 31);
        assert_eq!(body["gemini_configured"], true);
        assert_eq!(body["languages_supported"], 13);
    }
}
