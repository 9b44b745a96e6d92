//! Insight relay contract: wire DTOs, prompt template, response
//! interpretation and the per-panel result slot.

use crate::enums::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relay endpoint path
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Shown when the model returned no text.
pub const NO_INSIGHTS_GENERATED: &str = "No insights generated.";

/// Shown for every failed analysis, whatever the cause.
pub const INSIGHT_FALLBACK: &str = "Error generating insights. Please try again later.";

pub const API_KEY_NOT_CONFIGURED: &str = "API Key not configured";

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Client-side timeout for one analysis request.
pub const INSIGHT_TIMEOUT_MS: u32 = 30_000;

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightRequest {
    /// Section label the data belongs to
    #[serde(default)]
    pub context: String,
    /// Arbitrary JSON snapshot of the section data
    #[serde(default)]
    pub data: serde_json::Value,
    /// Language code (`en`, `tr`, `hi`) or free-form language name
    #[serde(default)]
    pub lang: String,
}

impl InsightRequest {
    pub fn new<T: Serialize>(
        context: impl Into<String>,
        data: &T,
        lang: Language,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            context: context.into(),
            data: serde_json::to_value(data)?,
            lang: lang.code().to_string(),
        })
    }
}

/// Successful relay response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightResponse {
    pub result: String,
}

/// Error relay response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightErrorResponse {
    pub error: String,
}

/// Builds the fixed analysis prompt sent to the model.
pub fn build_prompt(context: &str, data: &serde_json::Value, lang: &str) -> String {
    let language = Language::from_code(lang)
        .map(|l| l.english_name().to_string())
        .unwrap_or_else(|| lang.trim().to_string());
    let language = if language.is_empty() {
        Language::default().english_name().to_string()
    } else {
        language
    };

    format!(
        "Analyze the following supply chain data for the section: {context}.\n\
         Data: {data}\n\
         \n\
         Please provide a concise analysis in {language} including:\n\
         1. Key Trends observed.\n\
         2. Potential risks or bottlenecks.\n\
         3. Actionable recommendations.\n\
         \n\
         Keep the tone professional and expert-level.",
    )
}

/// Why an analysis request did not produce text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsightFailure {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

/// Interprets a relay response.
///
/// 2xx with `{result}` yields the text (or [`NO_INSIGHTS_GENERATED`] when it
/// is empty); anything else is a failure carrying the relay's `error` field
/// when present.
pub fn interpret_relay_response(status: u16, body: &str) -> Result<String, InsightFailure> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<InsightErrorResponse>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", status));
        return Err(InsightFailure::Http { status, message });
    }

    #[derive(Deserialize)]
    struct RelayBody {
        result: Option<String>,
    }

    let parsed: RelayBody = serde_json::from_str(body)
        .map_err(|e| InsightFailure::MalformedBody(e.to_string()))?;

    Ok(parsed
        .result
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| NO_INSIGHTS_GENERATED.to_string()))
}

/// Collapses an outcome to the text shown to the user.
pub fn text_or_fallback(outcome: Result<String, InsightFailure>) -> String {
    outcome.unwrap_or_else(|_| INSIGHT_FALLBACK.to_string())
}

/// Maps an outcome onto [`InsightSlot::complete`]: any failure becomes
/// `Err(INSIGHT_FALLBACK)`, so the panel lands in its error state.
pub fn slot_outcome(outcome: Result<String, InsightFailure>) -> Result<String, String> {
    outcome.map_err(|_| INSIGHT_FALLBACK.to_string())
}

/// Phase of an insight panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightPhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Generation token returned by [`InsightSlot::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightTicket(u64);

/// Transient result slot of one insight panel.
///
/// Each request takes a new ticket; only the newest ticket may write the
/// result, so a slow earlier response can never overwrite a later one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightSlot {
    generation: u64,
    phase: InsightPhase,
    text: Option<String>,
    error: Option<String>,
}

impl InsightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> InsightPhase {
        self.phase
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == InsightPhase::Loading
    }

    /// Starts a request: clears the previous result and enters `Loading`.
    pub fn begin(&mut self) -> InsightTicket {
        self.generation += 1;
        self.phase = InsightPhase::Loading;
        self.text = None;
        self.error = None;
        InsightTicket(self.generation)
    }

    /// Applies an outcome. Returns `false` (and changes nothing) for a
    /// superseded ticket.
    pub fn complete(&mut self, ticket: InsightTicket, outcome: Result<String, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match outcome {
            Ok(text) => {
                self.phase = InsightPhase::Ready;
                self.text = Some(text);
                self.error = None;
            }
            Err(message) => {
                self.phase = InsightPhase::Idle;
                self.text = None;
                self.error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let req: InsightRequest = serde_json::from_str(r#"{"context":"Transportation"}"#).unwrap();
        assert_eq!(req.context, "Transportation");
        assert_eq!(req.data, serde_json::Value::Null);
        assert_eq!(req.lang, "");
    }

    #[test]
    fn test_request_new_serializes_data() {
        let req = InsightRequest::new("Price & Qty Audit", &vec![1, 2, 3], Language::Tr).unwrap();
        assert_eq!(req.data, json!([1, 2, 3]));
        assert_eq!(req.lang, "tr");
    }

    #[test]
    fn test_prompt_contains_context_data_and_language() {
        let prompt = build_prompt("Supplier Risk Matrix", &json!({"otd": 94}), "hi");
        assert!(prompt.contains("for the section: Supplier Risk Matrix."));
        assert!(prompt.contains(r#"Data: {"otd":94}"#));
        assert!(prompt.contains("concise analysis in Hindi"));
        assert!(prompt.contains("1. Key Trends observed."));
        assert!(prompt.contains("2. Potential risks or bottlenecks."));
        assert!(prompt.contains("3. Actionable recommendations."));
        assert!(prompt.contains("professional and expert-level"));
    }

    #[test]
    fn test_prompt_keeps_unknown_language_verbatim() {
        let prompt = build_prompt("x", &json!(null), "German");
        assert!(prompt.contains("analysis in German"));
        let prompt = build_prompt("x", &json!(null), "");
        assert!(prompt.contains("analysis in English"));
    }

    #[test]
    fn test_interpret_success() {
        assert_eq!(
            interpret_relay_response(200, r#"{"result":"ABC"}"#),
            Ok("ABC".to_string())
        );
    }

    #[test]
    fn test_interpret_empty_result() {
        assert_eq!(
            interpret_relay_response(200, r#"{"result":""}"#),
            Ok(NO_INSIGHTS_GENERATED.to_string())
        );
        assert_eq!(
            interpret_relay_response(200, r#"{}"#),
            Ok(NO_INSIGHTS_GENERATED.to_string())
        );
    }

    #[test]
    fn test_interpret_failures_become_fallback() {
        let server_error = interpret_relay_response(500, r#"{"error":"API Key not configured"}"#);
        assert_eq!(
            server_error,
            Err(InsightFailure::Http {
                status: 500,
                message: "API Key not configured".to_string()
            })
        );
        assert_eq!(text_or_fallback(server_error), INSIGHT_FALLBACK);

        let bad_gateway = interpret_relay_response(502, "<html>");
        assert!(matches!(bad_gateway, Err(InsightFailure::Http { status: 502, .. })));

        let malformed = interpret_relay_response(200, "not json");
        assert!(matches!(malformed, Err(InsightFailure::MalformedBody(_))));
        assert_eq!(text_or_fallback(malformed), INSIGHT_FALLBACK);

        assert_eq!(
            text_or_fallback(Err(InsightFailure::Network("offline".into()))),
            INSIGHT_FALLBACK
        );
    }

    #[test]
    fn test_slot_success_path() {
        let mut slot = InsightSlot::new();
        assert_eq!(slot.phase(), InsightPhase::Idle);

        let ticket = slot.begin();
        assert!(slot.is_loading());

        assert!(slot.complete(ticket, Ok("trends".into())));
        assert_eq!(slot.phase(), InsightPhase::Ready);
        assert_eq!(slot.text(), Some("trends"));
        assert_eq!(slot.error(), None);
    }

    #[test]
    fn test_slot_failure_returns_to_idle_with_error() {
        let mut slot = InsightSlot::new();
        let ticket = slot.begin();
        assert!(slot.complete(ticket, Err(INSIGHT_FALLBACK.into())));
        assert_eq!(slot.phase(), InsightPhase::Idle);
        assert_eq!(slot.text(), None);
        assert_eq!(slot.error(), Some(INSIGHT_FALLBACK));
    }

    #[test]
    fn test_slot_relay_error_lands_in_error_state() {
        let mut slot = InsightSlot::new();
        let ticket = slot.begin();

        let outcome = interpret_relay_response(500, r#"{"error":"API Key not configured"}"#);
        assert!(slot.complete(ticket, slot_outcome(outcome)));

        assert_eq!(slot.phase(), InsightPhase::Idle);
        assert_eq!(slot.text(), None);
        assert_eq!(slot.error(), Some(INSIGHT_FALLBACK));
    }

    #[test]
    fn test_slot_outcome_keeps_success_text() {
        let outcome = interpret_relay_response(200, r#"{"result":""}"#);
        assert_eq!(slot_outcome(outcome), Ok(NO_INSIGHTS_GENERATED.to_string()));
        assert_eq!(
            slot_outcome(Err(InsightFailure::Timeout(INSIGHT_TIMEOUT_MS))),
            Err(INSIGHT_FALLBACK.to_string())
        );
    }

    #[test]
    fn test_slot_ignores_stale_response() {
        let mut slot = InsightSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.complete(second, Ok("new".into())));
        // Первый ответ пришёл позже второго
        assert!(!slot.complete(first, Ok("old".into())));
        assert_eq!(slot.text(), Some("new"));
        assert_eq!(slot.phase(), InsightPhase::Ready);
    }

    #[test]
    fn test_slot_new_request_clears_previous_result() {
        let mut slot = InsightSlot::new();
        let ticket = slot.begin();
        slot.complete(ticket, Ok("first".into()));

        let ticket = slot.begin();
        assert_eq!(slot.text(), None);
        assert!(slot.is_loading());
        slot.complete(ticket, Err("boom".into()));
        assert_eq!(slot.text(), None);
        assert_eq!(slot.error(), Some("boom"));
    }
}
