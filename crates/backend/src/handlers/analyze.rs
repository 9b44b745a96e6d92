use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::insight::{
    build_prompt, InsightErrorResponse, InsightRequest, InsightResponse, API_KEY_NOT_CONFIGURED,
    INSIGHT_FALLBACK, METHOD_NOT_ALLOWED, NO_INSIGHTS_GENERATED,
};
use thiserror::Error;

use crate::shared::llm::{ChatMessage, LlmError};
use crate::shared::state::AppState;

/// Ошибки релея. Клиент получает только фиксированный текст,
/// подробности остаются в логе.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("model credential is not configured")]
    MissingCredential,

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Provider(#[from] LlmError),

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            RelayError::MissingCredential => API_KEY_NOT_CONFIGURED,
            RelayError::MethodNotAllowed => METHOD_NOT_ALLOWED,
            RelayError::InvalidBody(_) | RelayError::Provider(_) => INSIGHT_FALLBACK,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::MissingCredential => tracing::warn!("Insight relay: {}", self),
            RelayError::MethodNotAllowed => tracing::debug!("Insight relay: {}", self),
            _ => tracing::error!("Insight relay failed: {}", self),
        }

        let body = InsightErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InsightResponse>, RelayError> {
    let request = parse_request(&body)?;

    // Ключ проверяется до любого исходящего вызова
    let api_key = state
        .credentials
        .api_key()
        .ok_or(RelayError::MissingCredential)?;

    let provider = state.providers.create(api_key);
    tracing::info!(
        "Generating insights via {}: context='{}', lang='{}'",
        provider.provider_name(),
        request.context,
        request.lang
    );

    let prompt = build_prompt(&request.context, &request.data, &request.lang);
    let response = tokio::time::timeout(
        state.llm_timeout,
        provider.chat_completion(vec![ChatMessage::user(prompt)]),
    )
    .await
    .map_err(|_| LlmError::Timeout(state.llm_timeout.as_secs()))??;

    tracing::info!(
        "Insights generated: model={}, tokens={:?}, finish_reason={:?}",
        response.model,
        response.tokens_used,
        response.finish_reason
    );

    let result = if response.content.trim().is_empty() {
        NO_INSIGHTS_GENERATED.to_string()
    } else {
        response.content
    };

    Ok(Json(InsightResponse { result }))
}

/// OPTIONS /api/analyze
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Любой другой метод на /api/analyze
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

/// Заголовки CORS на каждом ответе релея, включая ошибки
pub async fn relay_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Пустое тело равносильно `{}`: все поля по умолчанию
fn parse_request(body: &[u8]) -> Result<InsightRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(InsightRequest::default());
    }
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure_routes;
    use crate::shared::llm::{CredentialSource, LlmProvider, LlmResponse, ProviderFactory};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use contracts::shared::dataset::SampleDatasets;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower::ServiceExt;

    struct StubCredential(Option<&'static str>);

    impl CredentialSource for StubCredential {
        fn api_key(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[derive(Clone)]
    enum Reply {
        Text(&'static str),
        Fail,
        Hang,
    }

    struct StubProvider {
        reply: Reply,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<LlmResponse, LlmError> {
            if let Some(first) = messages.first() {
                self.prompts.lock().unwrap().push(first.content.clone());
            }
            match self.reply {
                Reply::Text(text) => Ok(LlmResponse {
                    content: text.to_string(),
                    tokens_used: Some(42),
                    model: "stub".to_string(),
                    finish_reason: None,
                }),
                Reply::Fail => Err(LlmError::ApiError("upstream 503".to_string())),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Err(LlmError::ApiError("unreachable".to_string()))
                }
            }
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }

    struct StubFactory {
        reply: Reply,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ProviderFactory for StubFactory {
        fn create(&self, _api_key: String) -> Box<dyn LlmProvider> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::new(StubProvider {
                reply: self.reply.clone(),
                prompts: self.prompts.clone(),
            })
        }
    }

    struct Harness {
        state: AppState,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    fn harness(key: Option<&'static str>, reply: Reply) -> Harness {
        let calls = Arc::new(AtomicUsize::new(0));
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let state = AppState {
            credentials: Arc::new(StubCredential(key)),
            providers: Arc::new(StubFactory {
                reply,
                calls: calls.clone(),
                prompts: prompts.clone(),
            }),
            datasets: Arc::new(SampleDatasets),
            llm_timeout: Duration::from_millis(100),
        };
        Harness {
            state,
            calls,
            prompts,
        }
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(state: AppState, req: Request<Body>) -> (StatusCode, Response<Bytes>) {
        let resp = configure_routes(state).oneshot(req).await.unwrap();
        let status = resp.status();
        let (parts, body) = resp.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        (status, Response::from_parts(parts, bytes))
    }

    fn json(resp: &Response<Bytes>) -> serde_json::Value {
        serde_json::from_slice(resp.body()).unwrap()
    }

    #[tokio::test]
    async fn test_post_returns_model_text() {
        let h = harness(Some("sk-test"), Reply::Text("ABC"));
        let (status, resp) = send(
            h.state,
            post(r#"{"context":"Transportation","data":{"x":1},"lang":"tr"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&resp), serde_json::json!({"result": "ABC"}));
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);

        let prompts = h.prompts.lock().unwrap();
        assert!(prompts[0].contains("for the section: Transportation."));
        assert!(prompts[0].contains(r#"Data: {"x":1}"#));
        assert!(prompts[0].contains("analysis in Turkish"));
    }

    #[tokio::test]
    async fn test_empty_model_text_becomes_placeholder() {
        let h = harness(Some("sk-test"), Reply::Text("  "));
        let (status, resp) = send(h.state, post(r#"{"context":"x"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&resp)["result"], NO_INSIGHTS_GENERATED);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_provider_call() {
        let h = harness(None, Reply::Text("never"));
        let (status, resp) = send(h.state, post(r#"{"context":"x","data":[],"lang":"en"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&resp), serde_json::json!({"error": "API Key not configured"}));
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_error_is_generic() {
        let h = harness(Some("sk-test"), Reply::Fail);
        let (status, resp) = send(h.state, post(r#"{"context":"x"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&resp)["error"], INSIGHT_FALLBACK);
        assert!(!String::from_utf8_lossy(resp.body()).contains("503"));
    }

    #[tokio::test]
    async fn test_provider_timeout_is_generic() {
        let h = harness(Some("sk-test"), Reply::Hang);
        let (status, resp) = send(h.state, post(r#"{"context":"x"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&resp)["error"], INSIGHT_FALLBACK);
    }

    #[tokio::test]
    async fn test_malformed_body_is_generic() {
        let h = harness(Some("sk-test"), Reply::Text("never"));
        let (status, resp) = send(h.state, post("{not json")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&resp)["error"], INSIGHT_FALLBACK);
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_body_uses_defaults() {
        let h = harness(Some("sk-test"), Reply::Text("ok"));
        let (status, _) = send(h.state, post("")).await;

        assert_eq!(status, StatusCode::OK);
        let prompts = h.prompts.lock().unwrap();
        assert!(prompts[0].contains("Data: null"));
        assert!(prompts[0].contains("analysis in English"));
    }

    #[tokio::test]
    async fn test_options_is_empty_ok() {
        let h = harness(None, Reply::Text("never"));
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/analyze")
            .body(Body::empty())
            .unwrap();
        let (status, resp) = send(h.state, req).await;

        assert_eq!(status, StatusCode::OK);
        assert!(resp.body().is_empty());
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let h = harness(Some("sk-test"), Reply::Text("never"));
            let req = Request::builder()
                .method(method.clone())
                .uri("/api/analyze")
                .body(Body::empty())
                .unwrap();
            let (status, resp) = send(h.state, req).await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", method);
            assert_eq!(json(&resp), serde_json::json!({"error": "Method not allowed"}));
            assert_eq!(h.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_cors_headers_on_error_responses() {
        let h = harness(None, Reply::Text("never"));
        let (_, resp) = send(h.state, post("{}")).await;

        let headers = resp.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }
}
