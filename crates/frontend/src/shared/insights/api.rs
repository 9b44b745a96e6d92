use crate::shared::api_utils::api_url;
use contracts::shared::insight::{
    interpret_relay_response, text_or_fallback, InsightFailure, InsightRequest, ANALYZE_PATH,
    INSIGHT_TIMEOUT_MS,
};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Запросить анализ у relay.
///
/// Один POST без повторов. Ошибка (сеть, не-2xx, битое тело, таймаут)
/// возвращается как есть; подробности пишутся в консоль.
pub async fn fetch_insight(request: &InsightRequest) -> Result<String, InsightFailure> {
    let outcome = post_with_timeout(request).await;
    if let Err(e) = &outcome {
        log::error!("Insight request for '{}' failed: {}", request.context, e);
    }
    outcome
}

/// То же, но любая ошибка превращается в фиксированный текст-заглушку.
pub async fn request_insight(request: &InsightRequest) -> String {
    text_or_fallback(fetch_insight(request).await)
}

async fn post_with_timeout(request: &InsightRequest) -> Result<String, InsightFailure> {
    let call = Box::pin(post_analyze(request));
    let timer = Box::pin(TimeoutFuture::new(INSIGHT_TIMEOUT_MS));

    match select(call, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(InsightFailure::Timeout(INSIGHT_TIMEOUT_MS)),
    }
}

async fn post_analyze(request: &InsightRequest) -> Result<String, InsightFailure> {
    let response = Request::post(&api_url(ANALYZE_PATH))
        .json(request)
        .map_err(|e| InsightFailure::Network(format!("Serialize error: {}", e)))?
        .send()
        .await
        .map_err(|e| InsightFailure::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| InsightFailure::MalformedBody(e.to_string()))?;

    interpret_relay_response(status, &body)
}
