use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::dataset::{DatasetProvider, SectionDataset, SectionKey};

use crate::shared::state::AppState;

/// GET /api/datasets/:section
pub async fn get_dataset(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SectionDataset>, StatusCode> {
    match SectionKey::from_code(&section) {
        Some(key) => Ok(Json(state.datasets.fetch_dataset(key))),
        None => {
            tracing::warn!("Unknown dataset section requested: {}", section);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::configure_routes;
    use crate::shared::config::default_config;
    use crate::shared::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let state = AppState::from_config(&default_config().unwrap());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = configure_routes(state).oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_known_section_is_served() {
        let (status, body) = get("/api/datasets/customs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["section"], "customs");
        assert_eq!(body["data"]["imports"][0]["id"], "IMP-2201");
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found() {
        let (status, _) = get("/api/datasets/finance").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let state = AppState::from_config(&default_config().unwrap());
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = configure_routes(state).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
