use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use contracts::shared::insight::ANALYZE_PATH;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Insight relay: только POST и OPTIONS, остальное 405
        .route(
            ANALYZE_PATH,
            post(handlers::analyze::analyze)
                .options(handlers::analyze::preflight)
                .fallback(handlers::analyze::method_not_allowed)
                .layer(middleware::map_response(handlers::analyze::relay_cors_headers)),
        )
        .route(
            "/api/datasets/:section",
            get(handlers::datasets::get_dataset),
        )
        .layer(cors)
        .with_state(state)
}
