pub mod rest;
pub mod state;

pub use rest::{get_points_handler, health_handler, process_receipt_handler, ApiDoc};
pub use state::AppState;

use crate::config::Config;
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Builds the complete application: receipt routes, health check and Swagger UI.
pub fn create_router(app_state: Arc<AppState>, config: &Config) -> Router {
    let mut api_router = Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(get_points_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_allow_origin {
        api_router = api_router.layer(
            CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        );
    }

    Router::new()
        .merge(api_router.with_state(app_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
