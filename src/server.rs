//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::models::AppConfig;
use crate::services::DitherService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dither_service: Arc<DitherService>,
}

impl FromRef<AppState> for Arc<DitherService> {
    fn from_ref(state: &AppState) -> Self {
        state.dither_service.clone()
    }
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let config = Arc::new(config);
    let dither_service = Arc::new(DitherService::new(config.clone()));
    AppState {
        config,
        dither_service,
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DitherMe API",
        description = "Classic black-and-white dithering for PNG images",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_dither, api::handle_algorithms),
    components(schemas(api::AlgorithmInfo, api::ErrorResponse)),
    tags(
        (name = "Dither", description = "Image dithering")
    )
)]
pub struct ApiDoc;

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_bytes;

    Router::new()
        .route("/api/dither/:algorithm", post(api::handle_dither))
        .route("/api/algorithms", get(api::handle_algorithms))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
}

async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
