//! Router configuration for Web API.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_file, get_file, get_file_data, get_stats, get_status, list_files, publish_file,
    unpublish_file, AppState,
};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let file_routes = Router::new()
        .route("/", get(list_files).post(create_file))
        .route("/:id", get(get_file))
        .route("/:id/publish", put(publish_file))
        .route("/:id/unpublish", put(unpublish_file))
        .route("/:id/data", get(get_file_data));

    Router::new()
        .route("/status", get(get_status))
        .route("/stats", get(get_stats))
        .nest("/files", file_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
