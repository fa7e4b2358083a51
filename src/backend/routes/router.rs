/**
 * Router Configuration
 *
 * # Route Order
 *
 * 1. API routes (auth, then protected)
 * 2. Static files from the configured directory
 * 3. 404 text for anything else
 *
 * Request tracing and permissive CORS wrap the whole router.
 */

use std::path::Path;

use axum::{handler::HandlerWithoutStateExt, http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, static_dir: &Path) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone());

    let static_files = ServeDir::new(static_dir).not_found_service(not_found.into_service());

    router
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
