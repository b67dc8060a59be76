//! REST API module using Axum
//!
//! Provides HTTP endpoints for the well visualization dashboard. The
//! dashboard client itself is served separately; this service only speaks
//! JSON.

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::{DashboardState, ReloadSource};

use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `WELLSCOPE_CORS_ORIGINS` to a comma-separated list of allowed
/// origins for development (e.g. a Vite dev server).
fn build_cors_layer() -> CorsLayer {
    match std::env::var("WELLSCOPE_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    }
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "wellscope is running. The API lives under /api/v1.",
    )
}

/// Create the complete application router.
pub fn create_app(state: DashboardState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes(state.clone()))
        .merge(routes::legacy_routes(state))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer())
}
