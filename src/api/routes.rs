//! API route definitions
//!
//! Organizes endpoints for the well visualization dashboard:
//! - /api/v1/health, /api/v1/status - liveness and dataset provenance
//! - /api/v1/years|months|dockets - docket navigation
//! - /api/v1/selection/* - the selection cascade
//! - /api/v1/filters, /api/v1/counters - filter panel
//! - /api/v1/scene - the assembled render list
//! - /api/v1/wells, /api/v1/well/* - pick list and well detail
//! - /api/v1/board/* - board matter search and highlighting
//! - /api/v1/reload - dataset hot swap

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, DashboardState};

/// Create all API routes for the dashboard.
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/status", get(handlers::get_status))
        // Docket navigation
        .route("/years", get(handlers::get_years))
        .route("/months", get(handlers::get_months))
        .route("/dockets", get(handlers::get_dockets))
        // Selection cascade
        .route("/selection/year", post(handlers::select_year))
        .route("/selection/month", post(handlers::select_month))
        .route("/selection/docket", post(handlers::select_docket))
        .route("/selection/well", post(handlers::select_well))
        // Filter panel
        .route("/filters", get(handlers::get_filters))
        .route("/filters", post(handlers::update_filters))
        .route("/counters", get(handlers::get_counters))
        .route("/operators", get(handlers::get_operators))
        // Render list
        .route("/scene", get(handlers::get_scene))
        .route("/fields", get(handlers::get_fields))
        // Wells
        .route("/wells", get(handlers::get_wells))
        .route("/well/:api_number", get(handlers::get_well))
        .route("/well/:api_number/production", get(handlers::get_well_production))
        // Board matters
        .route("/board/matters", get(handlers::get_board_matters))
        .route("/board/section/:conc", get(handlers::get_board_matters_for_section))
        .route("/board/cause/:cause_number", get(handlers::get_board_matter))
        .route("/board/select", post(handlers::select_board_matter))
        // Dataset management
        .route("/reload", post(handlers::reload_dataset))
        .with_state(state)
}

/// Legacy health endpoint at root level.
pub fn legacy_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{build_dataset, synthetic, LoadOptions};
    use crate::scene::SceneStyle;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_state() -> DashboardState {
        let tables = synthetic::generate(&synthetic::SyntheticConfig::default());
        let dataset = build_dataset(tables, LoadOptions::default()).expect("synthetic basin builds");
        DashboardState::new(dataset, None, SceneStyle::default())
    }

    #[tokio::test]
    async fn test_api_routes_health() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_status() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_years() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(Request::builder().uri("/years").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_scene() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(Request::builder().uri("/scene").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
