//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the /api/v1/* endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port — runs in CI without `#[ignore]`.

use wellscope::api::{create_app, DashboardState};
use wellscope::ingest::{build_dataset, synthetic, LoadOptions};
use wellscope::scene::SceneStyle;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_test_state() -> DashboardState {
    let tables = synthetic::generate(&synthetic::SyntheticConfig::default());
    let dataset = build_dataset(tables, LoadOptions::default()).expect("synthetic basin builds");
    DashboardState::new(dataset, None, SceneStyle::default())
}

async fn get(state: &DashboardState, uri: &str) -> (StatusCode, Value) {
    let app = create_app(state.clone());
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn post(state: &DashboardState, uri: &str, body: Value) -> (StatusCode, Value) {
    let app = create_app(state.clone());
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// All read-only GET endpoints return 200 on a fresh session.
#[tokio::test]
async fn get_endpoints_return_200() {
    let state = create_test_state();
    let endpoints = [
        "/health",
        "/api/v1/health",
        "/api/v1/status",
        "/api/v1/years",
        "/api/v1/months?year=2024",
        "/api/v1/dockets?year=2024&month=March",
        "/api/v1/filters",
        "/api/v1/counters",
        "/api/v1/operators",
        "/api/v1/scene",
        "/api/v1/fields",
        "/api/v1/wells",
        "/api/v1/board/matters?year=2024&month=March",
    ];
    for endpoint in endpoints {
        let (status, _) = get(&state, endpoint).await;
        assert_eq!(status, StatusCode::OK, "GET {endpoint}");
    }
}

#[tokio::test]
async fn status_reports_dataset_counts() {
    let state = create_test_state();
    let (status, body) = get(&state, "/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["wells"], 40);
    assert_eq!(body["data"]["plats"], 36);
    assert_eq!(body["data"]["fields"], 2);
    assert_eq!(body["data"]["board_matters"], 2);
}

/// The full selection cascade: year, month, docket, filters, scene.
#[tokio::test]
async fn selection_cascade_drives_the_scene() {
    let state = create_test_state();

    let (status, body) = post(&state, "/api/v1/selection/year", json!({"year": 2024})).await;
    assert_eq!(status, StatusCode::OK);
    let months = body["data"]["months"].as_array().unwrap().clone();
    assert!(!months.is_empty());

    let month = months[0].as_str().unwrap();
    let (status, body) = post(&state, "/api/v1/selection/month", json!({"month": month})).await;
    assert_eq!(status, StatusCode::OK);
    let dockets = body["data"]["dockets"].as_array().unwrap().clone();
    assert!(!dockets.is_empty());

    let docket = dockets[0].as_str().unwrap();
    let (status, body) = post(&state, "/api/v1/selection/docket", json!({"docket": docket})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"]["operators"].as_array().unwrap().is_empty());
    assert!(!body["data"]["wells"].as_array().unwrap().is_empty());

    // Scene now draws wells for the docket
    let (status, body) = get(&state, "/api/v1/scene").await;
    assert_eq!(status, StatusCode::OK);
    let layers = body["data"]["wells"].as_array().unwrap();
    assert_eq!(layers.len(), 3);
    let drilled_paths = layers[0]["paths"].as_array().unwrap();
    assert!(!drilled_paths.is_empty());
    // Default styling: thin black
    assert_eq!(drilled_paths[0]["color"], "#000000");

    // Toggle every type bucket on: every drawn path must leave the default
    // black styling and take its category color at highlight width
    let (status, _) = post(
        &state,
        "/api/v1/filters",
        json!({
            "mode": "by_type",
            "type_toggles": ["oil", "gas", "disposal", "injection", "dry_hole", "other"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&state, "/api/v1/scene").await;
    let layers = body["data"]["wells"].as_array().unwrap();
    for path in layers.iter().flat_map(|l| l["paths"].as_array().unwrap().iter()) {
        assert_ne!(path["color"], "#000000");
        assert!((path["width"].as_f64().unwrap() - 1.5).abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn counters_follow_the_docket() {
    let state = create_test_state();

    // No docket selected: all counters zero
    let (_, body) = get(&state, "/api/v1/counters").await;
    let by_type = body["data"]["by_type"].as_array().unwrap();
    assert!(by_type.iter().all(|e| e["count"] == 0));

    post(&state, "/api/v1/selection/year", json!({"year": 2024})).await;
    post(&state, "/api/v1/selection/month", json!({"month": "February"})).await;
    let (_, dockets) = get(&state, "/api/v1/dockets?year=2024&month=February").await;
    let docket = dockets["data"][0].as_str().unwrap();
    post(&state, "/api/v1/selection/docket", json!({"docket": docket})).await;

    let (_, body) = get(&state, "/api/v1/counters").await;
    let total: u64 = body["data"]["by_type"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["count"].as_u64().unwrap())
        .sum();
    assert!(total > 0);
    // Labels carry the counts
    let label = body["data"]["by_type"][0]["label"].as_str().unwrap();
    assert!(label.contains('('));
}

#[tokio::test]
async fn well_detail_and_production() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/v1/status").await;
    assert!(body["data"]["production_wells"].as_u64().unwrap() > 0);

    // Find a well with production through the pick list
    post(&state, "/api/v1/selection/year", json!({"year": 2024})).await;
    post(&state, "/api/v1/selection/month", json!({"month": "February"})).await;
    let (_, dockets) = get(&state, "/api/v1/dockets?year=2024&month=February").await;
    let docket = dockets["data"][0].as_str().unwrap();
    post(&state, "/api/v1/selection/docket", json!({"docket": docket})).await;

    let (_, wells) = get(&state, "/api/v1/wells").await;
    let api = wells["data"][0]["api_number"].as_str().unwrap().to_string();

    let (status, detail) = get(&state, &format!("/api/v1/well/{api}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["data"]["api_number"], api.as_str());
    assert!(detail["data"]["measured_depth"].as_f64().unwrap() > 0.0);

    let (status, series) = get(&state, &format!("/api/v1/well/{api}/production?phase=gas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(series["data"]["volume_unit"], "mcf");

    let (status, _) = get(&state, "/api/v1/well/0000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn board_matter_flow() {
    let state = create_test_state();

    let (status, body) = get(&state, "/api/v1/board/matters?year=2024&month=March").await;
    assert_eq!(status, StatusCode::OK);
    let matters = body["data"].as_array().unwrap();
    assert_eq!(matters.len(), 2);

    let cause = matters[0]["cause_number"].as_str().unwrap().to_string();
    let (status, detail) = get(&state, &format!("/api/v1/board/cause/{cause}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!detail["data"]["sections"].as_array().unwrap().is_empty());

    // Selecting by pick-list label resolves the cause number
    let label = matters[0]["label"].as_str().unwrap();
    let (status, body) = post(&state, "/api/v1/board/select", json!({"cause": label})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["selected_cause"], cause.as_str());

    // The scene now carries the highlight layer
    let (_, scene) = get(&state, "/api/v1/scene").await;
    assert_eq!(scene["data"]["board"]["cause_number"], cause.as_str());
    assert!(!scene["data"]["board"]["rings"].as_array().unwrap().is_empty());

    // Section search mode finds the same cause
    let section = detail["data"]["sections"][0].as_str().unwrap();
    let (status, body) = get(&state, &format!("/api/v1/board/section/{section}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m["cause_number"] == cause.as_str()));
}

#[tokio::test]
async fn invalid_selections_are_rejected() {
    let state = create_test_state();

    let (status, _) = post(&state, "/api/v1/selection/year", json!({"year": 1900})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Month before year is a bad request
    let (status, _) = post(&state, "/api/v1/selection/month", json!({"month": "March"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&state, "/api/v1/board/select", json!({"cause": "999-99"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Reload without a configured source
    let (status, _) = post(&state, "/api/v1/reload", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn envelope_shape_is_uniform() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/v1/years").await;
    assert!(body.get("data").is_some());
    assert_eq!(body["meta"]["version"], "1");

    let (_, body) = get(&state, "/api/v1/well/does-not-exist").await;
    assert!(body.get("error").is_some());
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
