//! API handlers for the well visualization dashboard
//!
//! Handlers read the current dataset snapshot (arc-swap) and the shared
//! session state (async RwLock). Selection endpoints mutate the session
//! and return what repopulates, mirroring the desktop cascade; `/scene`
//! rebuilds the render list from the current state on every call.

use arc_swap::ArcSwap;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::board;
use crate::filter::{counters, FilterState};
use crate::ingest::{self, LoadOptions, WellDataset};
use crate::production;
use crate::scene::{self, SceneStyle};
use crate::session::SessionState;
use crate::types::ProductionPhase;

use super::envelope::{ApiErrorResponse, ApiResponse};

// ============================================================================
// Shared State
// ============================================================================

/// Where `/reload` reloads from.
#[derive(Debug, Clone)]
pub struct ReloadSource {
    pub db_path: PathBuf,
    pub boundary_file: Option<PathBuf>,
    pub options: LoadOptions,
}

/// State shared by every handler.
#[derive(Clone)]
pub struct DashboardState {
    /// Current dataset snapshot; swapped wholesale on reload
    pub dataset: Arc<ArcSwap<WellDataset>>,
    pub session: Arc<RwLock<SessionState>>,
    /// Absent for in-memory datasets (demo mode without a db file)
    pub reload: Option<Arc<ReloadSource>>,
    pub style: SceneStyle,
}

impl DashboardState {
    pub fn new(dataset: WellDataset, reload: Option<ReloadSource>, style: SceneStyle) -> Self {
        Self {
            dataset: Arc::new(ArcSwap::from_pointee(dataset)),
            session: Arc::new(RwLock::new(SessionState::default())),
            reload: reload.map(Arc::new),
            style,
        }
    }
}

// ============================================================================
// Health and Status
// ============================================================================

pub async fn get_health() -> Response {
    ApiResponse::ok(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Serialize)]
pub struct StatusPayload {
    pub wells: usize,
    pub trajectories: usize,
    pub plats: usize,
    pub fields: usize,
    pub board_matters: usize,
    pub production_wells: usize,
    pub fingerprint: String,
    pub loaded_at: String,
}

/// GET /status — dataset provenance and layer counts.
pub async fn get_status(State(state): State<DashboardState>) -> Response {
    let dataset = state.dataset.load();
    ApiResponse::ok(StatusPayload {
        wells: dataset.wells.len(),
        trajectories: dataset.trajectories.len(),
        plats: dataset.plats.len(),
        fields: dataset.fields.len(),
        board_matters: dataset.board_matters.len(),
        production_wells: dataset.production.len(),
        fingerprint: dataset.fingerprint.clone(),
        loaded_at: dataset.loaded_at.to_rfc3339(),
    })
}

// ============================================================================
// Docket Navigation
// ============================================================================

pub async fn get_years(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(state.dataset.load().years())
}

#[derive(Debug, Deserialize)]
pub struct MonthsQuery {
    pub year: i32,
}

pub async fn get_months(
    State(state): State<DashboardState>,
    Query(query): Query<MonthsQuery>,
) -> Response {
    ApiResponse::ok(state.dataset.load().months_for(query.year))
}

#[derive(Debug, Deserialize)]
pub struct DocketsQuery {
    pub year: i32,
    pub month: String,
}

pub async fn get_dockets(
    State(state): State<DashboardState>,
    Query(query): Query<DocketsQuery>,
) -> Response {
    ApiResponse::ok(state.dataset.load().dockets_for(query.year, &query.month))
}

// ============================================================================
// Selection Cascade
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectYearRequest {
    pub year: i32,
}

pub async fn select_year(
    State(state): State<DashboardState>,
    axum::Json(req): axum::Json<SelectYearRequest>,
) -> Response {
    let dataset = state.dataset.load();
    if !dataset.years().contains(&req.year) {
        return ApiErrorResponse::not_found(format!("no dockets in board year {}", req.year));
    }
    let mut session = state.session.write().await;
    ApiResponse::ok(session.select_year(&dataset, req.year))
}

#[derive(Debug, Deserialize)]
pub struct SelectMonthRequest {
    pub month: String,
}

pub async fn select_month(
    State(state): State<DashboardState>,
    axum::Json(req): axum::Json<SelectMonthRequest>,
) -> Response {
    let dataset = state.dataset.load();
    let mut session = state.session.write().await;
    let Some(year) = session.filter.year else {
        return ApiErrorResponse::bad_request("select a year first");
    };
    if !dataset.months_for(year).contains(&req.month) {
        return ApiErrorResponse::not_found(format!("no {} docket in {}", req.month, year));
    }
    ApiResponse::ok(session.select_month(&dataset, req.month))
}

#[derive(Debug, Deserialize)]
pub struct SelectDocketRequest {
    pub docket: String,
}

pub async fn select_docket(
    State(state): State<DashboardState>,
    axum::Json(req): axum::Json<SelectDocketRequest>,
) -> Response {
    let dataset = state.dataset.load();
    let mut session = state.session.write().await;
    let (Some(year), Some(month)) = (session.filter.year, session.filter.month.clone()) else {
        return ApiErrorResponse::bad_request("select a year and month first");
    };
    if !dataset.dockets_for(year, &month).contains(&req.docket) {
        return ApiErrorResponse::not_found(format!("docket '{}' not on {month} {year}", req.docket));
    }
    ApiResponse::ok(session.select_docket(&dataset, req.docket))
}

#[derive(Debug, Deserialize)]
pub struct SelectWellRequest {
    /// API number to emphasize, or null to clear
    pub api_number: Option<String>,
}

pub async fn select_well(
    State(state): State<DashboardState>,
    axum::Json(req): axum::Json<SelectWellRequest>,
) -> Response {
    let dataset = state.dataset.load();
    if let Some(api) = &req.api_number {
        if dataset.well(api).is_none() {
            return ApiErrorResponse::not_found(format!("unknown well {api}"));
        }
    }
    let mut session = state.session.write().await;
    session.filter.selected_well = req.api_number;
    ApiResponse::ok(session.filter.clone())
}

// ============================================================================
// Filters and Counters
// ============================================================================

pub async fn get_filters(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(state.session.read().await.filter.clone())
}

/// POST /filters — replace toggles; docket cascade fields are ignored.
pub async fn update_filters(
    State(state): State<DashboardState>,
    axum::Json(filters): axum::Json<FilterState>,
) -> Response {
    let mut session = state.session.write().await;
    session.apply_filters(filters);
    ApiResponse::ok(session.filter.clone())
}

pub async fn get_counters(State(state): State<DashboardState>) -> Response {
    let dataset = state.dataset.load();
    let session = state.session.read().await;
    let wells = session.docket_wells(&dataset);
    ApiResponse::ok(counters::count(&wells))
}

pub async fn get_operators(State(state): State<DashboardState>) -> Response {
    let dataset = state.dataset.load();
    let session = state.session.read().await;
    ApiResponse::ok(session.docket_operators(&dataset))
}

/// GET /fields — field boundaries with their adjacency pairs.
pub async fn get_fields(State(state): State<DashboardState>) -> Response {
    let dataset = state.dataset.load();
    ApiResponse::ok(serde_json::json!({
        "boundaries": &dataset.fields,
        "adjacency": &dataset.field_adjacency,
    }))
}

// ============================================================================
// Scene
// ============================================================================

pub async fn get_scene(State(state): State<DashboardState>) -> Response {
    let dataset = state.dataset.load();
    let session = state.session.read().await;
    let scene = scene::build(
        &dataset,
        &session.filter,
        session.selected_cause.as_deref(),
        state.style,
    );
    ApiResponse::ok(scene)
}

// ============================================================================
// Wells
// ============================================================================

#[derive(Debug, Serialize)]
pub struct WellListEntry {
    pub api_number: String,
    pub display_name: String,
    pub operator: String,
    /// True when a board matter on this docket cites the well's section;
    /// clients bold these rows
    pub bold: bool,
}

/// GET /wells — the docket pick list with board-matter bold flags.
pub async fn get_wells(State(state): State<DashboardState>) -> Response {
    let dataset = state.dataset.load();
    let session = state.session.read().await;
    let docket_wells = session.docket_wells(&dataset);

    let bold_apis: Vec<String> = match (&session.filter.year, &session.filter.month) {
        (Some(year), Some(month)) => board::matters_for_docket(&dataset, *year, month)
            .into_iter()
            .flat_map(|m| board::cited_wells(&dataset, m))
            .collect(),
        _ => Vec::new(),
    };

    let mut entries: Vec<WellListEntry> = docket_wells
        .iter()
        .map(|w| WellListEntry {
            api_number: w.api_number.clone(),
            display_name: w.display_name.clone(),
            operator: w.operator.clone(),
            bold: bold_apis.contains(&w.api_number),
        })
        .collect();
    entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    entries.dedup_by(|a, b| a.api_number == b.api_number);
    ApiResponse::ok(entries)
}

#[derive(Debug, Serialize)]
pub struct WellDetail {
    #[serde(flatten)]
    pub record: crate::types::WellRecord,
    pub trajectory_kinds: Vec<crate::types::TrajectoryKind>,
    pub measured_depth: f64,
    pub has_production: bool,
}

pub async fn get_well(
    State(state): State<DashboardState>,
    Path(api_number): Path<String>,
) -> Response {
    let dataset = state.dataset.load();
    let Some(record) = dataset.well(&api_number) else {
        return ApiErrorResponse::not_found(format!("unknown well {api_number}"));
    };
    let trajectories = dataset
        .trajectories
        .get(&api_number)
        .map(Vec::as_slice)
        .unwrap_or_default();
    ApiResponse::ok(WellDetail {
        record: record.clone(),
        trajectory_kinds: trajectories.iter().map(|t| t.kind).collect(),
        measured_depth: trajectories
            .iter()
            .map(crate::types::Trajectory::measured_depth)
            .fold(0.0, f64::max),
        has_production: dataset.production.contains_key(&api_number),
    })
}

#[derive(Debug, Deserialize)]
pub struct ProductionQuery {
    /// `oil` (default) or `gas`
    pub phase: Option<ProductionPhase>,
}

pub async fn get_well_production(
    State(state): State<DashboardState>,
    Path(api_number): Path<String>,
    Query(query): Query<ProductionQuery>,
) -> Response {
    let dataset = state.dataset.load();
    if dataset.well(&api_number).is_none() {
        return ApiErrorResponse::not_found(format!("unknown well {api_number}"));
    }
    let phase = query.phase.unwrap_or(ProductionPhase::Oil);
    ApiResponse::ok(production::series_for(&dataset, &api_number, phase))
}

// ============================================================================
// Board Matters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BoardMattersQuery {
    pub year: i32,
    pub month: String,
}

pub async fn get_board_matters(
    State(state): State<DashboardState>,
    Query(query): Query<BoardMattersQuery>,
) -> Response {
    let dataset = state.dataset.load();
    let summaries: Vec<board::BoardMatterSummary> =
        board::matters_for_docket(&dataset, query.year, &query.month)
            .into_iter()
            .map(board::BoardMatterSummary::from)
            .collect();
    ApiResponse::ok(summaries)
}

/// GET /board/section/:conc — section-search mode.
pub async fn get_board_matters_for_section(
    State(state): State<DashboardState>,
    Path(conc): Path<String>,
) -> Response {
    let dataset = state.dataset.load();
    let summaries: Vec<board::BoardMatterSummary> = board::matters_for_section(&dataset, &conc)
        .into_iter()
        .map(board::BoardMatterSummary::from)
        .collect();
    ApiResponse::ok(summaries)
}

pub async fn get_board_matter(
    State(state): State<DashboardState>,
    Path(cause_number): Path<String>,
) -> Response {
    let dataset = state.dataset.load();
    match board::matter_detail(&dataset, &cause_number) {
        Some(detail) => ApiResponse::ok(detail),
        None => ApiErrorResponse::not_found(format!("unknown cause {cause_number}")),
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectCauseRequest {
    /// Cause to highlight, or null to clear. Accepts a bare cause number
    /// or a pick-list label like "Cause No. 139-32 (2024)".
    pub cause: Option<String>,
}

pub async fn select_board_matter(
    State(state): State<DashboardState>,
    axum::Json(req): axum::Json<SelectCauseRequest>,
) -> Response {
    let dataset = state.dataset.load();
    let resolved = match req.cause {
        None => None,
        Some(raw) => {
            let cause = board::extract_cause_number(&raw).unwrap_or(raw);
            if dataset.board_matter(&cause).is_none() {
                return ApiErrorResponse::not_found(format!("unknown cause {cause}"));
            }
            Some(cause)
        }
    };
    let mut session = state.session.write().await;
    session.selected_cause = resolved;
    ApiResponse::ok(serde_json::json!({ "selected_cause": session.selected_cause }))
}

// ============================================================================
// Reload
// ============================================================================

/// POST /reload — reload the dataset from the store and swap it in
/// atomically. In-flight requests keep their old snapshot.
pub async fn reload_dataset(State(state): State<DashboardState>) -> Response {
    let Some(source) = state.reload.clone() else {
        return ApiErrorResponse::bad_request("no reloadable data source configured");
    };

    let result = tokio::task::spawn_blocking(move || {
        ingest::load_dataset(&source.db_path, source.boundary_file.as_deref(), source.options)
    })
    .await;

    match result {
        Ok(Ok(dataset)) => {
            let fingerprint = dataset.fingerprint.clone();
            let wells = dataset.wells.len();
            state.dataset.store(Arc::new(dataset));
            info!(wells, fingerprint = %fingerprint, "Dataset reloaded");
            ApiResponse::ok(serde_json::json!({
                "wells": wells,
                "fingerprint": fingerprint,
            }))
        }
        Ok(Err(e)) => {
            error!(error = %e, "Dataset reload failed");
            ApiErrorResponse::internal(format!("reload failed: {e}"))
        }
        Err(e) => {
            error!(error = %e, "Reload task panicked");
            ApiErrorResponse::internal("reload task failed")
        }
    }
}
