//! Data access layer
//!
//! Loads the relational well store into an immutable in-memory
//! [`WellDataset`]: the docket working set, projected trajectories, land
//! survey layers, board matters, and production histories, with the docket
//! navigation index derived on top. A dataset is built once per load and
//! shared read-only; reloads swap the whole snapshot.

pub mod db;
pub mod kml;
pub mod normalize;
pub mod synthetic;

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::geo::UtmError;
use crate::types::{
    BoardMatter, FieldAdjacency, FieldBoundary, OwnershipRecord, PlatSection, ProductionRecord,
    Trajectory, WellRecord,
};

use db::{RawTables, WellDatabase};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("well database not found at {0}")]
    DatabaseMissing(PathBuf),
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("projection error: {0}")]
    Projection(#[from] UtmError),
    #[error("boundary file parse error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("boundary archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("no .kml entry inside {0}")]
    NoKmlEntry(PathBuf),
    #[error("malformed coordinate tuple '{0}'")]
    MalformedCoordinates(String),
}

// ============================================================================
// Dataset
// ============================================================================

/// Everything the service knows about the basin, loaded in one pass.
#[derive(Debug)]
pub struct WellDataset {
    /// Docket working rows, ordered by board year then calendar month
    pub wells: Vec<WellRecord>,
    /// Trajectories keyed by API number
    pub trajectories: HashMap<String, Vec<Trajectory>>,
    pub plats: Vec<PlatSection>,
    pub fields: Vec<FieldBoundary>,
    pub field_adjacency: Vec<FieldAdjacency>,
    pub ownership: Vec<OwnershipRecord>,
    pub board_matters: Vec<BoardMatter>,
    /// Monthly production keyed by API number, sorted by month
    pub production: HashMap<String, Vec<ProductionRecord>>,
    /// md5 digest of the source database file, empty for in-memory builds
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
}

impl WellDataset {
    /// Board years present in the working set, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.wells.iter().map(|w| w.board_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Docket months for a year, in calendar order.
    pub fn months_for(&self, year: i32) -> Vec<String> {
        let mut months: Vec<&str> = self
            .wells
            .iter()
            .filter(|w| w.board_year == year)
            .map(|w| w.docket_month.as_str())
            .collect();
        months.sort_by_key(|m| normalize::month_number(m).unwrap_or(13));
        months.dedup();
        months.into_iter().map(String::from).collect()
    }

    /// Dockets heard in a given year and month.
    pub fn dockets_for(&self, year: i32, month: &str) -> Vec<String> {
        let mut dockets: Vec<&str> = self
            .wells
            .iter()
            .filter(|w| w.board_year == year && w.docket_month == month)
            .map(|w| w.board_docket.as_str())
            .collect();
        dockets.sort_unstable();
        dockets.dedup();
        dockets.into_iter().map(String::from).collect()
    }

    /// Working rows cited on one docket.
    pub fn wells_for_docket(&self, year: i32, month: &str, docket: &str) -> Vec<&WellRecord> {
        self.wells
            .iter()
            .filter(|w| w.matches_docket(year, month, docket))
            .collect()
    }

    /// Look up a well by API number (first docket citation wins).
    pub fn well(&self, api_number: &str) -> Option<&WellRecord> {
        self.wells.iter().find(|w| w.api_number == api_number)
    }

    /// Board matter by cause number.
    pub fn board_matter(&self, cause_number: &str) -> Option<&BoardMatter> {
        self.board_matters
            .iter()
            .find(|m| m.cause_number == cause_number)
    }

    /// Plat sections matching a set of concentration codes.
    pub fn plats_for_sections(&self, sections: &[String]) -> Vec<&PlatSection> {
        self.plats
            .iter()
            .filter(|p| sections.iter().any(|s| s == &p.conc))
            .collect()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Tunables for dataset assembly, filled from config at the call site.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub vertical_jitter_m: f64,
    pub adjacency_buffer_m: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            vertical_jitter_m: 1e-3,
            adjacency_buffer_m: 10.0,
        }
    }
}

/// Load the full dataset from a SQLite well database.
///
/// An optional KML/KMZ boundary file overrides the `Field` table layer
/// when it parses; a broken boundary file logs a warning and the store's
/// own boundaries are kept.
pub fn load_dataset(
    db_path: &Path,
    boundary_file: Option<&Path>,
    options: LoadOptions,
) -> Result<WellDataset, IngestError> {
    let database = WellDatabase::open(db_path)?;
    let tables = database.read_all()?;
    let fingerprint = fingerprint_file(db_path)?;

    let mut dataset = build_dataset(tables, options)?;
    dataset.fingerprint = fingerprint;

    if let Some(path) = boundary_file {
        match kml::load_boundary_file(path) {
            Ok(boundaries) if !boundaries.is_empty() => {
                info!(count = boundaries.len(), path = %path.display(), "Field boundaries replaced from boundary file");
                dataset.field_adjacency = adjacency_for(&boundaries, options.adjacency_buffer_m);
                dataset.fields = boundaries;
            }
            Ok(_) => warn!(path = %path.display(), "Boundary file contained no polygons, keeping store boundaries"),
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to load boundary file, keeping store boundaries"),
        }
    }

    info!(
        wells = dataset.wells.len(),
        trajectories = dataset.trajectories.len(),
        plats = dataset.plats.len(),
        fields = dataset.fields.len(),
        board_matters = dataset.board_matters.len(),
        fingerprint = %dataset.fingerprint,
        "Well dataset loaded"
    );
    Ok(dataset)
}

/// Assemble a dataset from raw tables; the synthetic path and tests enter
/// here without touching disk.
pub fn build_dataset(tables: RawTables, options: LoadOptions) -> Result<WellDataset, IngestError> {
    let today = Utc::now().date_naive();
    let wells = normalize::normalize_wells(tables.wells, today);
    let trajectories =
        normalize::build_trajectories(tables.surveys, &wells, options.vertical_jitter_m);
    let plats = normalize::project_plats(tables.plats)?;
    let (fields, field_adjacency) =
        normalize::build_fields(tables.fields, options.adjacency_buffer_m);
    let ownership = normalize::build_ownership(tables.owners);
    let board_matters = normalize::build_board_matters(tables.board, tables.board_links);
    let production = normalize::group_production(tables.production);

    Ok(WellDataset {
        wells,
        trajectories,
        plats,
        fields,
        field_adjacency,
        ownership,
        board_matters,
        production,
        fingerprint: String::new(),
        loaded_at: Utc::now(),
    })
}

fn adjacency_for(fields: &[FieldBoundary], buffer: f64) -> Vec<FieldAdjacency> {
    let mut adjacency = Vec::new();
    for a in fields {
        for b in fields {
            if a.name != b.name && crate::geo::polygons_adjacent(&a.ring, &b.ring, buffer) {
                adjacency.push(FieldAdjacency {
                    field: a.name.clone(),
                    adjacent: b.name.clone(),
                });
            }
        }
    }
    adjacency
}

/// md5 digest of the source database, for provenance logging and /status.
fn fingerprint_file(path: &Path) -> Result<String, IngestError> {
    let bytes = std::fs::read(path)?;
    Ok(format!("{:x}", md5::compute(&bytes)))
}
