//! Wellscope: Well Data Visualization Service
//!
//! Headless analysis service for oil and gas well dockets.
//!
//! ## Architecture
//!
//! - **Ingest**: reads the relational well store (wells, surveys, plats,
//!   fields, ownership, board matters, production) into one snapshot
//! - **Geo**: WGS84/UTM projection and the polygon math under the scene
//! - **Filter**: docket cascade, status/type toggles, age windows
//! - **Scene**: styled 2D/3D render lists the dashboard draws
//! - **Board / Production**: cause cross-referencing and monthly series
//! - **API**: axum endpoints mirroring the interactive session

pub mod config;
pub mod types;
pub mod geo;
pub mod ingest;
pub mod filter;
pub mod scene;
pub mod production;
pub mod board;
pub mod session;
pub mod api;

// Re-export the core dataset handle
pub use ingest::{load_dataset, LoadOptions, WellDataset};

// Re-export commonly used types
pub use types::{
    BoardMatter, FieldBoundary, PlatSection, ProductionPhase, StatusBucket, SurveyStation,
    Trajectory, TrajectoryKind, TypeBucket, WellRecord, WellStatus, WellType,
};

// Re-export the interaction surface
pub use api::{create_app, DashboardState};
pub use filter::FilterState;
pub use scene::{Scene, SceneStyle};
pub use session::SessionState;
