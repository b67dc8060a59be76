//! wellscope - Well Data Visualization Service
//!
//! Serves filtered, styled well scene geometry from a relational well
//! store to a dashboard client.
//!
//! # Usage
//!
//! ```bash
//! # Serve the dashboard API from ./data/wells.db
//! wellscope
//!
//! # Serve a specific database with updated field boundaries
//! wellscope --db /srv/wells.db --boundaries fields.kmz
//!
//! # Generate a synthetic demo basin, then serve it
//! wellscope demo --out ./data/wells.db
//! wellscope --db ./data/wells.db
//! ```
//!
//! # Environment Variables
//!
//! - `WELLSCOPE_CONFIG`: path to a TOML config file
//! - `WELLSCOPE_CORS_ORIGINS`: comma-separated dev origins
//! - `RUST_LOG`: logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use wellscope::api::{create_app, DashboardState, ReloadSource};
use wellscope::config;
use wellscope::ingest::{self, synthetic, LoadOptions};
use wellscope::scene::SceneStyle;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "wellscope")]
#[command(about = "Well data visualization service")]
#[command(version)]
struct CliArgs {
    /// Path to the SQLite well database (overrides config)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// KML/KMZ file with updated field boundaries (overrides config)
    #[arg(long, value_name = "PATH")]
    boundaries: Option<PathBuf>,

    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Generate a synthetic demo basin database
    Demo {
        /// Output database path
        #[arg(long, default_value = "./data/wells.db")]
        out: PathBuf,
        /// Number of wells to generate
        #[arg(long, default_value = "40")]
        wells: usize,
        /// Random seed
        #[arg(long, default_value = "47")]
        seed: u64,
    },

    /// Parse a KML/KMZ boundary file and print the fields it contains
    InspectBoundaries {
        /// Path to the .kml or .kmz file
        path: PathBuf,
    },
}

// ============================================================================
// Subcommands
// ============================================================================

fn run_demo(out: &Path, wells: usize, seed: u64) -> Result<()> {
    let tables = synthetic::generate(&synthetic::SyntheticConfig {
        well_count: wells,
        seed,
        board_year: 2024,
    });
    synthetic::write_database(&tables, out)
        .with_context(|| format!("failed to write demo database to {}", out.display()))?;
    info!(
        wells = tables.wells.len(),
        surveys = tables.surveys.len(),
        path = %out.display(),
        "Demo basin written"
    );
    Ok(())
}

fn run_inspect_boundaries(path: &Path) -> Result<()> {
    let boundaries = ingest::kml::load_boundary_file(path)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(count = boundaries.len(), "Boundary file parsed");
    for field in &boundaries {
        info!(
            name = %field.name,
            vertices = field.ring.len(),
            centroid_e = %format!("{:.1}", field.centroid[0]),
            centroid_n = %format!("{:.1}", field.centroid[1]),
            "field"
        );
    }
    Ok(())
}

// ============================================================================
// Server
// ============================================================================

async fn run_server(args: CliArgs) -> Result<()> {
    let cfg = config::get();

    let db_path = args.db.unwrap_or_else(|| cfg.data.database.clone());
    let boundary_file = args.boundaries.or_else(|| cfg.data.boundary_file.clone());
    let server_addr = args.addr.unwrap_or_else(|| cfg.server.addr.clone());

    let options = LoadOptions {
        vertical_jitter_m: cfg.display.vertical_jitter_m,
        adjacency_buffer_m: cfg.projection.adjacency_buffer_m,
    };
    let style = SceneStyle {
        base_width: cfg.display.base_line_width,
        highlight_width: cfg.display.highlight_line_width,
        field_label_size: cfg.display.field_label_size,
    };

    info!(path = %db_path.display(), "Loading well dataset...");
    let dataset = {
        let db_path = db_path.clone();
        let boundary_file = boundary_file.clone();
        tokio::task::spawn_blocking(move || {
            ingest::load_dataset(&db_path, boundary_file.as_deref(), options)
        })
        .await
        .context("dataset load task failed")?
        .context("failed to load well dataset")?
    };

    let state = DashboardState::new(
        dataset,
        Some(ReloadSource {
            db_path,
            boundary_file,
            options,
        }),
        style,
    );
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("failed to bind {server_addr}"))?;
    info!("Dashboard API listening on http://{server_addr}/api/v1");

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    let mut tasks = JoinSet::new();
    let server_token = cancel_token.clone();
    tasks.spawn(async move {
        let shutdown = server_token.clone();
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await;
        ("HttpServer", result)
    });

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((name, Ok(()))) => info!(task = name, "Task finished"),
            Ok((name, Err(e))) => {
                error!(task = name, error = %e, "Task failed, shutting down");
                cancel_token.cancel();
            }
            Err(e) => {
                error!(error = %e, "Task panicked, shutting down");
                cancel_token.cancel();
            }
        }
    }

    info!("wellscope shutdown complete");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = CliArgs::parse();

    // Load service configuration
    let service_config = config::ServiceConfig::load();
    for warning in config::validate(&service_config) {
        warn!(field = %warning.field, "{warning}");
    }
    config::init(service_config);

    match args.command.take() {
        Some(SubCommand::Demo { out, wells, seed }) => run_demo(&out, wells, seed),
        Some(SubCommand::InspectBoundaries { path }) => run_inspect_boundaries(&path),
        None => run_server(args).await,
    }
}
