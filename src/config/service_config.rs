//! Deployment configuration as operator-tunable TOML values
//!
//! Each struct implements `Default` with the values the service shipped
//! with, so behavior is unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a wellscope deployment.
///
/// Load with `ServiceConfig::load()` which searches:
/// 1. `$WELLSCOPE_CONFIG` env var
/// 2. `./wellscope.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Data source locations
    #[serde(default)]
    pub data: DataConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Projection and adjacency tuning
    #[serde(default)]
    pub projection: ProjectionConfig,

    /// Scene styling knobs
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ServiceConfig {
    /// Load configuration using the standard search order.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("WELLSCOPE_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from WELLSCOPE_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from WELLSCOPE_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WELLSCOPE_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("wellscope.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./wellscope.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./wellscope.toml, using defaults");
                }
            }
        }

        info!("No config file found, using built-in defaults");
        Self::default()
    }

    /// Load and parse a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }
}

/// Errors from explicit config file loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Sections
// ============================================================================

/// Where the well database and boundary files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the SQLite well database
    pub database: PathBuf,
    /// Optional KML/KMZ file with updated field boundaries
    #[serde(default)]
    pub boundary_file: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("./data/wells.db"),
            boundary_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the dashboard API
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Projection defaults for the basin the data set covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// UTM zone the plat coordinates are projected into
    pub utm_zone: u8,
    /// UTM band letter
    pub utm_band: char,
    /// Field adjacency buffer in metres
    pub adjacency_buffer_m: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            utm_zone: 12,
            utm_band: 'T',
            adjacency_buffer_m: 10.0,
        }
    }
}

/// Styling knobs applied during scene assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Width of well paths not matched by any active filter
    pub base_line_width: f64,
    /// Width of highlighted well paths
    pub highlight_line_width: f64,
    /// Text size for field labels at boundary centroids
    pub field_label_size: f64,
    /// Jitter (m) applied per station to vertical wells so their polyline
    /// is never degenerate
    pub vertical_jitter_m: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            base_line_width: 0.5,
            highlight_line_width: 1.5,
            field_label_size: 75.0,
            vertical_jitter_m: 1e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.projection.utm_zone, 12);
        assert_eq!(config.projection.utm_band, 'T');
        assert!((config.projection.adjacency_buffer_m - 10.0).abs() < f64::EPSILON);
        assert!((config.display.base_line_width - 0.5).abs() < f64::EPSILON);
        assert!((config.display.highlight_line_width - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_partial_toml() {
        let raw = r#"
            [server]
            addr = "127.0.0.1:9000"

            [projection]
            utm_zone = 13
            utm_band = "S"
            adjacency_buffer_m = 25.0
        "#;
        let config: ServiceConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.projection.utm_zone, 13);
        // Unspecified sections keep their defaults
        assert_eq!(config.data.database, PathBuf::from("./data/wells.db"));
    }
}
