//! Directional survey types
//!
//! A trajectory is the ordered polyline of survey stations for one well and
//! one citing kind. The same API number can carry an as-drilled and a
//! planned trajectory side by side; the working set decides which is drawn.

use serde::{Deserialize, Serialize};

// ============================================================================
// Citing kind
// ============================================================================

/// How a survey row was cited in the permit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryKind {
    /// Surveyed as drilled
    AsDrilled,
    /// Proposed path from the permit application
    Planned,
    /// Straight hole, no deviation survey
    Vertical,
}

impl TrajectoryKind {
    /// Citing types arrive in mixed case from the store.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "asdrilled" | "as drilled" => Some(Self::AsDrilled),
            "planned" => Some(Self::Planned),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AsDrilled => "asdrilled",
            Self::Planned => "planned",
            Self::Vertical => "vertical",
        }
    }
}

// ============================================================================
// Stations and trajectories
// ============================================================================

/// One survey station along a wellbore.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurveyStation {
    /// Measured depth along the bore (ft)
    pub md: f64,
    /// Projected easting (m)
    pub x: f64,
    /// Projected northing (m)
    pub y: f64,
    /// True vertical depth below the wellhead (ft)
    pub tvd: f64,
    /// Surface elevation minus TVD (ft); the 3D plot vertical axis
    pub true_elevation: f64,
    /// State plane easting (ft)
    pub spx: f64,
    /// State plane northing (ft)
    pub spy: f64,
}

/// Ordered survey stations for one well and citing kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    pub api_number: String,
    pub kind: TrajectoryKind,
    /// Stations sorted by measured depth, strictly ascending after ingest
    pub stations: Vec<SurveyStation>,
}

impl Trajectory {
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Surface hole location: the shallowest station.
    pub fn surface_location(&self) -> Option<&SurveyStation> {
        self.stations.first()
    }

    /// Total measured depth of the survey (ft).
    pub fn measured_depth(&self) -> f64 {
        self.stations.last().map_or(0.0, |s| s.md)
    }

    /// 2D polyline in projected metres.
    pub fn points_2d(&self) -> Vec<[f64; 2]> {
        self.stations.iter().map(|s| [s.x, s.y]).collect()
    }

    /// 3D polyline: projected X/Y plus true elevation.
    pub fn points_3d(&self) -> Vec<[f64; 3]> {
        self.stations
            .iter()
            .map(|s| [s.x, s.y, s.true_elevation])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(md: f64, x: f64, y: f64) -> SurveyStation {
        SurveyStation {
            md,
            x,
            y,
            tvd: md,
            true_elevation: 5000.0 - md,
            spx: x / 0.3048,
            spy: y / 0.3048,
        }
    }

    #[test]
    fn kind_parsing_is_case_insensitive() {
        assert_eq!(TrajectoryKind::from_label("AsDrilled"), Some(TrajectoryKind::AsDrilled));
        assert_eq!(TrajectoryKind::from_label("PLANNED"), Some(TrajectoryKind::Planned));
        assert_eq!(TrajectoryKind::from_label("vertical"), Some(TrajectoryKind::Vertical));
        assert_eq!(TrajectoryKind::from_label("sidetrack"), None);
    }

    #[test]
    fn surface_location_is_first_station() {
        let traj = Trajectory {
            api_number: "4301312345".to_string(),
            kind: TrajectoryKind::AsDrilled,
            stations: vec![station(0.0, 500.0, 600.0), station(100.0, 501.0, 601.0)],
        };
        let shl = traj.surface_location().unwrap();
        assert_eq!(shl.md, 0.0);
        assert_eq!(traj.measured_depth(), 100.0);
    }

    #[test]
    fn polyline_extraction() {
        let traj = Trajectory {
            api_number: "4301312345".to_string(),
            kind: TrajectoryKind::Planned,
            stations: vec![station(0.0, 1.0, 2.0), station(50.0, 3.0, 4.0)],
        };
        assert_eq!(traj.points_2d(), vec![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(traj.points_3d()[1][2], 4950.0);
    }
}
