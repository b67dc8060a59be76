//! Filtering layer
//!
//! Holds the user's current selections (docket cascade, operator set,
//! status/type toggles, age window) and partitions the docket working set
//! into the three drawn categories: drilled, planned, and currently
//! drilling wells.

pub mod counters;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ingest::WellDataset;
use crate::types::{StatusBucket, Trajectory, TrajectoryKind, TypeBucket, WellRecord, WellStatus};

// ============================================================================
// Filter State
// ============================================================================

/// Well age windows offered by the filter panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeWindow {
    OneYear,
    FiveYears,
    TenYears,
    #[default]
    All,
}

impl AgeWindow {
    /// Upper bound in months.
    pub fn max_months(&self) -> u32 {
        match self {
            Self::OneYear => 12,
            Self::FiveYears => 60,
            Self::TenYears => 120,
            Self::All => u32::MAX,
        }
    }
}

/// Which toggle family drives highlight styling. The two families are
/// mutually exclusive, matching the original radio buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    #[default]
    ByType,
    ByStatus,
}

/// The user's current selections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Docket cascade: year, then month, then docket
    pub year: Option<i32>,
    pub month: Option<String>,
    pub docket: Option<String>,

    /// Selected operators; empty means all operators
    #[serde(default)]
    pub operators: BTreeSet<String>,

    /// Active type toggles, used when `mode` is `ByType`
    #[serde(default)]
    pub type_toggles: BTreeSet<TypeBucket>,

    /// Active status toggles, used when `mode` is `ByStatus`
    #[serde(default)]
    pub status_toggles: BTreeSet<StatusBucket>,

    #[serde(default)]
    pub mode: HighlightMode,

    #[serde(default)]
    pub age_window: AgeWindow,

    #[serde(default)]
    pub show_field_labels: bool,
    #[serde(default)]
    pub show_section_labels: bool,

    /// Emphasized well, if any
    #[serde(default)]
    pub selected_well: Option<String>,
}

impl FilterState {
    /// True when the docket cascade is fully selected.
    pub fn has_docket(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.docket.is_some()
    }

    /// Does a well pass the operator and age filters?
    pub fn admits(&self, well: &WellRecord) -> bool {
        if !self.operators.is_empty() && !self.operators.contains(&well.operator) {
            return false;
        }
        well.age_months <= self.age_window.max_months()
    }

    /// Is this well's category toggled on for highlighting?
    pub fn highlights(&self, well: &WellRecord) -> bool {
        match self.mode {
            HighlightMode::ByType => self.type_toggles.contains(&well.well_type.bucket()),
            HighlightMode::ByStatus => self.status_toggles.contains(&well.status.bucket()),
        }
    }
}

// ============================================================================
// Category partition
// ============================================================================

/// Drawn well categories. A vertical-only well belongs to both the drilled
/// and planned categories; a drilling well additionally appears in the
/// currently-drilling overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellCategory {
    Drilled,
    Planned,
    CurrentlyDrilling,
}

impl WellCategory {
    pub const ALL: [WellCategory; 3] = [
        WellCategory::Drilled,
        WellCategory::Planned,
        WellCategory::CurrentlyDrilling,
    ];
}

/// One well admitted into a category, with the trajectory that category
/// draws.
#[derive(Debug, Clone)]
pub struct CategorizedWell<'a> {
    pub record: &'a WellRecord,
    pub trajectory: &'a Trajectory,
}

/// The docket working set split into drawable categories.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub drilled: Vec<CategorizedWell<'a>>,
    pub planned: Vec<CategorizedWell<'a>>,
    pub drilling: Vec<CategorizedWell<'a>>,
}

impl<'a> Partition<'a> {
    pub fn category(&self, category: WellCategory) -> &[CategorizedWell<'a>] {
        match category {
            WellCategory::Drilled => &self.drilled,
            WellCategory::Planned => &self.planned,
            WellCategory::CurrentlyDrilling => &self.drilling,
        }
    }
}

/// Pick the trajectory a category draws for a well.
fn trajectory_for<'a>(
    trajectories: &'a [Trajectory],
    preferred: &[TrajectoryKind],
) -> Option<&'a Trajectory> {
    preferred
        .iter()
        .find_map(|kind| trajectories.iter().find(|t| t.kind == *kind && !t.is_empty()))
}

/// Partition the admitted docket wells into drawn categories.
///
/// Drilled draws the as-drilled survey, falling back to vertical; planned
/// draws the permitted path, falling back to vertical; the drilling
/// overlay covers wells whose status is Drilling, drawing whatever survey
/// exists.
pub fn partition<'a>(
    dataset: &'a WellDataset,
    wells: &[&'a WellRecord],
    filter: &FilterState,
) -> Partition<'a> {
    let mut result = Partition::default();

    for &record in wells {
        if !filter.admits(record) {
            continue;
        }
        let Some(trajectories) = dataset.trajectories.get(&record.api_number) else {
            continue;
        };

        if let Some(traj) =
            trajectory_for(trajectories, &[TrajectoryKind::AsDrilled, TrajectoryKind::Vertical])
        {
            result.drilled.push(CategorizedWell { record, trajectory: traj });
        }
        if let Some(traj) =
            trajectory_for(trajectories, &[TrajectoryKind::Planned, TrajectoryKind::Vertical])
        {
            result.planned.push(CategorizedWell { record, trajectory: traj });
        }
        if record.status == WellStatus::Drilling {
            if let Some(traj) = trajectory_for(
                trajectories,
                &[
                    TrajectoryKind::AsDrilled,
                    TrajectoryKind::Planned,
                    TrajectoryKind::Vertical,
                ],
            ) {
                result.drilling.push(CategorizedWell { record, trajectory: traj });
            }
        }
    }

    result
}
