//! Well identity, status, and type vocabularies

use serde::{Deserialize, Serialize};

// ============================================================================
// Well Status
// ============================================================================

/// Current regulatory/operational status of a well.
///
/// The long tail of permit-administration statuses collapses into the
/// `Other` display bucket for counters and styling; see [`StatusBucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellStatus {
    Producing,
    ShutIn,
    PluggedAbandoned,
    Drilling,
    LocationAbandoned,
    ReturnedApd,
    ApprovedPermit,
    Active,
    DrillingSuspended,
    NewPermit,
    Inactive,
    TemporarilyAbandoned,
    TestOrMonitor,
    Unknown,
}

impl WellStatus {
    /// Parse the status labels used by the well database.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Producing" => Self::Producing,
            "Shut-in" | "Shut In" => Self::ShutIn,
            "Plugged & Abandoned" | "Plugged and Abandoned" => Self::PluggedAbandoned,
            "Drilling" => Self::Drilling,
            "Location Abandoned - APD rescinded" => Self::LocationAbandoned,
            "Returned APD (Unapproved)" => Self::ReturnedApd,
            "Approved Permit" => Self::ApprovedPermit,
            "Active" => Self::Active,
            "Drilling Operations Suspended" => Self::DrillingSuspended,
            "New Permit" => Self::NewPermit,
            "Inactive" => Self::Inactive,
            "Temporarily-abandoned" | "Temporarily Abandoned" => Self::TemporarilyAbandoned,
            "Test Well or Monitor Well" => Self::TestOrMonitor,
            _ => Self::Unknown,
        }
    }

    /// Database label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Producing => "Producing",
            Self::ShutIn => "Shut-in",
            Self::PluggedAbandoned => "Plugged & Abandoned",
            Self::Drilling => "Drilling",
            Self::LocationAbandoned => "Location Abandoned - APD rescinded",
            Self::ReturnedApd => "Returned APD (Unapproved)",
            Self::ApprovedPermit => "Approved Permit",
            Self::Active => "Active",
            Self::DrillingSuspended => "Drilling Operations Suspended",
            Self::NewPermit => "New Permit",
            Self::Inactive => "Inactive",
            Self::TemporarilyAbandoned => "Temporarily-abandoned",
            Self::TestOrMonitor => "Test Well or Monitor Well",
            Self::Unknown => "Unknown",
        }
    }

    /// Display bucket used for counters and highlight styling.
    pub fn bucket(&self) -> StatusBucket {
        match self {
            Self::Producing => StatusBucket::Producing,
            Self::ShutIn => StatusBucket::ShutIn,
            Self::PluggedAbandoned => StatusBucket::PluggedAbandoned,
            Self::Drilling => StatusBucket::Drilling,
            _ => StatusBucket::Other,
        }
    }
}

impl std::fmt::Display for WellStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse status grouping shown in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Producing,
    ShutIn,
    PluggedAbandoned,
    Drilling,
    Other,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 5] = [
        StatusBucket::Producing,
        StatusBucket::ShutIn,
        StatusBucket::PluggedAbandoned,
        StatusBucket::Drilling,
        StatusBucket::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Producing => "Producing",
            Self::ShutIn => "Shut In",
            Self::PluggedAbandoned => "Plugged and Abandoned",
            Self::Drilling => "Drilling",
            Self::Other => "Misc",
        }
    }

    /// Stable wire key, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Producing => "producing",
            Self::ShutIn => "shut_in",
            Self::PluggedAbandoned => "plugged_abandoned",
            Self::Drilling => "drilling",
            Self::Other => "other",
        }
    }
}

// ============================================================================
// Well Type
// ============================================================================

/// Well type as carried by the state well database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellType {
    Oil,
    Gas,
    WaterDisposal,
    OilAndDisposal,
    WaterInjection,
    GasInjection,
    DryHole,
    TestWell,
    WaterSource,
    Unknown,
}

impl WellType {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Oil Well" => Self::Oil,
            "Gas Well" => Self::Gas,
            "Water Disposal Well" => Self::WaterDisposal,
            "Oil Well/Water Disposal Well" => Self::OilAndDisposal,
            "Water Injection Well" => Self::WaterInjection,
            "Gas Injection Well" => Self::GasInjection,
            "Dry Hole" => Self::DryHole,
            "Test Well" => Self::TestWell,
            "Water Source Well" => Self::WaterSource,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Oil => "Oil Well",
            Self::Gas => "Gas Well",
            Self::WaterDisposal => "Water Disposal Well",
            Self::OilAndDisposal => "Oil Well/Water Disposal Well",
            Self::WaterInjection => "Water Injection Well",
            Self::GasInjection => "Gas Injection Well",
            Self::DryHole => "Dry Hole",
            Self::TestWell => "Test Well",
            Self::WaterSource => "Water Source Well",
            Self::Unknown => "Unknown",
        }
    }

    /// Merged display bucket: injection wells merge, disposal wells merge,
    /// and the test/water-source/unknown tail collapses into `Other`.
    pub fn bucket(&self) -> TypeBucket {
        match self {
            Self::Oil => TypeBucket::Oil,
            Self::Gas => TypeBucket::Gas,
            Self::WaterDisposal | Self::OilAndDisposal => TypeBucket::Disposal,
            Self::WaterInjection | Self::GasInjection => TypeBucket::Injection,
            Self::DryHole => TypeBucket::DryHole,
            Self::TestWell | Self::WaterSource | Self::Unknown => TypeBucket::Other,
        }
    }
}

impl std::fmt::Display for WellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse type grouping shown in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeBucket {
    Oil,
    Gas,
    Disposal,
    Injection,
    DryHole,
    Other,
}

impl TypeBucket {
    pub const ALL: [TypeBucket; 6] = [
        TypeBucket::Oil,
        TypeBucket::Gas,
        TypeBucket::Disposal,
        TypeBucket::Injection,
        TypeBucket::DryHole,
        TypeBucket::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Oil => "Oil Well",
            Self::Gas => "Gas Well",
            Self::Disposal => "Water Disposal",
            Self::Injection => "Injection Well",
            Self::DryHole => "Dry Hole",
            Self::Other => "Other",
        }
    }

    /// Stable wire key, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Oil => "oil",
            Self::Gas => "gas",
            Self::Disposal => "disposal",
            Self::Injection => "injection",
            Self::DryHole => "dry_hole",
            Self::Other => "other",
        }
    }
}

// ============================================================================
// Well Record
// ============================================================================

/// One well as presented in the docket working set.
///
/// A well appears once per docket it is cited in; `api_number` is the
/// stable identifier joining it to surveys and production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellRecord {
    /// State API number, the primary well identifier
    pub api_number: String,
    pub name: String,
    /// Pick-list label: `"<api> - <name>"`
    pub display_name: String,
    pub operator: String,
    /// Permit work type (DRILL, DEEPEN, REENTER; PLUG rows are dropped at ingest)
    pub work_type: String,
    pub status: WellStatus,
    pub well_type: WellType,
    /// Canonicalized field name, empty when unassigned
    #[serde(default)]
    pub field_name: String,
    /// Surface elevation (ft)
    pub elevation: f64,
    /// Spud date, `YYYY-MM-DD`, empty when the well was never spudded
    #[serde(default)]
    pub spud_date: String,
    /// Age in months from spud; 0 for approved permits without a spud date
    pub age_months: u32,
    /// Board year this record was docketed under
    pub board_year: i32,
    /// Docket month name, e.g. "March"
    pub docket_month: String,
    /// Board docket identifier, e.g. "2024-03 Docket"
    pub board_docket: String,
    /// TRS concentration code of the surface location
    #[serde(default)]
    pub conc_code: String,
    #[serde(default)]
    pub mineral_lease: String,
}

impl WellRecord {
    /// Wells cited on a board matter get bolded in pick lists.
    pub fn matches_docket(&self, year: i32, month: &str, docket: &str) -> bool {
        self.board_year == year && self.docket_month == month && self.board_docket == docket
    }
}
