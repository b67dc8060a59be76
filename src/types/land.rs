//! Land survey layers: plat sections, field boundaries, ownership

use serde::{Deserialize, Serialize};

/// One land survey section (plat) boundary.
///
/// `conc` is the packed TRS concentration code, e.g. `"01235S02WB"`:
/// section 01, township 23S, range 02W, baseline B.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatSection {
    pub conc: String,
    /// Human-readable label, e.g. `"1 23S 2W B"`
    pub label: String,
    /// Boundary ring in projected metres (easting, northing)
    pub ring: Vec<[f64; 2]>,
}

/// Oil/gas field extent polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBoundary {
    pub name: String,
    pub ring: Vec<[f64; 2]>,
    /// Ring centroid, used to anchor the field label
    pub centroid: [f64; 2],
}

/// Pair of fields whose boundaries touch within the adjacency buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAdjacency {
    pub field: String,
    pub adjacent: String,
}

/// Surface ownership category for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerAgency {
    State,
    Federal,
    Fee,
    Tribal,
    Other,
}

impl OwnerAgency {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "state" => Self::State,
            "federal" => Self::Federal,
            "fee" | "private" => Self::Fee,
            "tribal" => Self::Tribal,
            _ => Self::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::State => "State",
            Self::Federal => "Federal",
            Self::Fee => "Fee",
            Self::Tribal => "Tribal",
            Self::Other => "Other",
        }
    }
}

/// Ownership of one section, drawn as a fill layer behind the wells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipRecord {
    /// TRS concentration code of the owned section
    pub conc: String,
    pub owner: String,
    pub agency: OwnerAgency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agency_parses_common_labels() {
        assert_eq!(OwnerAgency::from_label("State"), OwnerAgency::State);
        assert_eq!(OwnerAgency::from_label("FEDERAL"), OwnerAgency::Federal);
        assert_eq!(OwnerAgency::from_label("private"), OwnerAgency::Fee);
        assert_eq!(OwnerAgency::from_label("BLM lease"), OwnerAgency::Other);
    }
}
