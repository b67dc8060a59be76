//! Styling tables for scene assembly
//!
//! Hex color mappings for well types, well statuses, and the rotating
//! distinct-color palette used by ownership layers.

use crate::types::{StatusBucket, WellType};

/// Default color of a well path not matched by any active filter
pub const DEFAULT_WELL_COLOR: &str = "#000000";

/// Field labels render red at boundary centroids
pub const FIELD_LABEL_COLOR: &str = "#ff0000";

/// Selected-well emphasis color
pub const SELECTED_WELL_COLOR: &str = "#ff0000";

/// Board matter section highlight fill
pub const BOARD_HIGHLIGHT_COLOR: &str = "#56B4E9";

/// Highlight color for a well type.
pub fn well_type_color(well_type: WellType) -> &'static str {
    match well_type {
        WellType::Oil => "#c34c00",
        WellType::Gas => "#f1aa00",
        WellType::WaterDisposal | WellType::OilAndDisposal => "#0032b0",
        WellType::WaterInjection | WellType::GasInjection => "#93ebff",
        WellType::DryHole => "#4f494b",
        WellType::Unknown | WellType::TestWell | WellType::WaterSource => "#985bee",
    }
}

/// Highlight color for a status bucket.
pub fn status_color(bucket: StatusBucket) -> &'static str {
    match bucket {
        StatusBucket::Producing => "#a2e361",
        StatusBucket::PluggedAbandoned => "#4c2d77",
        StatusBucket::ShutIn => "#D2B48C",
        StatusBucket::Drilling => "#001958",
        StatusBucket::Other => "#4a7583",
    }
}

/// Color-blind friendly distinct palette for ownership fills. Ordered by
/// visual distinctiveness; black sits last as the fallback.
const DISTINCT_PALETTE: &[&str] = &[
    "#0072B2", "#E69F00", "#009E73", "#CC79A7", "#56B4E9", "#D55E00", "#660099", "#994F00",
    "#334B5C", "#0000FF", "#FF0000", "#006600", "#FF00FF", "#8B4513", "#800000", "#808000",
    "#FF1493", "#00CED1", "#8B008B", "#556B2F", "#FF8C00", "#9932CC", "#8B0000", "#008080",
    "#4B0082", "#B8860B", "#32CD32", "#800080", "#A0522D", "#FF4500", "#00FF00", "#4682B4",
    "#FFA500", "#DEB887", "#5F9EA0", "#D2691E", "#CD5C5C", "#708090", "#000000",
];

/// Palette color for an index, wrapping past the end.
pub fn color_for_index(index: usize) -> &'static str {
    DISTINCT_PALETTE[index % DISTINCT_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_colors_match_the_panel_legend() {
        assert_eq!(well_type_color(WellType::Oil), "#c34c00");
        assert_eq!(well_type_color(WellType::Gas), "#f1aa00");
        // Dual-purpose wells take the disposal blue
        assert_eq!(well_type_color(WellType::OilAndDisposal), "#0032b0");
        assert_eq!(well_type_color(WellType::GasInjection), "#93ebff");
    }

    #[test]
    fn status_colors_match_the_panel_legend() {
        assert_eq!(status_color(StatusBucket::Producing), "#a2e361");
        assert_eq!(status_color(StatusBucket::Drilling), "#001958");
        assert_eq!(status_color(StatusBucket::Other), "#4a7583");
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(color_for_index(0), "#0072B2");
        assert_eq!(color_for_index(DISTINCT_PALETTE.len()), "#0072B2");
        assert_eq!(color_for_index(DISTINCT_PALETTE.len() - 1), "#000000");
    }
}
