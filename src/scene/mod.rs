//! Rendering layer: render-list assembly
//!
//! Builds the styled geometry the dashboard draws: per-category well
//! layers, plat section outlines with labels, field boundary polygons with
//! centroid labels, ownership fills, and board matter highlights. The
//! assembled [`Scene`] is pure serializable data; drawing it is the
//! client's job.

pub mod palette;

use rayon::prelude::*;
use serde::Serialize;

use crate::filter::{partition, CategorizedWell, FilterState, HighlightMode, WellCategory};
use crate::geo;
use crate::ingest::WellDataset;
use crate::types::OwnerAgency;

// ============================================================================
// Scene types
// ============================================================================

/// One styled well polyline.
#[derive(Debug, Clone, Serialize)]
pub struct StyledPath {
    pub api_number: String,
    pub display_name: String,
    pub color: String,
    pub width: f64,
    pub points_2d: Vec<[f64; 2]>,
    pub points_3d: Vec<[f64; 3]>,
}

/// All wells drawn for one category.
#[derive(Debug, Clone, Serialize)]
pub struct WellLayer {
    pub category: WellCategory,
    pub paths: Vec<StyledPath>,
}

/// A text label anchored in projected space.
#[derive(Debug, Clone, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub position: [f64; 2],
    pub size: f64,
    pub color: String,
}

/// Plat section outlines with optional labels.
#[derive(Debug, Clone, Serialize)]
pub struct SectionLayer {
    pub outlines: Vec<SectionOutline>,
    pub labels: Vec<TextLabel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionOutline {
    pub conc: String,
    pub ring: Vec<[f64; 2]>,
}

/// Field boundary polygons with centroid labels.
#[derive(Debug, Clone, Serialize)]
pub struct FieldLayer {
    pub visible: bool,
    pub boundaries: Vec<FieldOutline>,
    pub labels: Vec<TextLabel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldOutline {
    pub name: String,
    pub ring: Vec<[f64; 2]>,
}

/// One section filled by its surface owner.
#[derive(Debug, Clone, Serialize)]
pub struct OwnershipFill {
    pub conc: String,
    pub owner: String,
    pub agency: OwnerAgency,
    pub color: String,
    pub ring: Vec<[f64; 2]>,
}

/// Sections a board matter touches, for highlighting.
#[derive(Debug, Clone, Serialize)]
pub struct BoardLayer {
    pub cause_number: String,
    pub color: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

/// Camera framing for the 2D/3D views.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneFrame {
    pub centroid: [f64; 3],
    pub spread: [f64; 3],
}

/// The full render list for the current selection.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub wells: Vec<WellLayer>,
    pub sections: SectionLayer,
    pub fields: FieldLayer,
    pub ownership: Vec<OwnershipFill>,
    pub board: Option<BoardLayer>,
    pub frame: SceneFrame,
}

impl Scene {
    /// An empty scene framed on the origin; what an unselected docket gets.
    pub fn empty() -> Self {
        Self {
            wells: WellCategory::ALL
                .iter()
                .map(|c| WellLayer {
                    category: *c,
                    paths: Vec::new(),
                })
                .collect(),
            sections: SectionLayer {
                outlines: Vec::new(),
                labels: Vec::new(),
            },
            fields: FieldLayer {
                visible: false,
                boundaries: Vec::new(),
                labels: Vec::new(),
            },
            ownership: Vec::new(),
            board: None,
            frame: SceneFrame {
                centroid: [0.0; 3],
                spread: [0.0; 3],
            },
        }
    }
}

// ============================================================================
// Styling knobs
// ============================================================================

/// Style values resolved from config at the call site.
#[derive(Debug, Clone, Copy)]
pub struct SceneStyle {
    pub base_width: f64,
    pub highlight_width: f64,
    pub field_label_size: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            base_width: 0.5,
            highlight_width: 1.5,
            field_label_size: 75.0,
        }
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Build the scene for the current filter state.
///
/// With no docket selected the well layers are empty but the land layers
/// still draw, matching the original behavior of showing the base map
/// before a docket is picked.
pub fn build(
    dataset: &WellDataset,
    filter: &FilterState,
    highlight_cause: Option<&str>,
    style: SceneStyle,
) -> Scene {
    let docket_wells = match (&filter.year, &filter.month, &filter.docket) {
        (Some(year), Some(month), Some(docket)) => {
            dataset.wells_for_docket(*year, month, docket)
        }
        _ => Vec::new(),
    };

    let partition = partition(dataset, &docket_wells, filter);

    let wells: Vec<WellLayer> = WellCategory::ALL
        .iter()
        .map(|category| WellLayer {
            category: *category,
            paths: style_category(partition.category(*category), filter, style),
        })
        .collect();

    let sections = section_layer(dataset, filter);
    let fields = field_layer(dataset, filter, style);
    let ownership = ownership_fills(dataset);
    let board = highlight_cause.and_then(|cause| board_layer(dataset, cause));

    let frame = frame_for(&wells, &sections);

    Scene {
        wells,
        sections,
        fields,
        ownership,
        board,
        frame,
    }
}

/// Style every path in a category. Paths default to thin black; wells
/// matching an active toggle take their category color at highlight
/// width; the selected well is emphasized on top of that.
fn style_category(
    wells: &[CategorizedWell<'_>],
    filter: &FilterState,
    style: SceneStyle,
) -> Vec<StyledPath> {
    wells
        .par_iter()
        .map(|cw| {
            let record = cw.record;
            let selected = filter
                .selected_well
                .as_deref()
                .map_or(false, |api| api == record.api_number);

            let (color, width) = if selected {
                (
                    palette::SELECTED_WELL_COLOR.to_string(),
                    style.highlight_width + 1.0,
                )
            } else if filter.highlights(record) {
                let color = match filter.mode {
                    HighlightMode::ByType => palette::well_type_color(record.well_type),
                    HighlightMode::ByStatus => palette::status_color(record.status.bucket()),
                };
                (color.to_string(), style.highlight_width)
            } else {
                (palette::DEFAULT_WELL_COLOR.to_string(), style.base_width)
            };

            StyledPath {
                api_number: record.api_number.clone(),
                display_name: record.display_name.clone(),
                color,
                width,
                points_2d: cw.trajectory.points_2d(),
                points_3d: cw.trajectory.points_3d(),
            }
        })
        .collect()
}

fn section_layer(dataset: &WellDataset, filter: &FilterState) -> SectionLayer {
    let outlines = dataset
        .plats
        .iter()
        .map(|p| SectionOutline {
            conc: p.conc.clone(),
            ring: p.ring.clone(),
        })
        .collect();

    let labels = if filter.show_section_labels {
        dataset
            .plats
            .iter()
            .filter_map(|p| {
                let anchor = geo::ring_centroid(&p.ring)?;
                Some(TextLabel {
                    text: p.label.clone(),
                    position: anchor,
                    size: 20.0,
                    color: palette::DEFAULT_WELL_COLOR.to_string(),
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    SectionLayer { outlines, labels }
}

fn field_layer(dataset: &WellDataset, filter: &FilterState, style: SceneStyle) -> FieldLayer {
    let boundaries = dataset
        .fields
        .iter()
        .map(|f| FieldOutline {
            name: f.name.clone(),
            ring: f.ring.clone(),
        })
        .collect();

    let labels = if filter.show_field_labels {
        dataset
            .fields
            .iter()
            .map(|f| TextLabel {
                text: f.name.clone(),
                position: f.centroid,
                size: style.field_label_size,
                color: palette::FIELD_LABEL_COLOR.to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    FieldLayer {
        visible: filter.show_field_labels,
        boundaries,
        labels,
    }
}

/// Sections filled by owner, one palette color per distinct owner in
/// first-seen order.
fn ownership_fills(dataset: &WellDataset) -> Vec<OwnershipFill> {
    let mut owner_order: Vec<&str> = Vec::new();
    let mut fills = Vec::new();

    for record in &dataset.ownership {
        let idx = match owner_order.iter().position(|o| *o == record.owner) {
            Some(i) => i,
            None => {
                owner_order.push(&record.owner);
                owner_order.len() - 1
            }
        };
        let Some(plat) = dataset.plats.iter().find(|p| p.conc == record.conc) else {
            continue;
        };
        fills.push(OwnershipFill {
            conc: record.conc.clone(),
            owner: record.owner.clone(),
            agency: record.agency,
            color: palette::color_for_index(idx).to_string(),
            ring: plat.ring.clone(),
        });
    }
    fills
}

/// Highlight rings for the sections a board matter touches.
pub fn board_layer(dataset: &WellDataset, cause_number: &str) -> Option<BoardLayer> {
    let matter = dataset.board_matter(cause_number)?;
    let rings: Vec<Vec<[f64; 2]>> = dataset
        .plats_for_sections(&matter.sections)
        .into_iter()
        .map(|p| p.ring.clone())
        .collect();
    Some(BoardLayer {
        cause_number: matter.cause_number.clone(),
        color: palette::BOARD_HIGHLIGHT_COLOR.to_string(),
        rings,
    })
}

/// Frame on the drawn wells, falling back to the section grid for empty
/// dockets.
fn frame_for(wells: &[WellLayer], sections: &SectionLayer) -> SceneFrame {
    let mut points: Vec<[f64; 3]> = wells
        .iter()
        .flat_map(|layer| layer.paths.iter())
        .flat_map(|path| path.points_3d.iter().copied())
        .collect();

    if points.is_empty() {
        points = sections
            .outlines
            .iter()
            .flat_map(|o| o.ring.iter().map(|p| [p[0], p[1], 0.0]))
            .collect();
    }

    let frame = geo::centroid_and_spread(&points);
    SceneFrame {
        centroid: frame.centroid,
        spread: frame.spread,
    }
}
