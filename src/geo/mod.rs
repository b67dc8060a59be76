//! Geospatial transform layer
//!
//! Converts well survey coordinates between geographic (WGS84 lat/lon) and
//! projected (UTM) systems, and provides the polygon and polyline math the
//! scene layer is built on. All projection math is in-crate; the data set
//! lives in a single UTM zone so no external projection engine is needed.

pub mod utm;
pub mod trajectory;
pub mod polygon;

pub use utm::{from_latlon, to_latlon, UtmCoord, UtmError};
pub use trajectory::{centroid_and_spread, PointCloudFrame};
pub use polygon::{
    polygons_adjacent, ring_area, ring_bbox, ring_centroid, ring_contains, ring_distance,
};
