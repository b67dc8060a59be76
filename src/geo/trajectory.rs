//! Point-cloud framing for trajectory geometry
//!
//! The 2D/3D views frame themselves around the centroid of everything
//! currently drawn, with axis limits scaled by the spread of the points.

use statrs::statistics::Statistics;

/// Centroid and per-axis spread of a point cloud, used to place the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCloudFrame {
    pub centroid: [f64; 3],
    /// Population standard deviation per axis
    pub spread: [f64; 3],
}

impl PointCloudFrame {
    /// A frame centred on the origin, for empty scenes.
    pub fn origin() -> Self {
        Self {
            centroid: [0.0; 3],
            spread: [0.0; 3],
        }
    }
}

/// Compute the centroid and spread of a set of 3D points.
///
/// 2D callers pass elevation 0 and ignore the third axis. Returns the
/// origin frame when the cloud is empty.
pub fn centroid_and_spread(points: &[[f64; 3]]) -> PointCloudFrame {
    if points.is_empty() {
        return PointCloudFrame::origin();
    }

    let mut frame = PointCloudFrame::origin();
    for axis in 0..3 {
        let values: Vec<f64> = points.iter().map(|p| p[axis]).collect();
        frame.centroid[axis] = values.iter().copied().mean();
        frame.spread[axis] = values.iter().copied().population_std_dev();
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cloud_frames_origin() {
        assert_eq!(centroid_and_spread(&[]), PointCloudFrame::origin());
    }

    #[test]
    fn centroid_of_symmetric_cloud() {
        let points = [
            [0.0, 0.0, 10.0],
            [2.0, 4.0, 10.0],
            [4.0, 8.0, 10.0],
        ];
        let frame = centroid_and_spread(&points);
        assert!((frame.centroid[0] - 2.0).abs() < 1e-12);
        assert!((frame.centroid[1] - 4.0).abs() < 1e-12);
        assert!((frame.centroid[2] - 10.0).abs() < 1e-12);
        assert!(frame.spread[2].abs() < 1e-12);
        assert!(frame.spread[0] > 0.0);
    }
}
