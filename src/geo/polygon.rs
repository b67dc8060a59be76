//! Polygon math for section and field boundaries
//!
//! Rings are open vertex lists in projected metres; the closing edge from
//! last back to first vertex is implied.

/// Axis-aligned bounding box: (min_x, min_y, max_x, max_y).
pub fn ring_bbox(ring: &[[f64; 2]]) -> Option<(f64, f64, f64, f64)> {
    let first = ring.first()?;
    let mut bbox = (first[0], first[1], first[0], first[1]);
    for p in ring {
        bbox.0 = bbox.0.min(p[0]);
        bbox.1 = bbox.1.min(p[1]);
        bbox.2 = bbox.2.max(p[0]);
        bbox.3 = bbox.3.max(p[1]);
    }
    Some(bbox)
}

/// Signed shoelace area. Positive for counter-clockwise rings.
pub fn ring_area(ring: &[[f64; 2]]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (a, b) in edge_pairs(ring) {
        sum += a[0] * b[1] - b[0] * a[1];
    }
    sum / 2.0
}

/// Area centroid of a ring, falling back to the vertex mean for degenerate
/// (near zero area) rings.
pub fn ring_centroid(ring: &[[f64; 2]]) -> Option<[f64; 2]> {
    if ring.is_empty() {
        return None;
    }
    let area = ring_area(ring);
    if area.abs() < 1e-9 {
        let n = ring.len() as f64;
        let sum = ring
            .iter()
            .fold([0.0, 0.0], |acc, p| [acc[0] + p[0], acc[1] + p[1]]);
        return Some([sum[0] / n, sum[1] / n]);
    }

    let mut cx = 0.0;
    let mut cy = 0.0;
    for (a, b) in edge_pairs(ring) {
        let cross = a[0] * b[1] - b[0] * a[1];
        cx += (a[0] + b[0]) * cross;
        cy += (a[1] + b[1]) * cross;
    }
    Some([cx / (6.0 * area), cy / (6.0 * area)])
}

/// Ray-cast point-in-polygon test. Points on the boundary may land on
/// either side; the callers only use this for coarse hit testing.
pub fn ring_contains(ring: &[[f64; 2]], point: [f64; 2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    for (a, b) in edge_pairs(ring) {
        if (a[1] > point[1]) != (b[1] > point[1]) {
            let x_cross = (b[0] - a[0]) * (point[1] - a[1]) / (b[1] - a[1]) + a[0];
            if point[0] < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Minimum distance between two polygon outlines. Zero when they touch
/// or overlap.
pub fn ring_distance(a: &[[f64; 2]], b: &[[f64; 2]]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }
    // Containment counts as touching
    if ring_contains(a, b[0]) || ring_contains(b, a[0]) {
        return 0.0;
    }

    let mut min = f64::INFINITY;
    for (a1, a2) in edge_pairs(a) {
        for (b1, b2) in edge_pairs(b) {
            min = min.min(segment_distance(a1, a2, b1, b2));
            if min == 0.0 {
                return 0.0;
            }
        }
    }
    min
}

/// True when two boundary rings come within `buffer` metres of each other.
pub fn polygons_adjacent(a: &[[f64; 2]], b: &[[f64; 2]], buffer: f64) -> bool {
    // Cheap reject on expanded bounding boxes before the edge sweep
    match (ring_bbox(a), ring_bbox(b)) {
        (Some(ba), Some(bb)) => {
            if ba.0 - buffer > bb.2 || bb.0 - buffer > ba.2 || ba.1 - buffer > bb.3
                || bb.1 - buffer > ba.3
            {
                return false;
            }
        }
        _ => return false,
    }
    ring_distance(a, b) <= buffer
}

// ============================================================================
// Edge helpers
// ============================================================================

fn edge_pairs(ring: &[[f64; 2]]) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .take(ring.len())
        .map(|(a, b)| (*a, *b))
}

fn point_segment_distance(p: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    let abx = b[0] - a[0];
    let aby = b[1] - a[1];
    let len2 = abx * abx + aby * aby;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p[0] - a[0]) * abx + (p[1] - a[1]) * aby) / len2).clamp(0.0, 1.0)
    };
    let cx = a[0] + t * abx;
    let cy = a[1] + t * aby;
    ((p[0] - cx).powi(2) + (p[1] - cy).powi(2)).sqrt()
}

fn segments_intersect(a1: [f64; 2], a2: [f64; 2], b1: [f64; 2], b2: [f64; 2]) -> bool {
    let d = |p: [f64; 2], q: [f64; 2], r: [f64; 2]| {
        (q[0] - p[0]) * (r[1] - p[1]) - (q[1] - p[1]) * (r[0] - p[0])
    };
    let d1 = d(b1, b2, a1);
    let d2 = d(b1, b2, a2);
    let d3 = d(a1, a2, b1);
    let d4 = d(a1, a2, b2);
    (d1 * d2 < 0.0) && (d3 * d4 < 0.0)
}

fn segment_distance(a1: [f64; 2], a2: [f64; 2], b1: [f64; 2], b2: [f64; 2]) -> f64 {
    if segments_intersect(a1, a2, b1, b2) {
        return 0.0;
    }
    point_segment_distance(a1, b1, b2)
        .min(point_segment_distance(a2, b1, b2))
        .min(point_segment_distance(b1, a1, a2))
        .min(point_segment_distance(b2, a1, a2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square(offset_x: f64) -> Vec<[f64; 2]> {
        vec![
            [offset_x, 0.0],
            [offset_x + 1.0, 0.0],
            [offset_x + 1.0, 1.0],
            [offset_x, 1.0],
        ]
    }

    #[test]
    fn area_and_centroid_of_square() {
        let square = unit_square(0.0);
        assert!((ring_area(&square) - 1.0).abs() < 1e-12);
        let c = ring_centroid(&square).unwrap();
        assert!((c[0] - 0.5).abs() < 1e-12);
        assert!((c[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_ring_uses_vertex_mean() {
        let line = vec![[0.0, 0.0], [2.0, 0.0]];
        let c = ring_centroid(&line).unwrap();
        assert_eq!(c, [1.0, 0.0]);
        assert_eq!(ring_area(&line), 0.0);
    }

    #[test]
    fn contains_inner_point() {
        let square = unit_square(0.0);
        assert!(ring_contains(&square, [0.5, 0.5]));
        assert!(!ring_contains(&square, [1.5, 0.5]));
    }

    #[test]
    fn adjacency_respects_buffer() {
        let a = unit_square(0.0);
        let near = unit_square(1.005);
        let far = unit_square(20.0);
        assert!(polygons_adjacent(&a, &near, 0.01));
        assert!(!polygons_adjacent(&a, &near, 0.001));
        assert!(!polygons_adjacent(&a, &far, 10.0));
    }

    #[test]
    fn overlapping_rings_have_zero_distance() {
        let a = unit_square(0.0);
        let b = unit_square(0.5);
        assert_eq!(ring_distance(&a, &b), 0.0);
    }
}
