//! Segment intersection and segment-in-polygon containment.

use super::polygon::ring_is_convex;
use super::point::{is_point_on_segment, point_in_ring};
use crate::primitives::{Point2, Segment2};
use crate::shapes::{Edges, Vertices};
use crate::tolerance::{default_epsilon, orient2d};
use num_traits::Float;
use std::cmp::Ordering;
use tracing::trace;

/// Tests if two segments share at least one point.
///
/// Touching at an endpoint and collinear overlap both count. The answer is
/// unchanged by swapping the segments or either segment's endpoints.
///
/// # Example
///
/// ```
/// use planimetry::predicates::is_segment_intersection;
/// use planimetry::Segment2;
///
/// let a = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
/// assert!(is_segment_intersection(a, Segment2::from_coords(0.0, 4.0, 4.0, 0.0)));
/// assert!(is_segment_intersection(a, Segment2::from_coords(4.0, 4.0, 6.0, 0.0)));
/// assert!(!is_segment_intersection(a, Segment2::from_coords(1.0, 0.0, 3.0, 0.0)));
/// ```
pub fn is_segment_intersection<F: Float>(a: Segment2<F>, b: Segment2<F>) -> bool {
    if !a.bounds().intersects(b.bounds()) {
        return false;
    }

    let eps = default_epsilon();
    let b_beside_a =
        orient2d(a.start, a.end, b.start, eps).same_strict_side(orient2d(a.start, a.end, b.end, eps));
    let a_beside_b =
        orient2d(b.start, b.end, a.start, eps).same_strict_side(orient2d(b.start, b.end, a.end, eps));

    // Straddling or touching; collinear pieces overlap once the boxes do
    !(b_beside_a || a_beside_b)
}

/// Tests if a segment lies entirely inside a polygon, boundary included.
///
/// Both endpoints must be inside. For a convex polygon that is enough. For a
/// concave one every edge is scanned: a proper crossing rejects the segment,
/// while points where the segment only touches the boundary are collected.
/// The pieces between consecutive touch points are then checked through
/// their midpoints, which catches a segment that slips out through a reflex
/// vertex.
///
/// # Example
///
/// ```
/// use planimetry::predicates::is_segment_in_polygon;
/// use planimetry::{Polygon, Segment2};
///
/// // U shape open at the top
/// let u = Polygon::from_coords(
///     &[0.0, 3.0, 3.0, 2.0, 2.0, 1.0, 1.0, 0.0],
///     &[0.0, 0.0, 3.0, 3.0, 1.0, 1.0, 3.0, 3.0],
/// ).unwrap();
/// assert!(is_segment_in_polygon(Segment2::from_coords(0.5, 0.5, 2.5, 0.5), &u));
/// assert!(!is_segment_in_polygon(Segment2::from_coords(0.5, 2.0, 2.5, 2.0), &u));
/// ```
pub fn is_segment_in_polygon<F, S>(segment: Segment2<F>, polygon: &S) -> bool
where
    F: Float,
    S: Vertices<F> + ?Sized,
{
    segment_in_ring(segment, polygon.vertices())
}

pub(crate) fn segment_in_ring<F: Float>(segment: Segment2<F>, vertices: &[Point2<F>]) -> bool {
    if !point_in_ring(segment.start, vertices) || !point_in_ring(segment.end, vertices) {
        return false;
    }

    if ring_is_convex(vertices) {
        trace!("convex polygon, endpoint containment decides");
        return true;
    }

    let mut touches = Vec::new();
    for edge in Edges::new(vertices) {
        let before = touches.len();
        touches.extend(
            [segment.start, segment.end]
                .into_iter()
                .filter(|&p| is_point_on_segment(p, edge)),
        );
        touches.extend(
            [edge.start, edge.end]
                .into_iter()
                .filter(|&p| is_point_on_segment(p, segment)),
        );

        if touches.len() == before && is_segment_intersection(edge, segment) {
            trace!("segment crosses a polygon edge");
            return false;
        }
    }

    touches.sort_by(compare_xy);
    touches.dedup();

    let inside = touches
        .windows(2)
        .all(|pair| point_in_ring(pair[0].midpoint(pair[1]), vertices));
    if !inside {
        trace!(touches = touches.len(), "segment leaves the polygon between touch points");
    }
    inside
}

/// Orders points by x, then by y.
fn compare_xy<F: Float>(a: &Point2<F>, b: &Point2<F>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
