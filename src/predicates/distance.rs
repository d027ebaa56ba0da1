//! Nearest-point queries from a point to a boundary.

use crate::error::GeometryError;
use crate::primitives::{Point2, Segment2};
use crate::shapes::{Circle2, Vertices};
use crate::tolerance;
use num_traits::Float;
use tracing::debug;

/// Distance from a query point to a shape, and the boundary point that
/// achieves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<F> {
    /// Distance from the query point to `point`.
    pub distance: F,
    /// Closest point on the boundary.
    pub point: Point2<F>,
}

/// Finds the point of a segment closest to `point`.
///
/// The foot of the perpendicular is clamped to the segment, so past either
/// end the endpoint itself is returned.
#[inline]
pub fn point_to_segment<F: Float>(point: Point2<F>, segment: Segment2<F>) -> Nearest<F> {
    let (nearest, _) = segment.closest_point(point);
    Nearest {
        distance: point.distance(nearest),
        point: nearest,
    }
}

/// Finds the boundary point of a polygon closest to `point`.
///
/// Only the boundary is considered: a point inside the polygon gets its
/// distance to the nearest edge, not zero. When two edges are equally close
/// the earlier edge wins.
///
/// # Example
///
/// ```
/// use planimetry::predicates::point_to_polygon;
/// use planimetry::{Point2, Polygon};
///
/// let square = Polygon::<f64>::from_coords(&[0.0, 2.0, 2.0, 0.0], &[0.0, 0.0, 2.0, 2.0]).unwrap();
/// let nearest = point_to_polygon(Point2::new(3.0, 1.0), &square);
/// assert_eq!(nearest.point, Point2::new(2.0, 1.0));
/// assert!((nearest.distance - 1.0).abs() < 1e-12);
/// ```
pub fn point_to_polygon<F, S>(point: Point2<F>, polygon: &S) -> Nearest<F>
where
    F: Float,
    S: Vertices<F> + ?Sized,
{
    let seed = Nearest {
        distance: F::infinity(),
        point,
    };
    polygon.edges().fold(seed, |best, edge| {
        let candidate = point_to_segment(point, edge);
        if candidate.distance < best.distance {
            candidate
        } else {
            best
        }
    })
}

/// Finds the point of a circle's boundary closest to `point`.
///
/// The nearest point lies on the ray from the center through `point`.
///
/// # Errors
///
/// [`GeometryError::DegenerateInput`] when `point` coincides with the
/// center, where every boundary point is equally near.
pub fn point_to_circle<F: Float>(
    point: Point2<F>,
    circle: &Circle2<F>,
) -> Result<Nearest<F>, GeometryError> {
    let offset = point - circle.center();
    let d = offset.magnitude();
    if tolerance::is_zero(d) {
        debug!("point-to-circle query at the center");
        return Err(GeometryError::DegenerateInput);
    }

    let r = circle.radius();
    Ok(Nearest {
        distance: (d - r).abs(),
        point: circle.center() + offset * (r / d),
    })
}
