//! Rectangle type.

use super::traits::{boundary_length, signed_area};
use super::{ClosedShape, Vertices};
use crate::bounds::Aabb2;
use crate::error::GeometryError;
use crate::primitives::Point2;
use crate::tolerance;
use num_traits::Float;
use tracing::debug;

/// A rectangle given by its four corners in boundary order.
///
/// Vertex pairs (0,1), (1,2), (2,3) and (3,0) are the four edges, so the
/// rectangle may be rotated. Right angles are not checked; the containment
/// test treats the shape as a quadrilateral bounded by two pairs of opposite
/// edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle2<F> {
    vertices: [Point2<F>; 4],
}

impl<F: Float> Rectangle2<F> {
    /// Creates a rectangle from its corners in boundary order.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateInput`] if the corners enclose no area
    /// within tolerance.
    pub fn new(
        a: Point2<F>,
        b: Point2<F>,
        c: Point2<F>,
        d: Point2<F>,
    ) -> Result<Self, GeometryError> {
        let vertices = [a, b, c, d];
        if tolerance::is_zero(signed_area(&vertices)) {
            debug!("rejected zero-area rectangle");
            return Err(GeometryError::DegenerateInput);
        }
        Ok(Self { vertices })
    }

    /// Creates the counter-clockwise rectangle covering an axis-aligned box.
    pub fn axis_aligned(bounds: Aabb2<F>) -> Result<Self, GeometryError> {
        let [a, b, c, d] = bounds.corners();
        Self::new(a, b, c, d)
    }
}

impl<F: Float> Vertices<F> for Rectangle2<F> {
    #[inline]
    fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }
}

impl<F: Float> ClosedShape<F> for Rectangle2<F> {
    fn area(&self) -> F {
        signed_area(&self.vertices).abs()
    }

    fn perimeter(&self) -> F {
        boundary_length(&self.vertices)
    }
}
