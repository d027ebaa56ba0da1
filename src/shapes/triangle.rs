//! Triangle type.

use super::traits::{boundary_length, signed_area};
use super::{ClosedShape, Vertices};
use crate::error::GeometryError;
use crate::primitives::Point2;
use crate::tolerance;
use num_traits::Float;
use tracing::debug;

/// A triangle with non-zero area.
///
/// Vertices may wind either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    vertices: [Point2<F>; 3],
}

impl<F: Float> Triangle2<F> {
    /// Creates a triangle from its three vertices.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateInput`] if the vertices are coincident or
    /// collinear within tolerance.
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Result<Self, GeometryError> {
        let vertices = [a, b, c];
        if tolerance::is_zero(signed_area(&vertices)) {
            debug!("rejected zero-area triangle");
            return Err(GeometryError::DegenerateInput);
        }
        Ok(Self { vertices })
    }
}

impl<F: Float> Vertices<F> for Triangle2<F> {
    #[inline]
    fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }
}

impl<F: Float> ClosedShape<F> for Triangle2<F> {
    fn area(&self) -> F {
        signed_area(&self.vertices).abs()
    }

    fn perimeter(&self) -> F {
        boundary_length(&self.vertices)
    }
}
