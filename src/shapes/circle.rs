//! 2D circle type.

use super::ClosedShape;
use crate::bounds::Aabb2;
use crate::error::GeometryError;
use crate::primitives::Point2;
use num_traits::Float;
use tracing::debug;

/// A 2D circle defined by center and a strictly positive radius.
///
/// # Example
///
/// ```
/// use planimetry::shapes::{Circle2, ClosedShape};
/// use planimetry::primitives::Point2;
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 2.0).unwrap();
/// assert!((circle.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
///
/// assert!(Circle2::new(Point2::new(0.0, 0.0), 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    center: Point2<F>,
    radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NonPositiveRadius`] if `radius` is not strictly
    /// positive (NaN included).
    pub fn new(center: Point2<F>, radius: F) -> Result<Self, GeometryError> {
        if radius.is_nan() || radius <= F::zero() {
            debug!(radius = ?radius.to_f64(), "rejected circle with non-positive radius");
            return Err(GeometryError::NonPositiveRadius);
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Result<Self, GeometryError> {
        Self::new(Point2::new(cx, cy), radius)
    }

    /// Creates a unit circle centered at the origin.
    #[inline]
    pub fn unit() -> Self {
        Self {
            center: Point2::origin(),
            radius: F::one(),
        }
    }

    /// Center point of the circle.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Radius of the circle, always positive.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Returns the diameter of the circle.
    #[inline]
    pub fn diameter(&self) -> F {
        self.radius + self.radius
    }

    /// Returns the axis-aligned bounding box.
    #[inline]
    pub fn bounding_box(&self) -> Aabb2<F> {
        Aabb2::from_bounds(
            self.center.x - self.radius,
            self.center.x + self.radius,
            self.center.y - self.radius,
            self.center.y + self.radius,
        )
    }
}

impl<F: Float> ClosedShape<F> for Circle2<F> {
    #[inline]
    fn area(&self) -> F {
        F::from(std::f64::consts::PI).unwrap() * self.radius * self.radius
    }

    #[inline]
    fn perimeter(&self) -> F {
        F::from(std::f64::consts::TAU).unwrap() * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_new() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        assert_eq!(c.center(), Point2::new(1.0, 2.0));
        assert_eq!(c.radius(), 3.0);
        assert_eq!(c.diameter(), 6.0);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let origin = Point2::<f64>::origin();
        assert_eq!(Circle2::new(origin, 0.0), Err(GeometryError::NonPositiveRadius));
        assert_eq!(Circle2::new(origin, -1.0), Err(GeometryError::NonPositiveRadius));
        assert_eq!(Circle2::new(origin, f64::NAN), Err(GeometryError::NonPositiveRadius));
    }

    #[test]
    fn test_unit() {
        let c: Circle2<f64> = Circle2::unit();
        assert_eq!(c.center(), Point2::origin());
        assert_eq!(c.radius(), 1.0);
    }

    #[test]
    fn test_area_and_perimeter() {
        let c: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(c.area(), 4.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(c.perimeter(), 4.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_bounding_box() {
        let c: Circle2<f64> = Circle2::from_coords(1.0, -1.0, 0.5).unwrap();
        let b = c.bounding_box();
        assert_eq!(b.min, Point2::new(0.5, -1.5));
        assert_eq!(b.max, Point2::new(1.5, -0.5));
    }

    #[test]
    fn test_f32() {
        let c: Circle2<f32> = Circle2::from_coords(0.0, 0.0, 1.0).unwrap();
        assert!((c.area() - std::f32::consts::PI).abs() < 1e-6);
    }
}
