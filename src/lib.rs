//! planimetry - Planar geometry predicates
//!
//! Point, segment and polygon containment, segment intersection, polygon
//! validity checks and nearest-point queries over `f32` or `f64`, with a
//! single tolerance shared by every comparison.
//!
//! ```
//! use planimetry::{is_point_in_polygon, point_to_circle, Circle2, Point2, Polygon};
//!
//! let square = Polygon::<f64>::from_coords(&[0.0, 2.0, 2.0, 0.0], &[0.0, 0.0, 2.0, 2.0]).unwrap();
//! assert!(is_point_in_polygon(Point2::new(1.0, 1.0), &square));
//! assert!(is_point_in_polygon(Point2::new(2.0, 1.0), &square));
//!
//! let nearest = point_to_circle(Point2::new(-3.0, 0.0), &Circle2::<f64>::unit()).unwrap();
//! assert!((nearest.distance - 2.0).abs() < 1e-12);
//! ```

pub mod bounds;
pub mod error;
pub mod predicates;
pub mod primitives;
pub mod shapes;
pub mod tolerance;

pub use bounds::Aabb2;
pub use error::GeometryError;
pub use predicates::{
    is_convex_polygon, is_point_in_bounds, is_point_in_circle, is_point_in_polygon,
    is_point_in_rectangle, is_point_in_triangle, is_point_on_segment, is_polygon_in_polygon,
    is_segment_in_polygon, is_segment_intersection, is_self_intersected, point_to_circle,
    point_to_polygon, point_to_segment, polygon_mbr, Nearest,
};
pub use primitives::{Line2, Point2, Segment2, Vec2};
pub use shapes::{Circle2, ClosedShape, Polygon, Rectangle2, Triangle2, Vertices};
pub use tolerance::{orient2d, Orientation, DEFAULT_EPSILON};
