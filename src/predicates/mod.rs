//! The predicate engine: containment, intersection and nearest-point
//! queries over primitives and shapes.
//!
//! Every function is pure and takes its arguments in (checked, reference)
//! order. Floating comparisons go through [`crate::tolerance`].

mod distance;
mod point;
mod polygon;
mod segment;

pub use distance::{point_to_circle, point_to_polygon, point_to_segment, Nearest};
pub use point::{
    is_point_in_bounds, is_point_in_circle, is_point_in_polygon, is_point_in_rectangle,
    is_point_in_triangle, is_point_on_segment, polygon_mbr,
};
pub use polygon::{is_convex_polygon, is_polygon_in_polygon, is_self_intersected};
pub use segment::{is_segment_in_polygon, is_segment_intersection};
