//! Axis-aligned bounds used for cheap rejection tests.

mod aabb;

pub use aabb::Aabb2;
