//! End-to-end checks against hand-worked figures.

use approx::assert_relative_eq;
use planimetry::{
    is_point_in_polygon, is_polygon_in_polygon, is_self_intersected, point_to_circle,
    point_to_polygon, Circle2, GeometryError, Line2, Point2, Polygon, Segment2,
};

fn notched() -> Polygon<f64> {
    Polygon::from_coords(
        &[0.0, 4.0, 4.0, 2.0, 2.0, 3.0, 1.0, 0.0],
        &[0.0, 0.0, 4.0, 4.0, 3.0, 1.0, 2.0, 2.0],
    )
    .unwrap()
}

#[test]
fn notched_polygon_containment_and_nearest_point() {
    let poly = notched();

    assert!(!is_point_in_polygon(Point2::new(2.0, 1.51), &poly));

    let p = Point2::new(1.0, 2.1);
    let nearest = point_to_polygon(p, &poly);
    assert_eq!(nearest.point.x, p.x);
    assert_relative_eq!(nearest.distance, (p.y - nearest.point.y).abs(), epsilon = 1e-12);
}

#[test]
fn notched_polygon_contains_itself() {
    let poly = notched();
    assert!(is_polygon_in_polygon(&poly, &poly));
    assert!(!is_self_intersected(&poly));
}

#[test]
fn footpoint_on_diagonal() {
    let segment = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
    let foot = Line2::from(segment).foot_point(Point2::new(2.0, 0.0)).unwrap();
    assert_eq!(foot, Point2::new(1.0, 1.0));
}

#[test]
fn footpoint_on_degenerate_line() {
    let segment = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
    let result = Line2::from(segment).foot_point(Point2::new(2.0, 0.0));
    assert_eq!(result, Err(GeometryError::DegenerateInput));
}

#[test]
fn crossing_hexagon_is_self_intersected() {
    let poly = Polygon::from_coords(
        &[0.0, 2.0, 4.0, 3.0, 3.0, 1.0],
        &[0.0, 3.0, 1.0, -3.0, 4.0, 4.0],
    )
    .unwrap();
    assert!(is_self_intersected(&poly));
}

#[test]
fn distance_to_unit_circle() {
    let circle = Circle2::new(Point2::origin(), 1.0).unwrap();
    let nearest = point_to_circle(Point2::new(-3.0, 0.0), &circle).unwrap();
    assert_relative_eq!(nearest.distance, 2.0, epsilon = 1e-12);
    assert_relative_eq!(nearest.point.x, -1.0, epsilon = 1e-12);
}

#[test]
fn invalid_shapes_are_rejected() {
    assert_eq!(
        Circle2::new(Point2::origin(), 0.0),
        Err(GeometryError::NonPositiveRadius)
    );
    assert_eq!(
        Polygon::from_coords(&[0.0, 1.0], &[0.0, 1.0]),
        Err(GeometryError::TooFewVertices { found: 2 })
    );
}
