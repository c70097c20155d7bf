//! Pure geometry calculators
//!
//! Vertex math shared by the shape variants. Everything here is a pure
//! function over its arguments; canvas placement comes in as an origin
//! parameter rather than being read from configuration.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A 2D integer point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Vertices of a regular polygon around an origin.
///
/// Vertex 0 lies on the positive-x axis from the origin; vertices are
/// ordered counter-clockwise. Returns None for degenerate inputs or
/// when a vertex coordinate falls outside the i32 range.
pub fn polygon_vertices(origin: Point, radius: i32, sides: i32) -> Option<Vec<Point>> {
    if radius <= 0 || sides < 3 {
        return None;
    }

    let two_pi = 2.0 * PI;
    (0..sides)
        .map(|i| {
            let angle = two_pi * f64::from(i) / f64::from(sides);
            let x = i64::from(origin.x) + (f64::from(radius) * angle.cos()).round() as i64;
            let y = i64::from(origin.y) + (f64::from(radius) * angle.sin()).round() as i64;
            match (i32::try_from(x), i32::try_from(y)) {
                (Ok(x), Ok(y)) => Some(Point::new(x, y)),
                _ => None,
            }
        })
        .collect()
}

/// Circumradius of a regular polygon from its side length.
///
/// Returns None for degenerate inputs.
pub fn circumradius(side_length: i32, sides: i32) -> Option<f64> {
    if side_length <= 0 || sides < 3 {
        return None;
    }

    let angle = PI / f64::from(sides);
    Some(f64::from(side_length) / (2.0 * angle.sin()))
}

/// Corners of an axis-aligned square anchored at the origin
pub fn square_corners(height: i32) -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(height, 0),
        Point::new(height, height),
        Point::new(0, height),
    ]
}

/// Corners of an axis-aligned rectangle anchored at the origin
pub fn rectangle_corners(height: i32, width: i32) -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(width, 0),
        Point::new(width, height),
        Point::new(0, height),
    ]
}

/// Points of a triangle with its apex centered over the base
pub fn triangle_points(height: i32, width: i32) -> Vec<Point> {
    vec![
        Point::new(width / 2, 0),
        Point::new(width, height),
        Point::new(0, height),
    ]
}

/// Corners of a parallelogram with the top edge shifted by the offset.
///
/// Returns None when the shifted corner falls outside the i32 range.
pub fn parallelogram_points(height: i32, width: i32, offset: i32) -> Option<Vec<Point>> {
    let shifted = offset.checked_add(width)?;
    Some(vec![
        Point::new(offset, 0),
        Point::new(shifted, 0),
        Point::new(width, height),
        Point::new(0, height),
    ])
}

/// Degrees to radians, for the ellipse rotation field
pub fn degrees_to_radians(degrees: i32) -> f64 {
    f64::from(degrees) * (PI / 180.0)
}
