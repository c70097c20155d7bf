//! Shape variants
//!
//! One tagged-union case per drawable kind, each carrying its own
//! validated fields. Construction validates the fields; emission only
//! fails when a computed vertex falls outside the i32 range.

use crate::grammar::vocabulary::{ParameterKind, TriangleKind};
use crate::config::constants::compile_time::shapes::{MAX_POLYGON_SIDES, MIN_POLYGON_SIDES};
use crate::shapes::descriptor::ShapeDescriptor;
use crate::shapes::error::ShapeError;
use crate::shapes::geometry::{self, Point};
use serde::{Deserialize, Serialize};

/// A finalized, validated shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Square {
        height: i32,
    },
    Rectangle {
        height: i32,
        width: i32,
    },
    Triangle {
        height: i32,
        width: i32,
        kind: TriangleKind,
    },
    Parallelogram {
        height: i32,
        width: i32,
        offset: i32,
    },
    Polygon {
        radius: i32,
        sides: i32,
    },
    Circle {
        radius: i32,
    },
    Ellipse {
        origin_x: i32,
        origin_y: i32,
        radius_x: i32,
        radius_y: i32,
        /// Radians
        rotation: f64,
    },
    Cube {
        size: i32,
    },
    Sphere {
        radius: i32,
    },
}

impl Shape {
    pub fn square(height: i32) -> Result<Self, ShapeError> {
        if height <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::Height));
        }
        Ok(Self::Square { height })
    }

    pub fn rectangle(height: i32, width: i32) -> Result<Self, ShapeError> {
        if height <= 0 || width <= 0 {
            return Err(ShapeError::MissingRectangleDimensions);
        }
        Ok(Self::Rectangle { height, width })
    }

    /// Triangle classification is geometric: equal sides are equilateral
    pub fn triangle(height: i32, width: i32) -> Result<Self, ShapeError> {
        if height <= 0 || width <= 0 {
            return Err(ShapeError::MissingRectangleDimensions);
        }
        Ok(Self::Triangle {
            height,
            width,
            kind: TriangleKind::from_dimensions(height, width),
        })
    }

    pub fn parallelogram(height: i32, width: i32, offset: i32) -> Result<Self, ShapeError> {
        if height <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::Height));
        }
        if width <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::Width));
        }
        if offset <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::Offset));
        }
        Ok(Self::Parallelogram {
            height,
            width,
            offset,
        })
    }

    pub fn polygon(radius: i32, sides: i32) -> Result<Self, ShapeError> {
        if radius <= 0 {
            return Err(ShapeError::MissingRadius);
        }
        if !(MIN_POLYGON_SIDES..=MAX_POLYGON_SIDES).contains(&sides) {
            return Err(ShapeError::sides_out_of_range(sides));
        }
        Ok(Self::Polygon { radius, sides })
    }

    pub fn circle(radius: i32) -> Result<Self, ShapeError> {
        if radius <= 0 {
            return Err(ShapeError::MissingRadius);
        }
        Ok(Self::Circle { radius })
    }

    /// Rotation arrives in degrees and is stored in radians.
    ///
    /// A negative rotation clamps to zero; the clause parser already
    /// rejects non-positive values so the clamp is a no-op safeguard.
    pub fn ellipse(
        origin_x: i32,
        origin_y: i32,
        radius_x: i32,
        radius_y: i32,
        rotation_degrees: i32,
    ) -> Result<Self, ShapeError> {
        if origin_x <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::OriginX));
        }
        if origin_y <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::OriginY));
        }
        if radius_x <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::RadiusX));
        }
        if radius_y <= 0 {
            return Err(ShapeError::missing_field(ParameterKind::RadiusY));
        }
        let rotation_degrees = rotation_degrees.max(0);
        Ok(Self::Ellipse {
            origin_x,
            origin_y,
            radius_x,
            radius_y,
            rotation: geometry::degrees_to_radians(rotation_degrees),
        })
    }

    pub fn cube(size: i32) -> Result<Self, ShapeError> {
        if size <= 0 {
            return Err(ShapeError::MissingCubeSize);
        }
        Ok(Self::Cube { size })
    }

    pub fn sphere(radius: i32) -> Result<Self, ShapeError> {
        if radius <= 0 {
            return Err(ShapeError::MissingSphereRadius);
        }
        Ok(Self::Sphere { radius })
    }

    /// Produce the normalized descriptor for this shape.
    ///
    /// `max_canvas_size` places the polygon origin at the canvas center
    /// so calculated vertices cannot go negative. Fails only when a
    /// vertex coordinate would not fit in an i32.
    pub fn emit(&self, is_3d: bool, max_canvas_size: i32) -> Result<ShapeDescriptor, ShapeError> {
        let descriptor = match *self {
            Self::Square { height } => {
                let mut descriptor = ShapeDescriptor::success("square");
                descriptor.height = height;
                descriptor.points = Some(geometry::square_corners(height));
                descriptor.is_3d = is_3d;
                descriptor
            }
            Self::Rectangle { height, width } => {
                let mut descriptor = ShapeDescriptor::success("rectangle");
                descriptor.height = height;
                descriptor.width = width;
                descriptor.points = Some(geometry::rectangle_corners(height, width));
                descriptor.is_3d = is_3d;
                descriptor
            }
            Self::Triangle {
                height,
                width,
                kind,
            } => {
                let mut descriptor =
                    ShapeDescriptor::success(format!("{} triangle", kind.as_str()));
                descriptor.height = height;
                descriptor.width = width;
                descriptor.points = Some(geometry::triangle_points(height, width));
                descriptor.is_3d = is_3d;
                descriptor
            }
            Self::Parallelogram {
                height,
                width,
                offset,
            } => {
                let points = geometry::parallelogram_points(height, width, offset)
                    .ok_or(ShapeError::OversizedGeometry)?;
                let mut descriptor = ShapeDescriptor::success("parallelogram");
                descriptor.height = height;
                descriptor.width = width;
                descriptor.offset = offset;
                descriptor.points = Some(points);
                descriptor.is_3d = is_3d;
                descriptor
            }
            Self::Polygon { radius, sides } => {
                let center = max_canvas_size / 2;
                let origin = Point::new(center, center);
                let points = geometry::polygon_vertices(origin, radius, sides)
                    .ok_or(ShapeError::OversizedGeometry)?;
                let mut descriptor =
                    ShapeDescriptor::success(format!("{} sided polygon", sides));
                descriptor.points = Some(points);
                descriptor.radius = radius;
                descriptor.sides = sides;
                descriptor.is_3d = is_3d;
                descriptor
            }
            Self::Circle { radius } => {
                let mut descriptor = ShapeDescriptor::success("circle");
                descriptor.radius = radius;
                descriptor.is_3d = is_3d;
                descriptor
            }
            Self::Ellipse {
                origin_x,
                origin_y,
                radius_x,
                radius_y,
                rotation,
            } => {
                let mut descriptor = ShapeDescriptor::success("ellipse");
                descriptor.origin_x = origin_x;
                descriptor.origin_y = origin_y;
                descriptor.radius_x = radius_x;
                descriptor.radius_y = radius_y;
                descriptor.rotation = rotation;
                descriptor.is_3d = is_3d;
                descriptor
            }
            Self::Cube { size } => {
                let mut descriptor = ShapeDescriptor::success("cube");
                descriptor.depth = size;
                descriptor.is_3d = true;
                descriptor
            }
            Self::Sphere { radius } => {
                let mut descriptor = ShapeDescriptor::success("sphere");
                descriptor.radius = radius;
                descriptor.is_3d = true;
                descriptor
            }
        };

        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_square_emit() {
        let descriptor = Shape::square(150).unwrap().emit(false, 1000).unwrap();

        assert_eq!(descriptor.shape_type, "square");
        assert_eq!(descriptor.height, 150);
        assert_eq!(
            descriptor.points,
            Some(vec![
                Point::new(0, 0),
                Point::new(150, 0),
                Point::new(150, 150),
                Point::new(0, 150),
            ])
        );
        assert!(descriptor.status);
    }

    #[test]
    fn test_square_rejects_non_positive() {
        assert!(Shape::square(0).is_err());
        assert!(Shape::square(-10).is_err());
    }

    #[test]
    fn test_triangle_classification() {
        let equilateral = Shape::triangle(100, 100).unwrap();
        assert!(matches!(
            equilateral,
            Shape::Triangle {
                kind: TriangleKind::Equilateral,
                ..
            }
        ));
        assert_eq!(
            equilateral.emit(false, 1000).unwrap().shape_type,
            "equilateral triangle"
        );

        let isosceles = Shape::triangle(100, 50).unwrap();
        assert_eq!(isosceles.emit(false, 1000).unwrap().shape_type, "isosceles triangle");
        assert_eq!(isosceles.emit(false, 1000).unwrap().points.unwrap().len(), 3);
    }

    #[test]
    fn test_polygon_emit_centered_on_canvas() {
        let descriptor = Shape::polygon(150, 6).unwrap().emit(false, 1000).unwrap();

        assert_eq!(descriptor.shape_type, "6 sided polygon");
        assert_eq!(descriptor.sides, 6);
        assert_eq!(descriptor.radius, 150);

        let points = descriptor.points.unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(650, 500));
    }

    #[test]
    fn test_polygon_emit_rejects_unrepresentable_vertices() {
        // Centered origin plus a maximal radius cannot fit in an i32
        let shape = Shape::polygon(i32::MAX, 6).unwrap();
        assert_eq!(shape.emit(false, 1000), Err(ShapeError::OversizedGeometry));
    }

    #[test]
    fn test_parallelogram_emit_rejects_unrepresentable_corner() {
        let shape = Shape::parallelogram(5, 2_000_000_000, 2_000_000_000).unwrap();
        assert_eq!(shape.emit(false, 1000), Err(ShapeError::OversizedGeometry));
    }

    #[test]
    fn test_polygon_sides_bounds() {
        assert!(Shape::polygon(100, 4).is_err());
        assert!(Shape::polygon(100, 9).is_err());
        assert!(Shape::polygon(100, 5).is_ok());
        assert!(Shape::polygon(100, 8).is_ok());
        assert!(Shape::polygon(0, 6).is_err());
    }

    #[test]
    fn test_ellipse_rotation_converted() {
        let shape = Shape::ellipse(200, 200, 100, 150, 45).unwrap();
        let descriptor = shape.emit(false, 1000).unwrap();

        assert_eq!(descriptor.shape_type, "ellipse");
        assert!((descriptor.rotation - PI / 4.0).abs() < 1e-12);
        assert!(descriptor.points.is_none());
    }

    #[test]
    fn test_ellipse_field_validation() {
        assert_eq!(
            Shape::ellipse(0, 200, 100, 150, 45).unwrap_err().to_string(),
            "OriginX is either missing, negative or zero."
        );
        assert_eq!(
            Shape::ellipse(200, 200, 100, -1, 45).unwrap_err().to_string(),
            "RadiusY is either missing, negative or zero."
        );
    }

    #[test]
    fn test_cube_and_sphere_are_3d() {
        let cube = Shape::cube(100).unwrap().emit(false, 1000).unwrap();
        assert_eq!(cube.shape_type, "cube");
        assert_eq!(cube.depth, 100);
        assert!(cube.is_3d);
        assert!(cube.points.is_none());

        let sphere = Shape::sphere(100).unwrap().emit(false, 1000).unwrap();
        assert_eq!(sphere.shape_type, "sphere");
        assert_eq!(sphere.radius, 100);
        assert!(sphere.is_3d);
    }

    #[test]
    fn test_circle_emit_has_no_points() {
        let descriptor = Shape::circle(100).unwrap().emit(false, 1000).unwrap();

        assert_eq!(descriptor.shape_type, "circle");
        assert_eq!(descriptor.radius, 100);
        assert!(descriptor.points.is_none());
        assert!(!descriptor.is_3d);
    }

    #[test]
    fn test_parallelogram_emit() {
        let descriptor = Shape::parallelogram(100, 200, 50).unwrap().emit(false, 1000).unwrap();

        assert_eq!(descriptor.shape_type, "parallelogram");
        assert_eq!(descriptor.points.as_ref().unwrap().len(), 4);
        assert_eq!(descriptor.points.unwrap()[0], Point::new(50, 0));
    }
}
