//! Shape construction from accepted measurements
//!
//! Applies the per-kind fallback rules: redundant size parameters are
//! tried in a fixed order, polygons can derive their radius from a side
//! length, and a triangle given one dimension mirrors it to the other.

use crate::grammar::ast::ShapeRequest;
use crate::grammar::vocabulary::{ParameterKind, ShapeKind};
use crate::log_success;
use crate::logging::codes;
use crate::shapes::error::ShapeError;
use crate::shapes::geometry;
use crate::shapes::variant::Shape;

/// Build the concrete shape for a parsed request
pub fn build_shape(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let shape = match request.kind {
        ShapeKind::Square => build_square(request)?,
        ShapeKind::Pentagon | ShapeKind::Hexagon | ShapeKind::Heptagon | ShapeKind::Octagon => {
            build_polygon(request)?
        }
        ShapeKind::Triangle => build_triangle(request)?,
        ShapeKind::Rectangle => build_rectangle(request)?,
        ShapeKind::Circle => build_circle(request)?,
        ShapeKind::Parallelogram => build_parallelogram(request)?,
        ShapeKind::Ellipse => build_ellipse(request)?,
        ShapeKind::Cube => build_cube(request)?,
        ShapeKind::Sphere => build_sphere(request)?,
        ShapeKind::Oval => return Err(ShapeError::unsupported_kind(ShapeKind::Oval)),
    };

    log_success!(codes::success::SHAPE_CONSTRUCTION_COMPLETE, "Shape constructed",
        "shape" => request.kind
    );

    Ok(shape)
}

/// Square size: height, then width, then side
fn build_square(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let size = request
        .positive_value_of(ParameterKind::Height)
        .or_else(|| request.positive_value_of(ParameterKind::Width))
        .or_else(|| request.positive_value_of(ParameterKind::Side))
        .ok_or_else(|| ShapeError::missing_size(ShapeKind::Square))?;

    Shape::square(size)
}

/// Polygon radius: direct, or derived from a side length
fn build_polygon(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let sides = request
        .kind
        .polygon_sides()
        .ok_or_else(|| ShapeError::unsupported_kind(request.kind))?;

    let radius = match request.positive_value_of(ParameterKind::Radius) {
        Some(radius) => radius,
        None => {
            let side_length = request
                .positive_value_of(ParameterKind::Side)
                .ok_or(ShapeError::MissingRadiusOrSide)?;
            let derived = geometry::circumradius(side_length, sides)
                .ok_or(ShapeError::MissingRadiusOrSide)?
                .round();
            if derived > f64::from(i32::MAX) {
                return Err(ShapeError::OversizedGeometry);
            }
            derived as i32
        }
    };

    Shape::polygon(radius, sides)
}

/// Triangle: side applies to both dimensions; a single height or width
/// mirrors to the other
fn build_triangle(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let (height, width) = match request.positive_value_of(ParameterKind::Side) {
        Some(side) => (side, side),
        None => (
            request.positive_value_of(ParameterKind::Height).unwrap_or(0),
            request.positive_value_of(ParameterKind::Width).unwrap_or(0),
        ),
    };

    let (height, width) = if height > 0 && width <= 0 {
        (height, height)
    } else if width > 0 && height <= 0 {
        (width, width)
    } else {
        (height, width)
    };

    if height <= 0 || width <= 0 {
        return Err(ShapeError::missing_size(ShapeKind::Triangle));
    }

    Shape::triangle(height, width)
}

fn build_rectangle(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let height = request
        .positive_value_of(ParameterKind::Height)
        .ok_or(ShapeError::MissingRectangleDimensions)?;
    let width = request
        .positive_value_of(ParameterKind::Width)
        .ok_or(ShapeError::MissingRectangleDimensions)?;

    Shape::rectangle(height, width)
}

fn build_circle(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let radius = request
        .positive_value_of(ParameterKind::Radius)
        .ok_or(ShapeError::MissingRadius)?;

    Shape::circle(radius)
}

fn build_parallelogram(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let height = request
        .positive_value_of(ParameterKind::Height)
        .ok_or_else(|| ShapeError::missing_field(ParameterKind::Height))?;
    let width = request
        .positive_value_of(ParameterKind::Width)
        .ok_or_else(|| ShapeError::missing_field(ParameterKind::Width))?;
    let offset = request
        .positive_value_of(ParameterKind::Offset)
        .ok_or_else(|| ShapeError::missing_field(ParameterKind::Offset))?;

    Shape::parallelogram(height, width, offset)
}

/// Ellipse rotation is optional and defaults to zero degrees
fn build_ellipse(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let origin_x = request
        .positive_value_of(ParameterKind::OriginX)
        .ok_or_else(|| ShapeError::missing_field(ParameterKind::OriginX))?;
    let origin_y = request
        .positive_value_of(ParameterKind::OriginY)
        .ok_or_else(|| ShapeError::missing_field(ParameterKind::OriginY))?;
    let radius_x = request
        .positive_value_of(ParameterKind::RadiusX)
        .ok_or_else(|| ShapeError::missing_field(ParameterKind::RadiusX))?;
    let radius_y = request
        .positive_value_of(ParameterKind::RadiusY)
        .ok_or_else(|| ShapeError::missing_field(ParameterKind::RadiusY))?;
    let rotation = request
        .positive_value_of(ParameterKind::Rotation)
        .unwrap_or(0);

    Shape::ellipse(origin_x, origin_y, radius_x, radius_y, rotation)
}

/// Cube size: height, then width, then depth, then side
fn build_cube(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let size = request
        .positive_value_of(ParameterKind::Height)
        .or_else(|| request.positive_value_of(ParameterKind::Width))
        .or_else(|| request.positive_value_of(ParameterKind::Depth))
        .or_else(|| request.positive_value_of(ParameterKind::Side))
        .ok_or(ShapeError::MissingCubeSize)?;

    Shape::cube(size)
}

fn build_sphere(request: &ShapeRequest) -> Result<Shape, ShapeError> {
    let radius = request
        .positive_value_of(ParameterKind::Radius)
        .ok_or(ShapeError::MissingSphereRadius)?;

    Shape::sphere(radius)
}
