//! Shape variants, geometry, and the result descriptor

pub mod build;
pub mod descriptor;
pub mod error;
pub mod geometry;
pub mod variant;

pub use build::build_shape;
pub use descriptor::ShapeDescriptor;
pub use error::ShapeError;
pub use geometry::Point;
pub use variant::Shape;

/// Validate that shape construction error codes are present in the registry
pub fn init_shape_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::shapes::MISSING_SIZE,
        crate::logging::codes::shapes::MISSING_RADIUS,
        crate::logging::codes::shapes::MISSING_FIELD,
        crate::logging::codes::shapes::SIDES_OUT_OF_RANGE,
        crate::logging::codes::shapes::GEOMETRY_OUT_OF_RANGE,
        crate::logging::codes::shapes::UNSUPPORTED_KIND,
    ];

    for code in &test_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Shape error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
