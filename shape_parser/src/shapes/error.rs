//! Shape construction errors
//!
//! Raised while applying the fallback rules and building the concrete
//! shape. Display strings are the user-facing failure reasons.

use crate::grammar::vocabulary::{ParameterKind, ShapeKind};
use crate::logging::codes;
use thiserror::Error;

/// Errors detected while building a shape from accepted measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Invalid or missing size")]
    MissingSize { shape: ShapeKind },

    #[error("You must specify a cube size.")]
    MissingCubeSize,

    #[error("You must specify a radius or side length.")]
    MissingRadiusOrSide,

    #[error("The radius cannot be negative or zero.")]
    MissingRadius,

    // Sphere reports this in lowercase, without the period
    #[error("the radius cannot be negative or zero")]
    MissingSphereRadius,

    #[error("{} is either missing, negative or zero.", .field.display_name())]
    MissingField { field: ParameterKind },

    #[error("Both the height and width must be greater than zero.")]
    MissingRectangleDimensions,

    #[error("The number of sides must be between 5 and 8.")]
    SidesOutOfRange { sides: i32 },

    #[error("Sorry - the requested size is too large to draw.")]
    OversizedGeometry,

    #[error("Sorry - I can't draw a {} yet.", .kind.display_name())]
    UnsupportedKind { kind: ShapeKind },
}

impl ShapeError {
    pub fn missing_size(shape: ShapeKind) -> Self {
        Self::MissingSize { shape }
    }

    pub fn missing_field(field: ParameterKind) -> Self {
        Self::MissingField { field }
    }

    pub fn sides_out_of_range(sides: i32) -> Self {
        Self::SidesOutOfRange { sides }
    }

    pub fn unsupported_kind(kind: ShapeKind) -> Self {
        Self::UnsupportedKind { kind }
    }

    /// Error code for logging and classification
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::MissingSize { .. } | Self::MissingCubeSize => codes::shapes::MISSING_SIZE,
            Self::MissingRadiusOrSide | Self::MissingRadius | Self::MissingSphereRadius => {
                codes::shapes::MISSING_RADIUS
            }
            Self::MissingField { .. } | Self::MissingRectangleDimensions => {
                codes::shapes::MISSING_FIELD
            }
            Self::SidesOutOfRange { .. } => codes::shapes::SIDES_OUT_OF_RANGE,
            Self::OversizedGeometry => codes::shapes::GEOMETRY_OUT_OF_RANGE,
            Self::UnsupportedKind { .. } => codes::shapes::UNSUPPORTED_KIND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            ShapeError::missing_size(ShapeKind::Square).to_string(),
            "Invalid or missing size"
        );
        assert_eq!(
            ShapeError::MissingCubeSize.to_string(),
            "You must specify a cube size."
        );
        assert_eq!(
            ShapeError::MissingRadiusOrSide.to_string(),
            "You must specify a radius or side length."
        );
        assert_eq!(
            ShapeError::MissingRadius.to_string(),
            "The radius cannot be negative or zero."
        );
        assert_eq!(
            ShapeError::MissingSphereRadius.to_string(),
            "the radius cannot be negative or zero"
        );
        assert_eq!(
            ShapeError::OversizedGeometry.to_string(),
            "Sorry - the requested size is too large to draw."
        );
        assert_eq!(
            ShapeError::missing_field(ParameterKind::Offset).to_string(),
            "Offset is either missing, negative or zero."
        );
        assert_eq!(
            ShapeError::sides_out_of_range(9).to_string(),
            "The number of sides must be between 5 and 8."
        );
        assert_eq!(
            ShapeError::unsupported_kind(ShapeKind::Oval).to_string(),
            "Sorry - I can't draw a Oval yet."
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ShapeError::MissingCubeSize.error_code().as_str(),
            "E050"
        );
        assert_eq!(
            ShapeError::unsupported_kind(ShapeKind::Oval)
                .error_code()
                .as_str(),
            "E054"
        );
    }
}
