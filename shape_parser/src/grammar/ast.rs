//! Parsed request structures
//!
//! The dispatcher builds a `ShapeRequest` incrementally while walking
//! the sentence; it is read-only once parsing finishes.

use crate::grammar::vocabulary::{ParameterKind, ShapeKind, TriangleKind};
use crate::utils::Span;
use serde::{Deserialize, Serialize};

/// One accepted measurement clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub parameter: ParameterKind,
    pub value: i32,
    /// Words of the originating clause
    pub span: Span,
}

impl Measurement {
    pub fn new(parameter: ParameterKind, value: i32, span: Span) -> Self {
        Self {
            parameter,
            value,
            span,
        }
    }
}

/// A fully parsed shape request, ready for shape construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRequest {
    pub kind: ShapeKind,
    pub triangle_kind: Option<TriangleKind>,
    pub is_3d: bool,
    pub measurements: Vec<Measurement>,
}

impl ShapeRequest {
    pub fn new(kind: ShapeKind, triangle_kind: Option<TriangleKind>, is_3d: bool) -> Self {
        Self {
            kind,
            triangle_kind,
            // Cube and sphere are 3D whatever the prefix said
            is_3d: is_3d || kind.is_inherently_3d(),
            measurements: Vec::new(),
        }
    }

    pub fn push_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    pub fn has_parameter(&self, parameter: ParameterKind) -> bool {
        self.measurements.iter().any(|m| m.parameter == parameter)
    }

    /// Value of a measurement, if one was given
    pub fn value_of(&self, parameter: ParameterKind) -> Option<i32> {
        self.measurements
            .iter()
            .find(|m| m.parameter == parameter)
            .map(|m| m.value)
    }

    /// Value of a measurement, only if it is positive.
    ///
    /// The clause parser already rejects non-positive values, so this
    /// is the fallback-rule reading used during shape construction.
    pub fn positive_value_of(&self, parameter: ParameterKind) -> Option<i32> {
        self.value_of(parameter).filter(|&v| v > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherent_3d_promotion() {
        let cube = ShapeRequest::new(ShapeKind::Cube, None, false);
        assert!(cube.is_3d);

        let sphere = ShapeRequest::new(ShapeKind::Sphere, None, false);
        assert!(sphere.is_3d);

        let square = ShapeRequest::new(ShapeKind::Square, None, false);
        assert!(!square.is_3d);

        let square_3d = ShapeRequest::new(ShapeKind::Square, None, true);
        assert!(square_3d.is_3d);
    }

    #[test]
    fn test_measurement_lookup() {
        let mut request = ShapeRequest::new(ShapeKind::Rectangle, None, false);
        request.push_measurement(Measurement::new(ParameterKind::Height, 100, Span::word(3)));
        request.push_measurement(Measurement::new(ParameterKind::Width, 200, Span::word(8)));

        assert!(request.has_parameter(ParameterKind::Height));
        assert!(!request.has_parameter(ParameterKind::Radius));
        assert_eq!(request.value_of(ParameterKind::Width), Some(200));
        assert_eq!(request.value_of(ParameterKind::Radius), None);
        assert_eq!(request.positive_value_of(ParameterKind::Height), Some(100));
    }
}
