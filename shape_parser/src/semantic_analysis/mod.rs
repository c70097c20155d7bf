//! Measurement legality analysis
//!
//! Runs per accepted clause, in request order: duplicates first, then
//! the per-shape allow-list. Both checks abort the request immediately
//! so a later valid clause can never mask an earlier violation.

use crate::grammar::ast::ShapeRequest;
use crate::grammar::vocabulary::{ParameterKind, ShapeKind};
use crate::logging::codes;
use crate::log_error;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Measurement legality errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("Sorry - duplicate measurement type ({})", .parameter.display_name())]
    DuplicateMeasurement { parameter: ParameterKind },

    #[error(
        "Sorry - invalid measurement type ({}) for {}",
        .parameter.display_name(),
        .shape.display_name()
    )]
    IllegalMeasurement {
        parameter: ParameterKind,
        shape: ShapeKind,
    },
}

impl SemanticError {
    pub fn duplicate_measurement(parameter: ParameterKind) -> Self {
        Self::DuplicateMeasurement { parameter }
    }

    pub fn illegal_measurement(parameter: ParameterKind, shape: ShapeKind) -> Self {
        Self::IllegalMeasurement { parameter, shape }
    }

    /// Error code for logging and classification
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::DuplicateMeasurement { .. } => codes::semantic::DUPLICATE_MEASUREMENT,
            Self::IllegalMeasurement { .. } => codes::semantic::ILLEGAL_MEASUREMENT,
        }
    }
}

/// Validate that measurement legality codes are present in the registry
pub fn init_semantic_analysis_logging() -> Result<(), String> {
    let test_codes = [
        codes::semantic::DUPLICATE_MEASUREMENT,
        codes::semantic::ILLEGAL_MEASUREMENT,
    ];

    for code in &test_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Semantic error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate one parsed measurement against the request built so far.
///
/// Call before pushing the measurement onto the request.
pub fn validate_measurement(
    request: &ShapeRequest,
    parameter: ParameterKind,
) -> Result<(), SemanticError> {
    if request.has_parameter(parameter) {
        let error = SemanticError::duplicate_measurement(parameter);
        log_error!(error.error_code(), "Duplicate measurement",
            "parameter" => parameter,
            "shape" => request.kind
        );
        return Err(error);
    }

    if !request.kind.accepts_parameter(parameter, request.is_3d) {
        let error = SemanticError::illegal_measurement(parameter, request.kind);
        log_error!(error.error_code(), "Measurement not legal for shape",
            "parameter" => parameter,
            "shape" => request.kind
        );
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::ast::Measurement;
    use crate::utils::Span;

    fn request_with(kind: ShapeKind, accepted: &[(ParameterKind, i32)]) -> ShapeRequest {
        let mut request = ShapeRequest::new(kind, None, false);
        for &(parameter, value) in accepted {
            request.push_measurement(Measurement::new(parameter, value, Span::dummy()));
        }
        request
    }

    #[test]
    fn test_first_measurement_accepted() {
        let request = request_with(ShapeKind::Circle, &[]);
        assert!(validate_measurement(&request, ParameterKind::Radius).is_ok());
    }

    #[test]
    fn test_duplicate_rejected() {
        let request = request_with(ShapeKind::Circle, &[(ParameterKind::Radius, 100)]);
        let error = validate_measurement(&request, ParameterKind::Radius).unwrap_err();

        assert_eq!(
            error,
            SemanticError::duplicate_measurement(ParameterKind::Radius)
        );
        assert_eq!(
            error.to_string(),
            "Sorry - duplicate measurement type (Radius)"
        );
    }

    #[test]
    fn test_duplicate_checked_before_legality() {
        // A repeated illegal parameter reports the duplicate, matching
        // the clause-order contract
        let mut request = request_with(ShapeKind::Circle, &[]);
        request.push_measurement(Measurement::new(ParameterKind::Height, 10, Span::dummy()));

        let error = validate_measurement(&request, ParameterKind::Height).unwrap_err();
        assert!(matches!(error, SemanticError::DuplicateMeasurement { .. }));
    }

    #[test]
    fn test_illegal_parameter_rejected() {
        let request = request_with(ShapeKind::Square, &[]);
        let error = validate_measurement(&request, ParameterKind::Radius).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Sorry - invalid measurement type (Radius) for Square"
        );
    }

    #[test]
    fn test_oval_accepts_nothing() {
        let request = request_with(ShapeKind::Oval, &[]);
        for parameter in [
            ParameterKind::Radius,
            ParameterKind::Height,
            ParameterKind::Width,
        ] {
            assert!(validate_measurement(&request, parameter).is_err());
        }
    }

    #[test]
    fn test_depth_legal_when_3d() {
        let mut request = ShapeRequest::new(ShapeKind::Square, None, true);
        assert!(validate_measurement(&request, ParameterKind::Depth).is_ok());

        request = ShapeRequest::new(ShapeKind::Square, None, false);
        assert!(validate_measurement(&request, ParameterKind::Depth).is_err());
    }
}
