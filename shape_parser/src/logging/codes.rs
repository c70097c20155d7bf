//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions. Code constants live next to their
//! behavioral metadata so stages cannot drift out of sync.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const EMPTY_REQUEST: Code = Code::new("E010");
    pub const REQUEST_TOO_LONG: Code = Code::new("E011");
    pub const TOO_MANY_WORDS: Code = Code::new("E012");
}

/// Sentence grammar error codes
pub mod syntax {
    use super::Code;

    pub const INCOMPLETE_REQUEST: Code = Code::new("E020");
    pub const NOT_A_DRAW_REQUEST: Code = Code::new("E021");
    pub const MISSING_ARTICLE: Code = Code::new("E022");
    pub const UNKNOWN_TRIANGLE_KIND: Code = Code::new("E023");
    pub const UNKNOWN_SHAPE: Code = Code::new("E024");
    pub const RAGGED_CLAUSES: Code = Code::new("E025");
    pub const MALFORMED_CLAUSE: Code = Code::new("E030");
    pub const INVALID_CONJUNCTION: Code = Code::new("E031");
    pub const UNKNOWN_PARAMETER: Code = Code::new("E032");
    pub const INVALID_VALUE: Code = Code::new("E033");
    pub const NON_POSITIVE_VALUE: Code = Code::new("E034");
}

/// Measurement legality error codes
pub mod semantic {
    use super::Code;

    pub const DUPLICATE_MEASUREMENT: Code = Code::new("E040");
    pub const ILLEGAL_MEASUREMENT: Code = Code::new("E041");
}

/// Shape construction error codes
pub mod shapes {
    use super::Code;

    pub const MISSING_SIZE: Code = Code::new("E050");
    pub const MISSING_RADIUS: Code = Code::new("E051");
    pub const MISSING_FIELD: Code = Code::new("E052");
    pub const SIDES_OUT_OF_RANGE: Code = Code::new("E053");
    pub const UNSUPPORTED_KIND: Code = Code::new("E054");
    pub const GEOMETRY_OUT_OF_RANGE: Code = Code::new("E055");
}

/// Success codes (informational)
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I010");
    pub const REQUEST_PARSE_COMPLETE: Code = Code::new("I020");
    pub const SHAPE_CONSTRUCTION_COMPLETE: Code = Code::new("I030");
    pub const DESCRIPTOR_EMITTED: Code = Code::new("I040");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    METADATA_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Internal error in the parser itself",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Subsystem failed to initialize",
            ),
            ErrorMetadata::new(
                "E010",
                "Lexical",
                Severity::Low,
                true,
                "Request string was empty",
            ),
            ErrorMetadata::new(
                "E011",
                "Lexical",
                Severity::Medium,
                true,
                "Request exceeds the maximum length",
            ),
            ErrorMetadata::new(
                "E012",
                "Lexical",
                Severity::Medium,
                true,
                "Request exceeds the maximum word count",
            ),
            ErrorMetadata::new(
                "E020",
                "Syntax",
                Severity::Low,
                true,
                "Request has too few words to carry a shape and a clause",
            ),
            ErrorMetadata::new(
                "E021",
                "Syntax",
                Severity::Low,
                true,
                "Request verb is not 'draw'",
            ),
            ErrorMetadata::new(
                "E022",
                "Syntax",
                Severity::Low,
                true,
                "Expected the article 'a' or 'an'",
            ),
            ErrorMetadata::new(
                "E023",
                "Syntax",
                Severity::Low,
                true,
                "Triangle qualifier applied to a non-triangle noun",
            ),
            ErrorMetadata::new(
                "E024",
                "Syntax",
                Severity::Low,
                true,
                "Shape name is not in the supported set",
            ),
            ErrorMetadata::new(
                "E025",
                "Syntax",
                Severity::Low,
                true,
                "Trailing words do not divide into five-word clauses",
            ),
            ErrorMetadata::new(
                "E030",
                "Syntax",
                Severity::Low,
                true,
                "Measurement clause does not match the clause template",
            ),
            ErrorMetadata::new(
                "E031",
                "Syntax",
                Severity::Low,
                true,
                "Clause conjunction is not 'with' or 'and'",
            ),
            ErrorMetadata::new(
                "E032",
                "Syntax",
                Severity::Low,
                true,
                "Measurement name is not a recognized parameter",
            ),
            ErrorMetadata::new(
                "E033",
                "Syntax",
                Severity::Low,
                true,
                "Measurement value is not a representable integer",
            ),
            ErrorMetadata::new(
                "E034",
                "Syntax",
                Severity::Low,
                true,
                "Measurement value is zero or negative",
            ),
            ErrorMetadata::new(
                "E040",
                "Semantic",
                Severity::Low,
                true,
                "Measurement type appears more than once in the request",
            ),
            ErrorMetadata::new(
                "E041",
                "Semantic",
                Severity::Low,
                true,
                "Measurement type is not legal for the requested shape",
            ),
            ErrorMetadata::new(
                "E050",
                "Shapes",
                Severity::Low,
                true,
                "No usable size measurement for the shape",
            ),
            ErrorMetadata::new(
                "E051",
                "Shapes",
                Severity::Low,
                true,
                "Neither radius nor side length was provided",
            ),
            ErrorMetadata::new(
                "E052",
                "Shapes",
                Severity::Low,
                true,
                "Required shape field is missing or non-positive",
            ),
            ErrorMetadata::new(
                "E053",
                "Shapes",
                Severity::Medium,
                true,
                "Polygon side count outside the supported range",
            ),
            ErrorMetadata::new(
                "E054",
                "Shapes",
                Severity::Low,
                true,
                "Shape kind is recognized but cannot be drawn",
            ),
            ErrorMetadata::new(
                "E055",
                "Shapes",
                Severity::Low,
                true,
                "Vertex coordinates exceed the representable range",
            ),
        ];

        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

/// Look up full metadata for a code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    registry().get(code)
}

/// Get error description, or a generic marker for unknown codes
pub fn get_description(code: &str) -> &'static str {
    registry()
        .get(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

/// Get error category
pub fn get_category(code: &str) -> &'static str {
    registry()
        .get(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}

/// Get error severity (unknown codes default to Low)
pub fn get_severity(code: &str) -> Severity {
    registry()
        .get(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Low)
}

/// Check if error is recoverable (unknown codes default to recoverable)
pub fn is_recoverable(code: &str) -> bool {
    registry().get(code).map(|m| m.recoverable).unwrap_or(true)
}
