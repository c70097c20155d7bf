//! Sentence grammar parsing
//!
//! Validates the fixed request skeleton, delegates each five-word
//! measurement clause to the clause parser, and runs measurement
//! legality checks clause by clause in request order.

pub mod clause;
pub mod error;
pub mod parser;

pub use error::SyntaxError;
pub use parser::RequestParser;

use crate::semantic_analysis::SemanticError;
use thiserror::Error;

/// Any error that can stop request parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl ParseError {
    /// Error code for logging and classification
    pub fn error_code(&self) -> crate::logging::codes::Code {
        match self {
            Self::Syntax(e) => e.error_code(),
            Self::Semantic(e) => e.error_code(),
        }
    }
}

/// Validate that syntax error codes are present in the registry
pub fn init_syntax_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::syntax::INCOMPLETE_REQUEST,
        crate::logging::codes::syntax::UNKNOWN_SHAPE,
        crate::logging::codes::syntax::MALFORMED_CLAUSE,
        crate::logging::codes::syntax::INVALID_VALUE,
    ];

    for code in &test_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
