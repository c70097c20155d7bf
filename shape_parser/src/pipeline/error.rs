//! Umbrella error for the whole pipeline
//!
//! Wraps the stage errors so orchestration can use `?` end to end. The
//! Display text is exactly the stage error's text, which is what lands
//! in the failure descriptor's `errorMessage`.

use crate::lexical::LexerError;
use crate::logging::codes;
use crate::shapes::ShapeError;
use crate::syntax::ParseError;
use thiserror::Error;

/// Any error produced while turning a raw request into a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl PipelineError {
    /// Error code for logging and classification
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::Lexer(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Shape(e) => e.error_code(),
        }
    }
}
