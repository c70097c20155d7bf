//! Sentence grammar errors
//!
//! Display strings are the user-facing failure reasons carried into the
//! result descriptor, so they name the offending word rather than a
//! position. Spans are kept separately for logging.

use crate::logging::codes;
use crate::utils::Span;
use thiserror::Error;

/// Errors detected while validating the sentence skeleton and clauses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("incomplete request")]
    IncompleteRequest { words: usize },

    #[error("Sorry - I can't '{verb}', I can only draw.")]
    NotADrawRequest { verb: String, span: Span },

    #[error("Sorry - I don't understand {word}")]
    MissingArticle { word: String, span: Span },

    #[error("Sorry - I don't know how to draw a {qualifier} {noun}")]
    UnknownTriangleKind {
        qualifier: String,
        noun: String,
        span: Span,
    },

    #[error("Sorry - I can't draw a {name}")]
    UnknownShape { name: String, span: Span },

    #[error("Sorry - I don't understand this request.")]
    RaggedClauses { remaining: usize, span: Span },

    #[error("Sorry - invalid measurement clause")]
    MalformedClause { span: Span },

    #[error("Sorry - invalid conjunction ({word})")]
    InvalidConjunction { word: String, span: Span },

    #[error("Unknown measurement type {word}")]
    UnknownParameter { word: String, span: Span },

    #[error("Sorry - invalid value ({word})")]
    InvalidValue { word: String, span: Span },

    #[error("Sorry - negative or zero values are not allowed.")]
    NonPositiveValue { value: i32, span: Span },
}

impl SyntaxError {
    pub fn incomplete_request(words: usize) -> Self {
        Self::IncompleteRequest { words }
    }

    pub fn not_a_draw_request(verb: impl Into<String>, span: Span) -> Self {
        Self::NotADrawRequest {
            verb: verb.into(),
            span,
        }
    }

    pub fn missing_article(word: impl Into<String>, span: Span) -> Self {
        Self::MissingArticle {
            word: word.into(),
            span,
        }
    }

    pub fn unknown_triangle_kind(
        qualifier: impl Into<String>,
        noun: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::UnknownTriangleKind {
            qualifier: qualifier.into(),
            noun: noun.into(),
            span,
        }
    }

    pub fn unknown_shape(name: impl Into<String>, span: Span) -> Self {
        Self::UnknownShape {
            name: name.into(),
            span,
        }
    }

    pub fn ragged_clauses(remaining: usize, span: Span) -> Self {
        Self::RaggedClauses { remaining, span }
    }

    pub fn malformed_clause(span: Span) -> Self {
        Self::MalformedClause { span }
    }

    pub fn invalid_conjunction(word: impl Into<String>, span: Span) -> Self {
        Self::InvalidConjunction {
            word: word.into(),
            span,
        }
    }

    pub fn unknown_parameter(word: impl Into<String>, span: Span) -> Self {
        Self::UnknownParameter {
            word: word.into(),
            span,
        }
    }

    pub fn invalid_value(word: impl Into<String>, span: Span) -> Self {
        Self::InvalidValue {
            word: word.into(),
            span,
        }
    }

    pub fn non_positive_value(value: i32, span: Span) -> Self {
        Self::NonPositiveValue { value, span }
    }

    /// Span of the words that triggered the error, where known
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::IncompleteRequest { .. } => None,
            Self::NotADrawRequest { span, .. }
            | Self::MissingArticle { span, .. }
            | Self::UnknownTriangleKind { span, .. }
            | Self::UnknownShape { span, .. }
            | Self::RaggedClauses { span, .. }
            | Self::MalformedClause { span }
            | Self::InvalidConjunction { span, .. }
            | Self::UnknownParameter { span, .. }
            | Self::InvalidValue { span, .. }
            | Self::NonPositiveValue { span, .. } => Some(*span),
        }
    }

    /// Error code for logging and classification
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::IncompleteRequest { .. } => codes::syntax::INCOMPLETE_REQUEST,
            Self::NotADrawRequest { .. } => codes::syntax::NOT_A_DRAW_REQUEST,
            Self::MissingArticle { .. } => codes::syntax::MISSING_ARTICLE,
            Self::UnknownTriangleKind { .. } => codes::syntax::UNKNOWN_TRIANGLE_KIND,
            Self::UnknownShape { .. } => codes::syntax::UNKNOWN_SHAPE,
            Self::RaggedClauses { .. } => codes::syntax::RAGGED_CLAUSES,
            Self::MalformedClause { .. } => codes::syntax::MALFORMED_CLAUSE,
            Self::InvalidConjunction { .. } => codes::syntax::INVALID_CONJUNCTION,
            Self::UnknownParameter { .. } => codes::syntax::UNKNOWN_PARAMETER,
            Self::InvalidValue { .. } => codes::syntax::INVALID_VALUE,
            Self::NonPositiveValue { .. } => codes::syntax::NON_POSITIVE_VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            SyntaxError::incomplete_request(5).to_string(),
            "incomplete request"
        );
        assert_eq!(
            SyntaxError::not_a_draw_request("paint", Span::word(0)).to_string(),
            "Sorry - I can't 'paint', I can only draw."
        );
        assert_eq!(
            SyntaxError::missing_article("the", Span::word(1)).to_string(),
            "Sorry - I don't understand the"
        );
        assert_eq!(
            SyntaxError::unknown_triangle_kind("equilateral", "square", Span::new(2, 4))
                .to_string(),
            "Sorry - I don't know how to draw a equilateral square"
        );
        assert_eq!(
            SyntaxError::unknown_shape("blob", Span::word(2)).to_string(),
            "Sorry - I can't draw a blob"
        );
        assert_eq!(
            SyntaxError::ragged_clauses(3, Span::new(3, 6)).to_string(),
            "Sorry - I don't understand this request."
        );
        assert_eq!(
            SyntaxError::malformed_clause(Span::new(3, 8)).to_string(),
            "Sorry - invalid measurement clause"
        );
        assert_eq!(
            SyntaxError::invalid_conjunction("plus", Span::word(3)).to_string(),
            "Sorry - invalid conjunction (plus)"
        );
        assert_eq!(
            SyntaxError::unknown_parameter("girth", Span::word(5)).to_string(),
            "Unknown measurement type girth"
        );
        assert_eq!(
            SyntaxError::invalid_value("10x", Span::word(7)).to_string(),
            "Sorry - invalid value (10x)"
        );
        assert_eq!(
            SyntaxError::non_positive_value(-5, Span::word(7)).to_string(),
            "Sorry - negative or zero values are not allowed."
        );
    }

    #[test]
    fn test_spans() {
        assert_eq!(SyntaxError::incomplete_request(5).span(), None);
        assert_eq!(
            SyntaxError::unknown_shape("blob", Span::word(2)).span(),
            Some(Span::word(2))
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SyntaxError::incomplete_request(5).error_code().as_str(),
            "E020"
        );
        assert_eq!(
            SyntaxError::malformed_clause(Span::dummy())
                .error_code()
                .as_str(),
            "E030"
        );
    }
}
