//! Shape request parser and dispatcher
//!
//! Walks the sentence skeleton, then hands each five-word group to the
//! clause parser. Legality checks run per clause, in request order, so
//! the first violation in the sentence is the one reported.

use crate::config::constants::compile_time::syntax::{CLAUSE_WORD_COUNT, MIN_REQUEST_WORDS};
use crate::config::runtime::ParserPreferences;
use crate::grammar::ast::ShapeRequest;
use crate::grammar::keywords::Keyword;
use crate::grammar::vocabulary::{ShapeKind, TriangleKind};
use crate::logging::codes;
use crate::semantic_analysis;
use crate::syntax::clause;
use crate::syntax::error::SyntaxError;
use crate::syntax::ParseError;
use crate::tokens::{Token, TokenStream};
use crate::utils::Span;
use crate::{log_debug, log_error, log_success};

/// Sentence-level parser with runtime preferences
pub struct RequestParser {
    preferences: ParserPreferences,
}

impl RequestParser {
    pub fn new() -> Self {
        Self {
            preferences: ParserPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: ParserPreferences) -> Self {
        Self { preferences }
    }

    /// Parse a tokenized request into a validated `ShapeRequest`
    pub fn parse(&self, mut stream: TokenStream) -> Result<ShapeRequest, ParseError> {
        let mut request = self.parse_skeleton(&mut stream).map_err(|error| {
            self.log_error(&ParseError::Syntax(error.clone()));
            ParseError::Syntax(error)
        })?;

        self.parse_clauses(&mut stream, &mut request)?;

        log_success!(codes::success::REQUEST_PARSE_COMPLETE, "Request parsed",
            "shape" => request.kind,
            "measurements" => request.measurements.len()
        );

        Ok(request)
    }

    /// Validate the sentence skeleton and resolve the shape noun.
    ///
    /// On success the stream is positioned at the first clause word.
    fn parse_skeleton(&self, stream: &mut TokenStream) -> Result<ShapeRequest, SyntaxError> {
        if stream.len() < MIN_REQUEST_WORDS {
            return Err(SyntaxError::incomplete_request(stream.len()));
        }

        // Optional 2d/3d prefix after the article. Splice it out so the
        // rest of the skeleton sees identical word positions either way.
        let mut is_3d = false;
        let dimension_prefix = match stream.peek_ahead(2).map(|t| &t.value) {
            Some(Token::Keyword(kw)) if kw.is_dimension_prefix() => Some(*kw),
            _ => None,
        };
        if let Some(prefix) = dimension_prefix {
            is_3d = prefix == Keyword::ThreeD;
            stream.remove(2);
        }

        let verb = stream
            .peek_ahead(0)
            .ok_or_else(|| SyntaxError::incomplete_request(stream.len()))?;
        if !verb.value.is_keyword(Keyword::Draw) {
            return Err(SyntaxError::not_a_draw_request(
                verb.value.as_request_str(),
                verb.span,
            ));
        }

        let article = stream
            .peek_ahead(1)
            .ok_or_else(|| SyntaxError::incomplete_request(stream.len()))?;
        if !article.value.is_article() {
            return Err(SyntaxError::missing_article(
                article.value.as_request_str(),
                article.span,
            ));
        }

        let noun = stream
            .peek_ahead(2)
            .ok_or_else(|| SyntaxError::incomplete_request(stream.len()))?;

        let qualifier = match &noun.value {
            Token::Keyword(kw) if kw.is_triangle_qualifier() => Some(*kw),
            _ => None,
        };

        let (request, clause_start) = match qualifier {
            Some(kw) => {
                let noun_span = noun.span;
                let next = stream
                    .peek_ahead(3)
                    .ok_or_else(|| SyntaxError::incomplete_request(stream.len()))?;
                if next.value.as_request_str() != "triangle" {
                    return Err(SyntaxError::unknown_triangle_kind(
                        kw.as_str(),
                        next.value.as_request_str(),
                        noun_span.merge(next.span),
                    ));
                }
                let triangle_kind = match kw {
                    Keyword::Equilateral => TriangleKind::Equilateral,
                    _ => TriangleKind::Isosceles,
                };
                (
                    ShapeRequest::new(ShapeKind::Triangle, Some(triangle_kind), is_3d),
                    4,
                )
            }
            None => {
                let name = noun.value.as_request_str();
                let kind = ShapeKind::from_str(&name)
                    .ok_or_else(|| SyntaxError::unknown_shape(name, noun.span))?;
                (ShapeRequest::new(kind, None, is_3d), 3)
            }
        };

        // Everything after the noun must divide into five-word clauses
        let remaining = stream.len() - clause_start;
        if remaining % CLAUSE_WORD_COUNT != 0 {
            return Err(SyntaxError::ragged_clauses(
                remaining,
                Span::new(clause_start, stream.len()),
            ));
        }

        stream.skip(clause_start);
        Ok(request)
    }

    /// Parse and validate each clause, accumulating measurements
    fn parse_clauses(
        &self,
        stream: &mut TokenStream,
        request: &mut ShapeRequest,
    ) -> Result<(), ParseError> {
        while !stream.is_at_end() {
            let clause = stream
                .peek_slice(CLAUSE_WORD_COUNT)
                .ok_or_else(|| SyntaxError::malformed_clause(stream.remaining_span()))?;

            let measurement = clause::parse_clause(clause).map_err(|error| {
                self.log_error(&ParseError::Syntax(error.clone()));
                ParseError::Syntax(error)
            })?;

            semantic_analysis::validate_measurement(request, measurement.parameter)?;

            if self.preferences.log_clause_details {
                log_debug!("Accepted measurement",
                    "parameter" => measurement.parameter,
                    "value" => measurement.value
                );
            }

            request.push_measurement(measurement);
            stream.skip(CLAUSE_WORD_COUNT);
        }

        Ok(())
    }

    fn log_error(&self, error: &ParseError) {
        let span = match error {
            ParseError::Syntax(e) if self.preferences.include_position_in_errors => e.span(),
            _ => None,
        };
        match span {
            Some(span) => {
                log_error!(error.error_code(), &error.to_string(), span = span);
            }
            None => {
                log_error!(error.error_code(), &error.to_string());
            }
        }
    }
}

impl Default for RequestParser {
    fn default() -> Self {
        Self::new()
    }
}
