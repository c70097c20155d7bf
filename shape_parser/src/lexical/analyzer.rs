//! Request tokenizer
//!
//! Lower-cases the request, splits on whitespace (empty runs dropped),
//! and classifies each word. Requests past the resource limits are
//! rejected here so later stages never see unbounded input.

use crate::config::constants::compile_time::lexical::{MAX_REQUEST_LENGTH, MAX_WORD_COUNT};
use crate::config::runtime::ParserPreferences;
use crate::logging::codes;
use crate::tokens::{SpannedToken, Token, TokenStream};
use crate::utils::Span;
use crate::{log_debug, log_error, log_success};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors produced during tokenization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    #[error("empty request")]
    EmptyRequest,

    #[error("Sorry - this request is too long.")]
    RequestTooLong { length: usize, max: usize },

    #[error("Sorry - this request has too many words.")]
    TooManyWords { count: usize, max: usize },
}

impl LexerError {
    pub fn request_too_long(length: usize) -> Self {
        Self::RequestTooLong {
            length,
            max: MAX_REQUEST_LENGTH,
        }
    }

    pub fn too_many_words(count: usize) -> Self {
        Self::TooManyWords {
            count,
            max: MAX_WORD_COUNT,
        }
    }

    /// Error code for logging and classification
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::EmptyRequest => codes::lexical::EMPTY_REQUEST,
            Self::RequestTooLong { .. } => codes::lexical::REQUEST_TOO_LONG,
            Self::TooManyWords { .. } => codes::lexical::TOO_MANY_WORDS,
        }
    }
}

// ============================================================================
// ANALYZER
// ============================================================================

/// Tokenizer with runtime preferences
pub struct LexicalAnalyzer {
    preferences: ParserPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            preferences: ParserPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: ParserPreferences) -> Self {
        Self { preferences }
    }

    /// Tokenize one raw request string
    pub fn tokenize(&self, request: &str) -> Result<TokenStream, LexerError> {
        if request.len() > MAX_REQUEST_LENGTH {
            let error = LexerError::request_too_long(request.len());
            log_error!(error.error_code(), "Request exceeds length limit",
                "length" => request.len(),
                "max" => MAX_REQUEST_LENGTH
            );
            return Err(error);
        }

        let lowered = request.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        if words.is_empty() {
            log_error!(codes::lexical::EMPTY_REQUEST, "Request contains no words");
            return Err(LexerError::EmptyRequest);
        }

        if words.len() > MAX_WORD_COUNT {
            let error = LexerError::too_many_words(words.len());
            log_error!(error.error_code(), "Request exceeds word limit",
                "words" => words.len(),
                "max" => MAX_WORD_COUNT
            );
            return Err(error);
        }

        let tokens: Vec<SpannedToken> = words
            .iter()
            .enumerate()
            .map(|(index, word)| SpannedToken::new(Token::from_word(word), Span::word(index)))
            .collect();

        if self.preferences.log_token_stream {
            for token in &tokens {
                log_debug!("Token",
                    "word" => token.value,
                    "position" => token.span
                );
            }
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "words" => tokens.len()
        );

        Ok(TokenStream::new(tokens))
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
