//! Lexical analysis module
//!
//! Lowers a raw request string and splits it into word tokens with
//! word-index spans. Resource limits are compile-time constants applied
//! before any grammar work happens.

pub mod analyzer;

pub use analyzer::{LexerError, LexicalAnalyzer};

use crate::tokens::TokenStream;

/// Tokenize a raw request with default preferences
pub fn tokenize(request: &str) -> Result<TokenStream, LexerError> {
    let analyzer = LexicalAnalyzer::new();
    analyzer.tokenize(request)
}

/// Validate that lexical error codes are present in the registry
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::lexical::EMPTY_REQUEST,
        crate::logging::codes::lexical::REQUEST_TOO_LONG,
        crate::logging::codes::lexical::TOO_MANY_WORDS,
    ];

    for code in &test_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
