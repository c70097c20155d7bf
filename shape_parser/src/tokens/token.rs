//! Token system for shape requests
//!
//! Structural keywords get dedicated tokens; shape names and parameter
//! names stay as plain words. The parser decides their meaning from
//! grammatical position, so the lexer never needs shape vocabulary.

use crate::grammar::keywords::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One whitespace-separated word of a lowered request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    // === STRUCTURAL KEYWORDS ===
    /// Skeleton words of the fixed grammar
    Keyword(Keyword),

    // === LITERALS ===
    /// Integer measurement value
    Integer(i32),

    // === WORDS ===
    /// Everything else, including shape names and parameter names.
    /// The parser determines semantic meaning from position. Values too
    /// large for i32 also land here and fail value parsing downstream.
    Word(String),
}

impl Token {
    /// Classify a single lowered word
    pub fn from_word(word: &str) -> Self {
        if let Some(keyword) = Keyword::from_str(word) {
            return Self::Keyword(keyword);
        }
        if let Ok(value) = word.parse::<i32>() {
            return Self::Integer(value);
        }
        Self::Word(word.to_string())
    }

    /// The word as it appeared in the lowered request
    pub fn as_request_str(&self) -> String {
        match self {
            Self::Keyword(keyword) => keyword.as_str().to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Word(word) => word.clone(),
        }
    }

    /// Check against a specific keyword
    pub fn is_keyword(&self, expected: Keyword) -> bool {
        matches!(self, Self::Keyword(kw) if *kw == expected)
    }

    pub fn is_article(&self) -> bool {
        matches!(self, Self::Keyword(kw) if kw.is_article())
    }

    pub fn is_conjunction(&self) -> bool {
        matches!(self, Self::Keyword(kw) if kw.is_conjunction())
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Keyword(kw) if kw.is_separator())
    }

    /// Integer value, if this token is one
    pub fn integer_value(&self) -> Option<i32> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_request_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_classification() {
        assert_eq!(Token::from_word("draw"), Token::Keyword(Keyword::Draw));
        assert_eq!(Token::from_word("with"), Token::Keyword(Keyword::With));
        assert_eq!(Token::from_word("an"), Token::Keyword(Keyword::An));
        assert_eq!(Token::from_word("3d"), Token::Keyword(Keyword::ThreeD));
    }

    #[test]
    fn test_integer_classification() {
        assert_eq!(Token::from_word("100"), Token::Integer(100));
        assert_eq!(Token::from_word("-5"), Token::Integer(-5));
        assert_eq!(Token::from_word("0"), Token::Integer(0));
    }

    #[test]
    fn test_overflow_stays_a_word() {
        // Too large for i32; must reach the clause parser as a word
        // so it reports an invalid value instead of crashing
        let token = Token::from_word("650000000000");
        assert_eq!(token, Token::Word("650000000000".to_string()));
    }

    #[test]
    fn test_shape_names_are_words() {
        assert_eq!(Token::from_word("hexagon"), Token::Word("hexagon".to_string()));
        assert_eq!(Token::from_word("radius"), Token::Word("radius".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        for word in ["draw", "a", "hexagon", "with", "radius", "of", "150"] {
            assert_eq!(Token::from_word(word).as_request_str(), word);
        }
    }

    #[test]
    fn test_predicates() {
        assert!(Token::from_word("a").is_article());
        assert!(Token::from_word("and").is_conjunction());
        assert!(Token::from_word("of").is_separator());
        assert!(Token::from_word("=").is_separator());
        assert!(!Token::from_word("hexagon").is_article());
        assert_eq!(Token::from_word("150").integer_value(), Some(150));
        assert_eq!(Token::from_word("hexagon").integer_value(), None);
    }
}
