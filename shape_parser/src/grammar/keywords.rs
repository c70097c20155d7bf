//! Structural keywords of the request grammar
//!
//! Only the fixed skeleton words live here. Shape names and parameter
//! names are open vocabulary handled as words and resolved against the
//! tables in `vocabulary`.

use serde::{Deserialize, Serialize};

/// Structural keywords of the fixed sentence grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === REQUEST VERB ===
    Draw,

    // === ARTICLES ===
    A,
    An,

    // === CLAUSE CONJUNCTIONS ===
    With,
    And,

    // === CLAUSE SEPARATORS ===
    Of,
    Equals,

    // === DIMENSION PREFIXES ===
    TwoD,
    ThreeD,

    // === TRIANGLE QUALIFIERS ===
    Equilateral,
    Isosceles,
}

impl Keyword {
    /// Get the exact string representation as it appears in a lowered request
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::A => "a",
            Self::An => "an",
            Self::With => "with",
            Self::And => "and",
            Self::Of => "of",
            Self::Equals => "=",
            Self::TwoD => "2d",
            Self::ThreeD => "3d",
            Self::Equilateral => "equilateral",
            Self::Isosceles => "isosceles",
        }
    }

    /// Resolve a lowered word to a keyword, if it is one
    pub fn from_str(word: &str) -> Option<Self> {
        match word {
            "draw" => Some(Self::Draw),
            "a" => Some(Self::A),
            "an" => Some(Self::An),
            "with" => Some(Self::With),
            "and" => Some(Self::And),
            "of" => Some(Self::Of),
            "=" => Some(Self::Equals),
            "2d" => Some(Self::TwoD),
            "3d" => Some(Self::ThreeD),
            "equilateral" => Some(Self::Equilateral),
            "isosceles" => Some(Self::Isosceles),
            _ => None,
        }
    }

    /// Articles introduce both the shape noun and a clause's parameter
    pub const fn is_article(self) -> bool {
        matches!(self, Self::A | Self::An)
    }

    /// Conjunctions open a measurement clause
    pub const fn is_conjunction(self) -> bool {
        matches!(self, Self::With | Self::And)
    }

    /// Separators sit between a parameter name and its value
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Of | Self::Equals)
    }

    /// Dimension prefixes may appear after the article
    pub const fn is_dimension_prefix(self) -> bool {
        matches!(self, Self::TwoD | Self::ThreeD)
    }

    /// Triangle qualifiers may precede the shape noun
    pub const fn is_triangle_qualifier(self) -> bool {
        matches!(self, Self::Equilateral | Self::Isosceles)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let all = [
            Keyword::Draw,
            Keyword::A,
            Keyword::An,
            Keyword::With,
            Keyword::And,
            Keyword::Of,
            Keyword::Equals,
            Keyword::TwoD,
            Keyword::ThreeD,
            Keyword::Equilateral,
            Keyword::Isosceles,
        ];

        for kw in all {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(Keyword::from_str("paint"), None);
        assert_eq!(Keyword::from_str("the"), None);
        assert_eq!(Keyword::from_str(""), None);
    }

    #[test]
    fn test_classification() {
        assert!(Keyword::A.is_article());
        assert!(Keyword::An.is_article());
        assert!(!Keyword::And.is_article());

        assert!(Keyword::With.is_conjunction());
        assert!(Keyword::And.is_conjunction());
        assert!(!Keyword::Of.is_conjunction());

        assert!(Keyword::Of.is_separator());
        assert!(Keyword::Equals.is_separator());

        assert!(Keyword::ThreeD.is_dimension_prefix());
        assert!(Keyword::Equilateral.is_triangle_qualifier());
    }
}
