//! Source location tracking for shape requests
//!
//! A request is a single sentence, so locations are tracked as word
//! positions rather than line/column pairs. Accurate word indices are
//! what makes error messages like "invalid conjunction" actionable.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A span of words in the request sentence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Span {
    /// Index of the first word covered (0-based, inclusive)
    pub start: usize,
    /// Index one past the last word covered (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span over `[start, end)`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span start must not be after end");
        Self { start, end }
    }

    /// Span covering a single word
    pub fn word(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Placeholder span for errors with no useful location
    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Number of words covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers no words
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() <= 1 {
            write!(f, "word {}", self.start + 1)
        } else {
            write!(f, "words {}-{}", self.start + 1, self.end)
        }
    }
}

/// A value paired with the span of the words it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    /// Map the inner value, keeping the span
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }
}
