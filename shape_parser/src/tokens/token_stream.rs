//! Word-indexed token stream for the request parser
//!
//! Spans are word indices into the lowered request, so every error can
//! point at the word that caused it.

use crate::tokens::token::Token;
use crate::utils::{Span, Spanned};

/// A token with its word-index span
pub type SpannedToken = Spanned<Token>;

/// Sequential token stream over one request sentence
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<SpannedToken>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // === CORE NAVIGATION ===

    /// Get the current token with its span
    pub fn current(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.position)
    }

    /// Get the current token value (without span)
    pub fn current_token(&self) -> Option<&Token> {
        self.current().map(|spanned| &spanned.value)
    }

    /// Get the span of the current token
    pub fn current_span(&self) -> Option<Span> {
        self.current().map(|spanned| spanned.span)
    }

    /// Peek ahead by n positions without advancing
    pub fn peek_ahead(&self, n: usize) -> Option<&SpannedToken> {
        self.tokens.get(self.position + n)
    }

    /// Advance to the next token
    pub fn advance(&mut self) -> Option<&SpannedToken> {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Consume the current token, returning it
    pub fn consume(&mut self) -> Option<SpannedToken> {
        let token = self.current().cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Check if we're at the end of the stream
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Total number of tokens in the stream
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    // === POSITION MANAGEMENT ===

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens from the current position to the end
    pub fn remaining_count(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    /// Drop the token at an index and rewind to the start.
    ///
    /// Used to splice out the 2d/3d prefix so the rest of the grammar
    /// sees the same word positions in both variants.
    pub fn remove(&mut self, index: usize) -> Option<SpannedToken> {
        if index < self.tokens.len() {
            let removed = self.tokens.remove(index);
            self.position = 0;
            Some(removed)
        } else {
            None
        }
    }

    // === CLAUSE ACCESS ===

    /// Borrow the next n tokens without advancing
    pub fn peek_slice(&self, n: usize) -> Option<&[SpannedToken]> {
        let end = self.position + n;
        if end <= self.tokens.len() {
            Some(&self.tokens[self.position..end])
        } else {
            None
        }
    }

    /// Advance past n tokens
    pub fn skip(&mut self, n: usize) {
        self.position = (self.position + n).min(self.tokens.len());
    }

    /// Span covering the remaining tokens
    pub fn remaining_span(&self) -> Span {
        match (self.current_span(), self.tokens.last()) {
            (Some(start), Some(last)) => start.merge(last.span),
            (Some(start), None) => start,
            _ => Span::dummy(),
        }
    }
}
