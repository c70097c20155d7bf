//! Sentence grammar definitions
//!
//! Structural keywords and the closed shape/parameter vocabularies.
//! Shape names and parameter names are resolved here; the structural
//! skeleton words (draw, articles, conjunctions) live in `keywords`.

pub mod ast;
pub mod keywords;
pub mod vocabulary;

pub use ast::{Measurement, ShapeRequest};
pub use keywords::Keyword;
pub use vocabulary::{ParameterKind, ShapeKind, TriangleKind};
