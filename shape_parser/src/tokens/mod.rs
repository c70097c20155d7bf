//! Token types and token stream management

pub mod token;
pub mod token_stream;

pub use token::Token;
pub use token_stream::{SpannedToken, TokenStream};
