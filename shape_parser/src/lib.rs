// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod semantic_analysis;
pub mod shapes;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use config::{CanvasSettings, ParserPreferences};
pub use pipeline::ShapeParserPipeline;
pub use shapes::{Point, ShapeDescriptor};

/// Parse a raw request with environment-driven settings.
///
/// Convenience wrapper over [`ShapeParserPipeline`]; total over any
/// input string.
pub fn parse_and_emit(request: &str) -> ShapeDescriptor {
    ShapeParserPipeline::new().parse_and_emit(request)
}
