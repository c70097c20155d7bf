//! End-to-end parse pipeline
//!
//! Orchestrates lexical analysis, request parsing, and shape
//! construction, and folds every failure into the result descriptor.
//! `parse_and_emit` is total: it never panics or returns an error for
//! any input string.

pub mod error;

pub use error::PipelineError;

use crate::config::runtime::{CanvasSettings, ParserPreferences};
use crate::lexical::LexicalAnalyzer;
use crate::log_success;
use crate::logging::codes;
use crate::shapes::{build_shape, ShapeDescriptor};
use crate::syntax::RequestParser;

/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    // Validate lexical analyzer integration
    crate::lexical::init_lexical_analysis_logging()?;

    // Validate sentence grammar integration
    crate::syntax::init_syntax_logging()?;

    // Validate measurement legality integration
    crate::semantic_analysis::init_semantic_analysis_logging()?;

    // Validate shape construction integration
    crate::shapes::init_shape_logging()?;

    log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Complete pipeline validation succeeded",
        "stages_validated" => 4,
        "lexical_analysis" => true,
        "syntax_analysis" => true,
        "semantic_analysis" => true,
        "shape_construction" => true
    );

    Ok(())
}

/// One configured parse-and-emit pipeline.
///
/// Instances are cheap and hold no per-request state, so a single
/// pipeline can serve any number of calls.
pub struct ShapeParserPipeline {
    canvas: CanvasSettings,
    preferences: ParserPreferences,
}

impl ShapeParserPipeline {
    /// Pipeline with environment-driven settings
    pub fn new() -> Self {
        Self {
            canvas: CanvasSettings::default(),
            preferences: ParserPreferences::default(),
        }
    }

    /// Pipeline with explicit settings
    pub fn with_settings(canvas: CanvasSettings, preferences: ParserPreferences) -> Self {
        Self {
            canvas,
            preferences,
        }
    }

    /// The configured canvas bound used for polygon placement
    pub fn max_canvas_size(&self) -> i32 {
        self.canvas.max_canvas_size()
    }

    /// Parse a raw request and emit the result descriptor.
    ///
    /// All failures surface as a descriptor with `status == false` and
    /// a non-empty error message.
    pub fn parse_and_emit(&self, request: &str) -> ShapeDescriptor {
        match self.run(request) {
            Ok(descriptor) => {
                log_success!(codes::success::DESCRIPTOR_EMITTED, "Descriptor emitted",
                    "type" => descriptor.shape_type
                );
                descriptor
            }
            Err(error) => ShapeDescriptor::failure(error.to_string()),
        }
    }

    /// Run the stages, stopping at the first failing one
    fn run(&self, request: &str) -> Result<ShapeDescriptor, PipelineError> {
        let analyzer = LexicalAnalyzer::with_preferences(self.preferences.clone());
        let stream = analyzer.tokenize(request)?;

        let parser = RequestParser::with_preferences(self.preferences.clone());
        let parsed = parser.parse(stream)?;

        let shape = build_shape(&parsed)?;
        Ok(shape.emit(parsed.is_3d, self.canvas.max_canvas_size())?)
    }
}

impl Default for ShapeParserPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Point;
    use std::f64::consts::PI;

    fn pipeline() -> ShapeParserPipeline {
        ShapeParserPipeline::with_settings(
            CanvasSettings::new(1000).unwrap(),
            ParserPreferences::default(),
        )
    }

    #[test]
    fn test_validate_pipeline() {
        assert!(validate_pipeline().is_ok());
    }

    #[test]
    fn test_circle_request() {
        let descriptor = pipeline().parse_and_emit("draw a circle with a radius of 100");

        assert!(descriptor.status);
        assert_eq!(descriptor.shape_type, "circle");
        assert_eq!(descriptor.radius, 100);
        assert!(descriptor.points.is_none());
    }

    #[test]
    fn test_square_request() {
        let descriptor = pipeline().parse_and_emit("draw a square with a height of 150");

        assert!(descriptor.status);
        assert_eq!(descriptor.shape_type, "square");
        assert_eq!(
            descriptor.points,
            Some(vec![
                Point::new(0, 0),
                Point::new(150, 0),
                Point::new(150, 150),
                Point::new(0, 150),
            ])
        );
    }

    #[test]
    fn test_hexagon_request() {
        let descriptor = pipeline().parse_and_emit("draw a hexagon with a radius of 150");

        assert!(descriptor.status);
        assert_eq!(descriptor.shape_type, "6 sided polygon");
        assert_eq!(descriptor.sides, 6);
        assert_eq!(descriptor.radius, 150);
        assert_eq!(descriptor.points.as_ref().unwrap().len(), 6);
    }

    #[test]
    fn test_all_polygons() {
        for (noun, sides) in [
            ("pentagon", 5),
            ("hexagon", 6),
            ("heptagon", 7),
            ("octagon", 8),
        ] {
            let request = format!("draw a {} with a radius of 150", noun);
            let descriptor = pipeline().parse_and_emit(&request);

            assert!(descriptor.status, "failed: {}", request);
            assert_eq!(descriptor.shape_type, format!("{} sided polygon", sides));
            assert_eq!(descriptor.points.unwrap().len() as i32, sides);
        }
    }

    #[test]
    fn test_ellipse_request() {
        let descriptor = pipeline().parse_and_emit(
            "draw an ellipse with an originx of 200 and an originy of 200 \
             and a radiusx of 100 and a radiusy of 150 and a rotation of 45",
        );

        assert!(descriptor.status);
        assert_eq!(descriptor.shape_type, "ellipse");
        assert_eq!(descriptor.origin_x, 200);
        assert_eq!(descriptor.origin_y, 200);
        assert_eq!(descriptor.radius_x, 100);
        assert_eq!(descriptor.radius_y, 150);
        assert!((descriptor.rotation - PI / 4.0).abs() < 1e-12);
        assert!(descriptor.points.is_none());
    }

    #[test]
    fn test_triangle_requests() {
        let from_side =
            pipeline().parse_and_emit("draw a triangle with a side of 100");
        assert!(from_side.status);
        assert_eq!(from_side.shape_type, "equilateral triangle");
        assert_eq!(from_side.points.unwrap().len(), 3);

        let only_height =
            pipeline().parse_and_emit("draw a triangle with a height of 100");
        assert!(only_height.status);
        assert_eq!(only_height.width, 100);
        assert_eq!(only_height.points.unwrap().len(), 3);

        let isosceles = pipeline()
            .parse_and_emit("draw a triangle with a height of 100 and a width of 50");
        assert_eq!(isosceles.shape_type, "isosceles triangle");
    }

    #[test]
    fn test_cube_and_sphere() {
        let cube = pipeline().parse_and_emit("draw a cube with a side of 100");
        assert!(cube.status);
        assert_eq!(cube.depth, 100);
        assert!(cube.is_3d);

        let sphere = pipeline().parse_and_emit("draw a sphere with a radius of 100");
        assert!(sphere.status);
        assert_eq!(sphere.radius, 100);
        assert!(sphere.is_3d);
    }

    #[test]
    fn test_failures_produce_messages() {
        let cases = [
            "",
            "draw a circle",
            "fetch a stick with a length of 100",
            "draw a square with a radius of 100",
            "draw a circle with a radius of 100 and a radius of 200",
            "draw a circle with a radius of -5 and a height of 100",
            "complete gibberish that means absolutely nothing at all",
        ];

        for request in cases {
            let descriptor = pipeline().parse_and_emit(request);
            assert!(!descriptor.status, "unexpected success: {:?}", request);
            assert!(
                !descriptor.error_message.is_empty(),
                "empty error for: {:?}",
                request
            );
        }
    }

    #[test]
    fn test_empty_request_message() {
        let descriptor = pipeline().parse_and_emit("");
        assert_eq!(descriptor.error_message, "empty request");
    }

    #[test]
    fn test_overflowing_value_fails_cleanly() {
        let descriptor =
            pipeline().parse_and_emit("draw a circle with a radius of 650000000000");

        assert!(!descriptor.status);
        assert_eq!(
            descriptor.error_message,
            "Sorry - invalid value (650000000000)"
        );
    }

    #[test]
    fn test_oversized_polygon_radius_fails_cleanly() {
        let descriptor =
            pipeline().parse_and_emit("draw a hexagon with a radius of 2147483647");

        assert!(!descriptor.status);
        assert_eq!(
            descriptor.error_message,
            "Sorry - the requested size is too large to draw."
        );
    }

    #[test]
    fn test_oversized_parallelogram_fails_cleanly() {
        let descriptor = pipeline().parse_and_emit(
            "draw a parallelogram with a height of 5 and a width of 2000000000 \
             and an offset of 2000000000",
        );

        assert!(!descriptor.status);
        assert_eq!(
            descriptor.error_message,
            "Sorry - the requested size is too large to draw."
        );
    }

    #[test]
    fn test_sphere_without_radius_uses_sphere_wording() {
        let descriptor = pipeline().parse_and_emit("draw a 3d sphere with a depth of 5");

        assert!(!descriptor.status);
        assert_eq!(
            descriptor.error_message,
            "the radius cannot be negative or zero"
        );
    }

    #[test]
    fn test_illegal_parameter_names_shape() {
        let descriptor = pipeline().parse_and_emit("draw a square with a radius of 100");
        assert_eq!(
            descriptor.error_message,
            "Sorry - invalid measurement type (Radius) for Square"
        );
    }

    #[test]
    fn test_oval_always_fails() {
        let with_clause =
            pipeline().parse_and_emit("draw an oval with a radius of 100");
        assert!(!with_clause.status);
        assert_eq!(
            with_clause.error_message,
            "Sorry - invalid measurement type (Radius) for Oval"
        );
    }

    #[test]
    fn test_canvas_size_controls_polygon_origin() {
        let small = ShapeParserPipeline::with_settings(
            CanvasSettings::new(500).unwrap(),
            ParserPreferences::default(),
        );
        let descriptor = small.parse_and_emit("draw a hexagon with a radius of 100");

        let points = descriptor.points.unwrap();
        assert_eq!(points[0], Point::new(350, 250));
        assert_eq!(small.max_canvas_size(), 500);
    }

    #[test]
    fn test_non_ascii_input_fails_cleanly() {
        let descriptor = pipeline().parse_and_emit("нарисуй круг с радиусом сто");
        assert!(!descriptor.status);
        assert!(!descriptor.error_message.is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let descriptor = pipeline().parse_and_emit("DRAW A CIRCLE WITH A RADIUS OF 100");
        assert!(descriptor.status);
        assert_eq!(descriptor.radius, 100);
    }
}
