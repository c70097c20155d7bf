//! Normalized result descriptor
//!
//! The single value returned to callers for both success and failure.
//! Field names follow the wire format the rendering client expects, so
//! serialization renames to camelCase.

use crate::shapes::geometry::Point;
use serde::{Deserialize, Serialize};

/// The descriptor handed back to the request layer.
///
/// A successful descriptor has `status == true` and an empty error
/// message; a failed one has `status == false`, a non-empty message,
/// and default values everywhere else.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    #[serde(rename = "type")]
    pub shape_type: String,
    pub is_3d: bool,
    pub status: bool,
    pub error_message: String,

    pub radius: i32,
    pub sides: i32,
    pub depth: i32,
    pub height: i32,
    pub width: i32,
    pub offset: i32,

    /// Vertices, absent for shapes described by scalars only
    pub points: Option<Vec<Point>>,

    pub radius_x: i32,
    pub radius_y: i32,
    pub origin_x: i32,
    pub origin_y: i32,
    /// Radians
    pub rotation: f64,

    pub description: String,
}

impl ShapeDescriptor {
    /// Start a successful descriptor for the given type label
    pub fn success(shape_type: impl Into<String>) -> Self {
        Self {
            shape_type: shape_type.into(),
            status: true,
            ..Self::default()
        }
    }

    /// A failure descriptor carrying the human-readable reason
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self {
            status: false,
            error_message: error_message.into(),
            ..Self::default()
        }
    }
}
