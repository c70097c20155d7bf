//! Shape and parameter vocabularies
//!
//! Closed enumerations for the shape nouns and measurement names, plus
//! the per-shape parameter allow-lists. Allow-lists are pure functions
//! of the shape kind so no per-request caching is needed.

use serde::{Deserialize, Serialize};

// ============================================================================
// SHAPE KINDS
// ============================================================================

/// The closed set of drawable shape categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Oval,
    Ellipse,
    Triangle,
    Square,
    Rectangle,
    Parallelogram,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Cube,
    Sphere,
}

impl ShapeKind {
    /// Get the shape noun as it appears in a lowered request
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Oval => "oval",
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Parallelogram => "parallelogram",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Heptagon => "heptagon",
            Self::Octagon => "octagon",
            Self::Cube => "cube",
            Self::Sphere => "sphere",
        }
    }

    /// Capitalized name, used in measurement-legality error messages
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Oval => "Oval",
            Self::Ellipse => "Ellipse",
            Self::Triangle => "Triangle",
            Self::Square => "Square",
            Self::Rectangle => "Rectangle",
            Self::Parallelogram => "Parallelogram",
            Self::Pentagon => "Pentagon",
            Self::Hexagon => "Hexagon",
            Self::Heptagon => "Heptagon",
            Self::Octagon => "Octagon",
            Self::Cube => "Cube",
            Self::Sphere => "Sphere",
        }
    }

    /// Resolve a lowered word to a shape kind, if it names one
    pub fn from_str(word: &str) -> Option<Self> {
        match word {
            "circle" => Some(Self::Circle),
            "oval" => Some(Self::Oval),
            "ellipse" => Some(Self::Ellipse),
            "triangle" => Some(Self::Triangle),
            "square" => Some(Self::Square),
            "rectangle" => Some(Self::Rectangle),
            "parallelogram" => Some(Self::Parallelogram),
            "pentagon" => Some(Self::Pentagon),
            "hexagon" => Some(Self::Hexagon),
            "heptagon" => Some(Self::Heptagon),
            "octagon" => Some(Self::Octagon),
            "cube" => Some(Self::Cube),
            "sphere" => Some(Self::Sphere),
            _ => None,
        }
    }

    /// Regular-polygon side count, for the polygon kinds only
    pub const fn polygon_sides(self) -> Option<i32> {
        match self {
            Self::Pentagon => Some(5),
            Self::Hexagon => Some(6),
            Self::Heptagon => Some(7),
            Self::Octagon => Some(8),
            _ => None,
        }
    }

    /// Kinds that are three-dimensional regardless of any grammar prefix
    pub const fn is_inherently_3d(self) -> bool {
        matches!(self, Self::Cube | Self::Sphere)
    }

    /// The measurements this kind accepts in a 2D request
    pub const fn allowed_parameters(self) -> &'static [ParameterKind] {
        use ParameterKind::*;
        match self {
            Self::Circle | Self::Sphere => &[Radius],
            Self::Pentagon | Self::Hexagon | Self::Heptagon | Self::Octagon => &[Radius, Side],
            Self::Oval => &[],
            Self::Parallelogram => &[Height, Width, Offset],
            Self::Rectangle => &[Height, Width],
            Self::Square => &[Height, Width, Side],
            Self::Triangle => &[Height, Width, Side],
            Self::Ellipse => &[OriginX, OriginY, RadiusX, RadiusY, Rotation],
            Self::Cube => &[Height, Width, Side, Depth],
        }
    }

    /// Check measurement legality, accounting for the 3D prefix
    ///
    /// Depth becomes legal for every kind once the request is flagged 3D.
    pub fn accepts_parameter(self, parameter: ParameterKind, is_3d: bool) -> bool {
        if is_3d && parameter == ParameterKind::Depth {
            return true;
        }
        self.allowed_parameters().contains(&parameter)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PARAMETER KINDS
// ============================================================================

/// The closed set of numeric measurement roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Radius,
    Height,
    Width,
    Side,
    Offset,
    RadiusX,
    RadiusY,
    OriginX,
    OriginY,
    Rotation,
    Depth,
}

impl ParameterKind {
    /// Get the measurement name as it appears in a lowered request
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Height => "height",
            Self::Width => "width",
            Self::Side => "side",
            Self::Offset => "offset",
            Self::RadiusX => "radiusx",
            Self::RadiusY => "radiusy",
            Self::OriginX => "originx",
            Self::OriginY => "originy",
            Self::Rotation => "rotation",
            Self::Depth => "depth",
        }
    }

    /// Capitalized name, used in measurement-legality error messages
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Radius => "Radius",
            Self::Height => "Height",
            Self::Width => "Width",
            Self::Side => "Side",
            Self::Offset => "Offset",
            Self::RadiusX => "RadiusX",
            Self::RadiusY => "RadiusY",
            Self::OriginX => "OriginX",
            Self::OriginY => "OriginY",
            Self::Rotation => "Rotation",
            Self::Depth => "Depth",
        }
    }

    /// Resolve a lowered word to a parameter kind, if it names one
    pub fn from_str(word: &str) -> Option<Self> {
        match word {
            "radius" => Some(Self::Radius),
            "height" => Some(Self::Height),
            "width" => Some(Self::Width),
            "side" => Some(Self::Side),
            "offset" => Some(Self::Offset),
            "radiusx" => Some(Self::RadiusX),
            "radiusy" => Some(Self::RadiusY),
            "originx" => Some(Self::OriginX),
            "originy" => Some(Self::OriginY),
            "rotation" => Some(Self::Rotation),
            "depth" => Some(Self::Depth),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TRIANGLE SUB-KINDS
// ============================================================================

/// Triangle classification, by qualifier or by geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
}

impl TriangleKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equilateral => "equilateral",
            Self::Isosceles => "isosceles",
        }
    }

    pub fn from_str(word: &str) -> Option<Self> {
        match word {
            "equilateral" => Some(Self::Equilateral),
            "isosceles" => Some(Self::Isosceles),
            _ => None,
        }
    }

    /// Classify from finished triangle geometry
    pub fn from_dimensions(height: i32, width: i32) -> Self {
        if height == width {
            Self::Equilateral
        } else {
            Self::Isosceles
        }
    }
}

impl std::fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
