// RUNTIME PREFERENCES (User Experience)

use crate::config::constants::compile_time::shapes::DEFAULT_MAX_CANVAS_SIZE;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Errors loading or validating runtime settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_canvas_size must be greater than zero (got {0})")]
    InvalidCanvasSize(i32),
}

/// Canvas bounds injected into geometry construction.
///
/// The core never owns a canvas; the drawing surface belongs to the
/// caller. Only the maximum dimension matters here, because regular
/// polygons are centred at half of it so their vertices stay on-canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Maximum canvas dimension in pixels
    pub max_canvas_size: i32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            max_canvas_size: env::var("SHAPE_MAX_CANVAS_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CANVAS_SIZE),
        }
    }
}

impl CanvasSettings {
    /// Create settings with an explicit canvas bound
    pub fn new(max_canvas_size: i32) -> Result<Self, SettingsError> {
        let settings = Self { max_canvas_size };
        settings.validate()?;
        Ok(settings)
    }

    /// The configured canvas bound
    pub fn max_canvas_size(&self) -> i32 {
        self.max_canvas_size
    }

    /// Load settings from a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(document)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, SettingsError> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }

    /// Reject non-positive canvas bounds
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_canvas_size <= 0 {
            return Err(SettingsError::InvalidCanvasSize(self.max_canvas_size));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserPreferences {
    /// Whether to log each accepted measurement clause
    pub log_clause_details: bool,

    /// Whether to log the token stream produced by the lexer
    pub log_token_stream: bool,

    /// Whether to include word positions in error log context
    pub include_position_in_errors: bool,
}

impl Default for ParserPreferences {
    fn default() -> Self {
        Self {
            log_clause_details: env::var("SHAPE_LOG_CLAUSE_DETAILS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_token_stream: env::var("SHAPE_LOG_TOKEN_STREAM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_position_in_errors: env::var("SHAPE_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
