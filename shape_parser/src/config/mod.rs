pub mod constants;
pub mod runtime;

pub use runtime::{CanvasSettings, ParserPreferences, SettingsError};
