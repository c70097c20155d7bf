//! Configuration access for the logging subsystem
//!
//! Resource bounds are compile-time constants; output style and minimum
//! level are environment-driven user preferences.

use crate::config::constants::compile_time::logging::*;
use crate::logging::events::LogLevel;
use std::env;

/// Get minimum log level from the environment (defaults to Warning)
pub fn get_min_log_level() -> LogLevel {
    match env::var("SHAPE_LOG_LEVEL").ok().as_deref() {
        Some("error") => LogLevel::Error,
        Some("warn") | Some("warning") => LogLevel::Warning,
        Some("info") => LogLevel::Info,
        Some("debug") => LogLevel::Debug,
        _ => LogLevel::Warning,
    }
}

/// Check if structured (JSON) logging is requested
pub fn use_structured_logging() -> bool {
    env::var("SHAPE_LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

/// Event buffer size for the in-memory logger
pub fn get_event_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Truncate messages that exceed the message-length bound
pub fn clamp_message(message: &str) -> &str {
    if message.len() > MAX_LOG_MESSAGE_LENGTH {
        // Guaranteed ASCII-safe because the bound is far past any real message
        &message[..MAX_LOG_MESSAGE_LENGTH]
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_positive() {
        assert!(get_event_buffer_size() > 0);
    }

    #[test]
    fn test_clamp_message_short() {
        assert_eq!(clamp_message("hello"), "hello");
    }

    #[test]
    fn test_clamp_message_long() {
        let long = "x".repeat(MAX_LOG_MESSAGE_LENGTH + 100);
        assert_eq!(clamp_message(&long).len(), MAX_LOG_MESSAGE_LENGTH);
    }
}
