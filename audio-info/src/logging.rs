//! Logging configuration
//!
//! Centralized tracing setup for applications embedding the SDK. TUI
//! front-ends need a silent default so diagnostics never contaminate the
//! rendered screen; development and debugging get stderr output.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No output - the default for TUI front-ends
    Silent,
    /// Compact stderr output for development
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// Call early in the application lifecycle, before constructing an
/// `AudioInfoSystem`.
///
/// # Environment Variables
///
/// - `AUDIO_LOG_LEVEL`: override the log level (error, warn, info, debug, trace)
/// - `RUST_LOG`: standard filter fallback when `AUDIO_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => {
            // No subscriber - all diagnostics are dropped
            Ok(())
        }
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .with(env_filter("info"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(env_filter("debug"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from the `AUDIO_LOG_MODE` environment variable
///
/// Recognized values: "silent", "development", "debug". Defaults to
/// silent when unset or unrecognized, so TUI front-ends stay clean.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("AUDIO_LOG_MODE").as_deref() {
        Ok("development") => LoggingMode::Development,
        Ok("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    };

    init_logging(mode)
}

/// Convenience function for TUI front-ends
pub fn init_silent() -> Result<(), LoggingError> {
    init_logging(LoggingMode::Silent)
}

/// Check if a tracing subscriber has already been installed
///
/// Useful to avoid double-initialization in host applications that
/// configure tracing themselves.
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

/// Build the level filter, preferring `AUDIO_LOG_LEVEL` over `RUST_LOG`
fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("AUDIO_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
