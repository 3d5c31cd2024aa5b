//! Settings Error Types

use thiserror::Error;

/// Errors while loading settings or setting up logging
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Values could not be assembled into typed settings
    #[error("Invalid settings: {0}")]
    Config(#[from] config::ConfigError),

    /// Log filter directive did not parse
    #[error("Invalid log filter '{filter}': {reason}")]
    LogFilter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("Logging already initialized")]
    LoggingInitialized,
}
