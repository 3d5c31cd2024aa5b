//! Logging setup

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::SettingsError;

/// Install the global `tracing` subscriber.
///
/// `filter` takes `EnvFilter` directives. Fails if a subscriber is already set.
pub fn init_logging(filter: &str) -> Result<(), SettingsError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|e| SettingsError::LogFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| SettingsError::LoggingInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_filter() {
        let err = init_logging("playback_conversions=verbose").unwrap_err();
        assert!(matches!(err, SettingsError::LogFilter { .. }));
    }
}
