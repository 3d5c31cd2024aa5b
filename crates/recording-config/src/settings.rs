//! Typed playback settings

use std::collections::HashMap;
use std::path::Path;

use config::Config;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::key_value::parse_configuration_file;

/// Keys read from a settings file; anything else is ignored
const KNOWN_KEYS: [&str; 2] = ["log_level", "skip_unsupported_streams"];

/// Settings for converting a recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// `tracing` filter directive, e.g. `info` or `playback_conversions=debug`
    pub log_level: String,

    /// Drop recognized-but-unsupported streams (aux color) instead of
    /// failing the whole recording
    pub skip_unsupported_streams: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            skip_unsupported_streams: true,
        }
    }
}

impl PlaybackSettings {
    /// Build settings from parsed `key=value` pairs on top of the defaults.
    /// Unknown keys are ignored.
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("skip_unsupported_streams", defaults.skip_unsupported_streams)?;

        for key in KNOWN_KEYS {
            if let Some(value) = pairs.get(key) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load settings from a `key=value` file. A missing file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::from_pairs(&parse_configuration_file(path))
    }

    /// Install a `tracing` subscriber with this log level
    pub fn init_logging(&self) -> Result<(), SettingsError> {
        crate::logging::init_logging(&self.log_level)
    }
}
