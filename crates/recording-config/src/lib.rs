//! Recording Playback Settings
//!
//! Reads the plain `key=value` settings files that accompany recordings and
//! turns them into typed [`PlaybackSettings`]. Also installs the `tracing`
//! subscriber used by playback tools.

mod error;
mod key_value;
mod logging;
mod settings;

pub use error::SettingsError;
pub use key_value::{parse_configuration_file, parse_configuration_str};
pub use logging::init_logging;
pub use settings::PlaybackSettings;
