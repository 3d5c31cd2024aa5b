//! Warning sink handed to the metadata assembler

use std::sync::Arc;

/// Receiver for warnings raised during conversion
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "playback_conversions", "{}", message);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &S {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<S: WarningSink + ?Sized> WarningSink for Arc<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<S: WarningSink + ?Sized> WarningSink for Box<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}
