//! Conversion Error Types

use thiserror::Error;

/// Coarse failure category seen by the playback engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized value, or a nested conversion failed
    Unavailable,
    /// Recognized but intentionally not implemented
    Unsupported,
}

/// Errors raised while converting legacy records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Legacy tag outside the known vocabulary
    #[error("{what} value {raw:#x} is not recognized")]
    Unavailable { what: &'static str, raw: u32 },

    /// Legacy tag that is known but has no runtime counterpart
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// A field of an aggregate record failed to convert
    #[error("failed to convert {record}: {source}")]
    Nested {
        record: &'static str,
        #[source]
        source: Box<ConversionError>,
    },
}

impl ConversionError {
    /// Wrap a field failure. The aggregate reports `Unavailable` whatever the cause.
    pub fn nested(record: &'static str, source: ConversionError) -> Self {
        ConversionError::Nested {
            record,
            source: Box::new(source),
        }
    }

    /// Category of the failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::Unsupported(_) => ErrorKind::Unsupported,
            ConversionError::Unavailable { .. } | ConversionError::Nested { .. } => {
                ErrorKind::Unavailable
            }
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.kind() == ErrorKind::Unavailable
    }

    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }
}

/// Result alias for conversions
pub type Result<T> = std::result::Result<T, ConversionError>;
