//! Runtime vocabulary and the legacy tag mappings
//!
//! Each runtime enum converts from its legacy counterpart with `TryFrom`.
//! Coordinate systems convert with `From`: unknown values pass through.
//! Tags are matched on their raw value, so `Unknown(v)` with a known `v`
//! maps like the named variant.

use legacy_format as legacy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConversionError, Result};

/// Legacy ticks are 100ns, runtime time is in microseconds
pub const TICKS_TO_RUNTIME: f64 = 0.1;

/// Runtime stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stream {
    Color,
    Depth,
    /// Plain or left infrared imager
    Infrared,
    /// Right infrared imager
    Infrared2,
}

impl TryFrom<legacy::StreamType> for Stream {
    type Error = ConversionError;

    fn try_from(source: legacy::StreamType) -> Result<Self> {
        match legacy::StreamType::from(source.raw()) {
            legacy::StreamType::Color => Ok(Stream::Color),
            legacy::StreamType::Depth => Ok(Stream::Depth),
            legacy::StreamType::Ir => Ok(Stream::Infrared),
            legacy::StreamType::Left => Ok(Stream::Infrared),
            legacy::StreamType::Right => Ok(Stream::Infrared2),
            legacy::StreamType::AuxColor => Err(ConversionError::Unsupported("aux color stream")),
            legacy::StreamType::Unknown(raw) => {
                debug!("Rejecting stream type {:#x}", raw);
                Err(ConversionError::Unavailable { what: "stream type", raw })
            }
        }
    }
}

/// Runtime pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Any,
    Z16,
    Xyz32f,
    Yuyv,
    Rgb8,
    Rgba8,
    Bgr8,
    Bgra8,
    Y8,
    Y16,
    Raw10,
}

impl Format {
    /// Bytes per pixel; zero when the format has no whole-byte pixel size
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            Format::Any => 0,
            Format::Z16 => 2,
            Format::Xyz32f => 12,
            Format::Yuyv => 2,
            Format::Rgb8 | Format::Bgr8 => 3,
            Format::Rgba8 | Format::Bgra8 => 4,
            Format::Y8 => 1,
            Format::Y16 => 2,
            // Packed, four pixels in five bytes
            Format::Raw10 => 0,
        }
    }
}

impl TryFrom<legacy::PixelFormat> for Format {
    type Error = ConversionError;

    fn try_from(source: legacy::PixelFormat) -> Result<Self> {
        match legacy::PixelFormat::from(source.raw()) {
            legacy::PixelFormat::Any => Ok(Format::Any),
            legacy::PixelFormat::Depth => Ok(Format::Z16),
            legacy::PixelFormat::DepthF32 => Ok(Format::Xyz32f),
            legacy::PixelFormat::Yuy2 => Ok(Format::Yuyv),
            legacy::PixelFormat::Rgb => Ok(Format::Rgb8),
            legacy::PixelFormat::Rgba => Ok(Format::Rgba8),
            legacy::PixelFormat::Bgr => Ok(Format::Bgr8),
            legacy::PixelFormat::Bgra => Ok(Format::Bgra8),
            legacy::PixelFormat::Y8 => Ok(Format::Y8),
            legacy::PixelFormat::Y16 => Ok(Format::Y16),
            legacy::PixelFormat::Raw => Ok(Format::Raw10),
            legacy::PixelFormat::Unknown(raw) => {
                debug!("Rejecting pixel format {:#x}", raw);
                Err(ConversionError::Unavailable { what: "pixel format", raw })
            }
        }
    }
}

/// Runtime frame compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compression {
    None,
    H264,
    Lzo,
}

impl TryFrom<legacy::CompressionType> for Compression {
    type Error = ConversionError;

    fn try_from(source: legacy::CompressionType) -> Result<Self> {
        match legacy::CompressionType::from(source.raw()) {
            legacy::CompressionType::None => Ok(Compression::None),
            legacy::CompressionType::H264 => Ok(Compression::H264),
            legacy::CompressionType::Lzo => Ok(Compression::Lzo),
            legacy::CompressionType::Unknown(raw) => {
                Err(ConversionError::Unavailable { what: "compression type", raw })
            }
        }
    }
}

/// Runtime device rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl TryFrom<legacy::Rotation> for Rotation {
    type Error = ConversionError;

    fn try_from(source: legacy::Rotation) -> Result<Self> {
        match legacy::Rotation::from(source.raw()) {
            legacy::Rotation::Deg0 => Ok(Rotation::Deg0),
            legacy::Rotation::Deg90 => Ok(Rotation::Deg90),
            legacy::Rotation::Deg180 => Ok(Rotation::Deg180),
            legacy::Rotation::Deg270 => Ok(Rotation::Deg270),
            legacy::Rotation::Unknown(raw) => {
                Err(ConversionError::Unavailable { what: "rotation", raw })
            }
        }
    }
}

/// Runtime coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSystem {
    RearDefault,
    RearOpenCv,
    FrontDefault,
    /// Raw value carried over from the recording
    Unknown(u32),
}

impl CoordinateSystem {
    /// Numeric representation used by the runtime
    pub fn raw(&self) -> u32 {
        match self {
            CoordinateSystem::RearDefault => 0x100,
            CoordinateSystem::RearOpenCv => 0x200,
            CoordinateSystem::FrontDefault => 0x001,
            CoordinateSystem::Unknown(raw) => *raw,
        }
    }
}

// Unlike every other tag, unknown coordinate systems are kept as-is rather
// than rejected.
impl From<legacy::CoordinateSystem> for CoordinateSystem {
    fn from(source: legacy::CoordinateSystem) -> Self {
        match legacy::CoordinateSystem::from(source.raw()) {
            legacy::CoordinateSystem::RearDefault => CoordinateSystem::RearDefault,
            legacy::CoordinateSystem::RearOpenCv => CoordinateSystem::RearOpenCv,
            legacy::CoordinateSystem::FrontDefault => CoordinateSystem::FrontDefault,
            legacy::CoordinateSystem::Unknown(raw) => CoordinateSystem::Unknown(raw),
        }
    }
}

/// Rescale a legacy tick count to runtime time
pub fn convert_timestamp(ticks: u64) -> f64 {
    ticks as f64 * TICKS_TO_RUNTIME
}
