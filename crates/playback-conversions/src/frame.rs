//! Frame geometry and per-frame metadata

use legacy_format::ImageInfo;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};
use crate::mapping::{Format, Stream};

/// Sensor width that is addressed with a wider row pitch
pub const PADDED_SENSOR_WIDTH: u32 = 628;
/// Row width used for stride computation on that sensor
pub const PADDED_ROW_WIDTH: u32 = 640;

/// Image layout in runtime terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Width as recorded (never corrected)
    pub width: u32,
    pub height: u32,
    /// Row pitch in bytes, computed from the corrected width
    pub stride: u64,
    /// Bytes per pixel
    pub bpp: u32,
    pub format: Format,
}

/// Width used for the row pitch. The 628 pixel sensor is laid out in 640 pixel rows.
pub fn corrected_width(width: u32) -> u32 {
    if width == PADDED_SENSOR_WIDTH {
        PADDED_ROW_WIDTH
    } else {
        width
    }
}

impl FrameGeometry {
    /// Derive the runtime geometry of a recorded image
    pub fn from_image_info(source: &ImageInfo) -> Result<Self> {
        let format = Format::try_from(source.format)
            .map_err(|e| ConversionError::nested("image info", e))?;
        let bpp = format.bytes_per_pixel();

        Ok(Self {
            width: source.width,
            height: source.height,
            stride: u64::from(corrected_width(source.width)) * u64::from(bpp),
            bpp,
            format,
        })
    }
}

/// Runtime metadata of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameStamp {
    pub stream: Stream,
    /// Capture time in microseconds
    pub time_stamp: f64,
    pub number: u32,
}
