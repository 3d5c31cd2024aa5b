//! Decoded disk records

use crate::fixed_string::FixedString;
use crate::sizes;
use crate::tags::{CompressionType, CoordinateSystem, PixelFormat, Rotation, StreamType};

/// File header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Magic identifier
    pub id: u32,
    /// Container version
    pub version: i32,
    /// Offset of the first frame record in bytes
    pub first_frame_offset: i32,
    /// Number of recorded streams
    pub nstreams: i32,
    pub coordinate_system: CoordinateSystem,
}

/// Per-stream chunk description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub stype: StreamType,
    /// Number of frames recorded for the stream
    pub nframes: i32,
    pub ctype: CompressionType,
}

/// Image layout of a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

/// Stream profile as recorded
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreamProfileDisk {
    pub image_info: ImageInfo,
    /// Minimum and maximum frame rate
    pub frame_rate: [f32; 2],
}

/// The five stream slots of a recorded profile set. A slot whose
/// `image_info.format` is zero was not recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreamProfileSetDisk {
    pub color: StreamProfileDisk,
    pub depth: StreamProfileDisk,
    pub ir: StreamProfileDisk,
    pub left: StreamProfileDisk,
    pub right: StreamProfileDisk,
}

/// Device information block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfoDisk {
    pub name: FixedString<{ sizes::DEVICE_NAME }>,
    pub serial: FixedString<{ sizes::DEVICE_SERIAL }>,
    pub firmware: [u32; sizes::FIRMWARE_PARTS],
    pub rotation: Rotation,
}

/// Per-frame metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameMetadata {
    pub stream_type: StreamType,
    /// Capture time in 100ns ticks
    pub time_stamp: u64,
    pub frame_number: u32,
}
