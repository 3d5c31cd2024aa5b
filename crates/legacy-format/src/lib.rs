//! Legacy Recording Container Records
//!
//! Plain data types produced by the legacy container decoder. Nothing in this
//! crate reads files; the records are handed to `playback-conversions` which
//! translates them into the runtime stream model.
//!
//! Tags read from disk are kept as closed enums with an `Unknown(u32)` arm, so
//! a value the decoder did not recognize still round-trips to the converter
//! and is rejected there.

mod fixed_string;
mod projection;
mod records;
mod tags;

pub use fixed_string::FixedString;
pub use projection::{
    CalibrationParameters, NonRectifiedIntrinsics, ProjectionData, RectifiedIntrinsics,
    ThirdCameraParams,
};
pub use records::{
    DeviceInfoDisk, FrameMetadata, Header, ImageInfo, StreamInfo, StreamProfileDisk,
    StreamProfileSetDisk,
};
pub use tags::{CompressionType, CoordinateSystem, PixelFormat, Rotation, StreamType};

/// Buffer sizes of the fixed-length fields in the device info block
pub mod sizes {
    /// Device name buffer
    pub const DEVICE_NAME: usize = 224;
    /// Serial number buffer
    pub const DEVICE_SERIAL: usize = 32;
    /// Firmware version components
    pub const FIRMWARE_PARTS: usize = 4;
}
