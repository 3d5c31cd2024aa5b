//! Legacy Recording Playback Conversions
//!
//! Translates records decoded from the legacy camera container into the
//! runtime stream model of the playback engine:
//! - Tag mappings (stream, pixel format, compression, rotation, coordinate system)
//! - Frame geometry and timestamps
//! - Header, stream, profile, device and frame record assembly
//! - Per-stream intrinsics and extrinsics from the recorded calibration

pub mod assembler;
pub mod calibration;
pub mod error;
pub mod frame;
pub mod mapping;
pub mod pose;
pub mod records;
pub mod sink;

pub use assembler::MetadataAssembler;
pub use calibration::{extrinsics, intrinsics, Extrinsics, Intrinsics};
pub use error::{ConversionError, ErrorKind, Result};
pub use frame::{FrameGeometry, FrameStamp};
pub use mapping::{convert_timestamp, Compression, CoordinateSystem, Format, Rotation, Stream};
pub use pose::Pose;
pub use records::{DeviceIdentity, FileHeader, StreamDescriptor, StreamProfile, StreamProfileSet};
pub use sink::{TracingSink, WarningSink};
