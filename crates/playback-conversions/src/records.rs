//! Runtime header, stream and device records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calibration::Intrinsics;
use crate::frame::FrameGeometry;
use crate::mapping::{Compression, CoordinateSystem, Stream};

/// Runtime file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHeader {
    pub id: u32,
    pub version: i32,
    pub coordinate_system: CoordinateSystem,
    pub first_frame_offset: i32,
    pub nstreams: i32,
}

/// Runtime description of a recorded stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub stream: Stream,
    pub nframes: i32,
    pub compression: Compression,
}

/// Runtime stream profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamProfile {
    /// Single frame rate; recordings with a range keep the minimum
    pub frame_rate: i32,
    pub info: FrameGeometry,
    /// Image size only, the remaining fields stay zero
    pub intrinsics: Intrinsics,
}

/// Profiles of all recorded streams
pub type StreamProfileSet = BTreeMap<Stream, StreamProfile>;

/// Device identification strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub name: String,
    pub serial_number: String,
    /// Four dot-separated components
    pub firmware_version: String,
}
