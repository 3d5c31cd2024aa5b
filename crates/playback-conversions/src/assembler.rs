//! Metadata Assembler
//!
//! Builds the runtime records from decoded legacy records. Every conversion
//! stops at the first failing field, so a caller never sees a half-filled
//! record.

use legacy_format as legacy;
use tracing::{debug, info};

use crate::calibration::Intrinsics;
use crate::error::{ConversionError, Result};
use crate::frame::{FrameGeometry, FrameStamp};
use crate::mapping::{convert_timestamp, Compression, CoordinateSystem, Rotation, Stream};
use crate::records::{DeviceIdentity, FileHeader, StreamDescriptor, StreamProfile, StreamProfileSet};
use crate::sink::{TracingSink, WarningSink};

/// Converts legacy records, reporting lossy conversions to a warning sink
pub struct MetadataAssembler<S = TracingSink> {
    sink: S,
}

impl Default for MetadataAssembler<TracingSink> {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl<S: WarningSink> MetadataAssembler<S> {
    /// Create an assembler reporting to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Convert the file header
    pub fn header(&self, source: &legacy::Header) -> Result<FileHeader> {
        // Infallible today; kept on the error path with the other aggregates
        let coordinate_system = CoordinateSystem::from(source.coordinate_system);

        Ok(FileHeader {
            id: source.id,
            version: source.version,
            coordinate_system,
            first_frame_offset: source.first_frame_offset,
            nstreams: source.nstreams,
        })
    }

    /// Convert a stream description. The stream or compression error is
    /// returned unchanged, so an aux color stream reports `Unsupported`.
    pub fn stream_info(&self, source: &legacy::StreamInfo) -> Result<StreamDescriptor> {
        let stream = Stream::try_from(source.stype)?;
        let compression = Compression::try_from(source.ctype)?;

        Ok(StreamDescriptor {
            stream,
            nframes: source.nframes,
            compression,
        })
    }

    /// Convert all stream descriptions of a recording. With `skip_unsupported`
    /// set, streams reporting `Unsupported` are dropped instead of failing.
    pub fn stream_infos(
        &self,
        sources: &[legacy::StreamInfo],
        skip_unsupported: bool,
    ) -> Result<Vec<StreamDescriptor>> {
        let mut streams = Vec::with_capacity(sources.len());
        for source in sources {
            match self.stream_info(source) {
                Ok(descriptor) => streams.push(descriptor),
                Err(e) if skip_unsupported && e.is_unsupported() => {
                    info!("Skipping stream {:#x}: {}", source.stype.raw(), e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(streams)
    }

    /// Convert a stream profile
    pub fn stream_profile(&self, source: &legacy::StreamProfileDisk) -> Result<StreamProfile> {
        let info = FrameGeometry::from_image_info(&source.image_info)
            .map_err(|e| ConversionError::nested("stream profile", e))?;

        let [min_rate, max_rate] = source.frame_rate;
        if min_rate != max_rate {
            self.sink.warn(&format!(
                "frame rate range {min_rate}..{max_rate} is not supported, using {min_rate}"
            ));
        }

        Ok(StreamProfile {
            frame_rate: min_rate as i32,
            info,
            intrinsics: Intrinsics {
                width: i32::try_from(info.width).unwrap_or(i32::MAX),
                height: i32::try_from(info.height).unwrap_or(i32::MAX),
                ..Default::default()
            },
        })
    }

    /// Convert the recorded profile set. Slots with a zero format were not
    /// recorded. Plain and left infrared share the `Infrared` entry; left is
    /// converted second and wins.
    pub fn stream_profile_set(
        &self,
        source: &legacy::StreamProfileSetDisk,
    ) -> Result<StreamProfileSet> {
        let slots = [
            (Stream::Color, &source.color),
            (Stream::Depth, &source.depth),
            (Stream::Infrared, &source.ir),
            (Stream::Infrared, &source.left),
            (Stream::Infrared2, &source.right),
        ];

        let mut profiles = StreamProfileSet::new();
        for (stream, slot) in slots {
            if !slot.image_info.format.is_present() {
                continue;
            }
            let profile = self
                .stream_profile(slot)
                .map_err(|e| ConversionError::nested("stream profile set", e))?;
            debug!(
                "Profile for {:?}: {}x{} @ {}",
                stream, profile.info.width, profile.info.height, profile.frame_rate
            );
            profiles.insert(stream, profile);
        }
        Ok(profiles)
    }

    /// Convert the device information block
    pub fn device_identity(&self, source: &legacy::DeviceInfoDisk) -> Result<DeviceIdentity> {
        // Rotation is validated only; the runtime identity does not carry it
        Rotation::try_from(source.rotation)
            .map_err(|e| ConversionError::nested("device info", e))?;

        let [major, minor, patch, build] = source.firmware;
        Ok(DeviceIdentity {
            name: source.name.decode(),
            serial_number: source.serial.decode(),
            firmware_version: format!("{major}.{minor}.{patch}.{build}"),
        })
    }

    /// Convert per-frame metadata
    pub fn frame_metadata(&self, source: &legacy::FrameMetadata) -> Result<FrameStamp> {
        let stream = Stream::try_from(source.stream_type)
            .map_err(|e| ConversionError::nested("frame metadata", e))?;

        Ok(FrameStamp {
            stream,
            time_stamp: convert_timestamp(source.time_stamp),
            number: source.frame_number,
        })
    }
}
