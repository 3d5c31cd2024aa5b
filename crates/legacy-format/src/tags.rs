//! Legacy on-disk enumeration tags
//!
//! Numeric values are the ones written by the recording SDK. Every enum keeps
//! an `Unknown` arm carrying the raw value so decoding never loses data.
//! `From<u32>` always yields the named variant for a known value; an
//! `Unknown` built by hand around a known value is not canonical.

/// Stream type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    /// Color camera (0x0001)
    Color,
    /// Depth (0x0002)
    Depth,
    /// Infrared (0x0004)
    Ir,
    /// Left infrared imager (0x0008)
    Left,
    /// Right infrared imager (0x0010)
    Right,
    /// Auxiliary color camera (0x0020)
    AuxColor,
    /// Any other value
    Unknown(u32),
}

impl StreamType {
    /// On-disk value
    pub fn raw(&self) -> u32 {
        match self {
            StreamType::Color => 0x0001,
            StreamType::Depth => 0x0002,
            StreamType::Ir => 0x0004,
            StreamType::Left => 0x0008,
            StreamType::Right => 0x0010,
            StreamType::AuxColor => 0x0020,
            StreamType::Unknown(raw) => *raw,
        }
    }
}

impl From<u32> for StreamType {
    fn from(raw: u32) -> Self {
        match raw {
            0x0001 => StreamType::Color,
            0x0002 => StreamType::Depth,
            0x0004 => StreamType::Ir,
            0x0008 => StreamType::Left,
            0x0010 => StreamType::Right,
            0x0020 => StreamType::AuxColor,
            other => StreamType::Unknown(other),
        }
    }
}

/// Pixel format tag. Zero marks an absent stream slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    #[default]
    Any,
    Yuy2,
    Rgb,
    Rgba,
    Bgr,
    Bgra,
    Y8,
    Depth,
    DepthF32,
    Y16,
    Raw,
    Unknown(u32),
}

impl PixelFormat {
    /// On-disk value
    pub fn raw(&self) -> u32 {
        match self {
            PixelFormat::Any => 0,
            PixelFormat::Yuy2 => 0x0001_0000,
            PixelFormat::Rgb => 0x0001_0001,
            PixelFormat::Rgba => 0x0001_0002,
            PixelFormat::Bgr => 0x0001_0003,
            PixelFormat::Bgra => 0x0001_0004,
            PixelFormat::Y8 => 0x0001_0005,
            PixelFormat::Depth => 0x0002_0000,
            PixelFormat::DepthF32 => 0x0002_0002,
            PixelFormat::Y16 => 0x0004_0000,
            PixelFormat::Raw => 0x0008_0000,
            PixelFormat::Unknown(raw) => *raw,
        }
    }

    /// Whether the tag marks a recorded stream
    pub fn is_present(&self) -> bool {
        self.raw() != 0
    }
}

impl From<u32> for PixelFormat {
    fn from(raw: u32) -> Self {
        match raw {
            0 => PixelFormat::Any,
            0x0001_0000 => PixelFormat::Yuy2,
            0x0001_0001 => PixelFormat::Rgb,
            0x0001_0002 => PixelFormat::Rgba,
            0x0001_0003 => PixelFormat::Bgr,
            0x0001_0004 => PixelFormat::Bgra,
            0x0001_0005 => PixelFormat::Y8,
            0x0002_0000 => PixelFormat::Depth,
            0x0002_0002 => PixelFormat::DepthF32,
            0x0004_0000 => PixelFormat::Y16,
            0x0008_0000 => PixelFormat::Raw,
            other => PixelFormat::Unknown(other),
        }
    }
}

/// Frame payload compression tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionType {
    None,
    H264,
    Lzo,
    Unknown(u32),
}

impl CompressionType {
    /// On-disk value
    pub fn raw(&self) -> u32 {
        match self {
            CompressionType::None => 0,
            CompressionType::H264 => 1,
            CompressionType::Lzo => 2,
            CompressionType::Unknown(raw) => *raw,
        }
    }
}

impl From<u32> for CompressionType {
    fn from(raw: u32) -> Self {
        match raw {
            0 => CompressionType::None,
            1 => CompressionType::H264,
            2 => CompressionType::Lzo,
            other => CompressionType::Unknown(other),
        }
    }
}

/// Device mounting rotation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
    Unknown(u32),
}

impl Rotation {
    /// On-disk value (degrees)
    pub fn raw(&self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
            Rotation::Unknown(raw) => *raw,
        }
    }
}

impl From<u32> for Rotation {
    fn from(raw: u32) -> Self {
        match raw {
            0 => Rotation::Deg0,
            90 => Rotation::Deg90,
            180 => Rotation::Deg180,
            270 => Rotation::Deg270,
            other => Rotation::Unknown(other),
        }
    }
}

/// World coordinate system tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// Rear-facing, right-handed (0x100)
    RearDefault,
    /// Rear-facing, OpenCV convention (0x200)
    RearOpenCv,
    /// Front-facing (0x001)
    FrontDefault,
    Unknown(u32),
}

impl CoordinateSystem {
    /// On-disk value
    pub fn raw(&self) -> u32 {
        match self {
            CoordinateSystem::RearDefault => 0x100,
            CoordinateSystem::RearOpenCv => 0x200,
            CoordinateSystem::FrontDefault => 0x001,
            CoordinateSystem::Unknown(raw) => *raw,
        }
    }
}

impl From<u32> for CoordinateSystem {
    fn from(raw: u32) -> Self {
        match raw {
            0x100 => CoordinateSystem::RearDefault,
            0x200 => CoordinateSystem::RearOpenCv,
            0x001 => CoordinateSystem::FrontDefault,
            other => CoordinateSystem::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stream_type_values() {
        assert_eq!(StreamType::from(0x0008), StreamType::Left);
        assert_eq!(StreamType::from(0x0020), StreamType::AuxColor);
        assert_eq!(StreamType::from(0), StreamType::Unknown(0));
    }

    #[test]
    fn test_absent_pixel_format() {
        assert!(!PixelFormat::from(0).is_present());
        assert!(!PixelFormat::default().is_present());
        assert!(PixelFormat::Depth.is_present());
        assert!(PixelFormat::Unknown(7).is_present());
    }

    proptest! {
        #[test]
        fn raw_value_survives_decoding(raw in any::<u32>()) {
            prop_assert_eq!(StreamType::from(raw).raw(), raw);
            prop_assert_eq!(PixelFormat::from(raw).raw(), raw);
            prop_assert_eq!(CompressionType::from(raw).raw(), raw);
            prop_assert_eq!(Rotation::from(raw).raw(), raw);
            prop_assert_eq!(CoordinateSystem::from(raw).raw(), raw);
        }
    }
}
