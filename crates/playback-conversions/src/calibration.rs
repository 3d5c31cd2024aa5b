//! Per-stream calibration from the recorded projection data
//!
//! Neither function fails. A stream without calibration gets an all-zero
//! value, which callers must treat as "not available".

use legacy_format::{NonRectifiedIntrinsics, ProjectionData, RectifiedIntrinsics, StreamType};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::pose::Pose;

/// Millimeters to meters
const MM_TO_M: f64 = 0.001;

/// Pinhole camera model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intrinsics {
    pub fx: f32,
    pub fy: f32,
    pub ppx: f32,
    pub ppy: f32,
    pub width: i32,
    pub height: i32,
}

impl Intrinsics {
    /// All-zero sentinel
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn select(
        rectified: bool,
        rect: &RectifiedIntrinsics,
        non_rect: &NonRectifiedIntrinsics,
        width: i32,
        height: i32,
    ) -> Self {
        if rectified {
            Self { fx: rect.rfx, fy: rect.rfy, ppx: rect.rpx, ppy: rect.rpy, width, height }
        } else {
            Self {
                fx: non_rect.fx,
                fy: non_rect.fy,
                ppx: non_rect.px,
                ppy: non_rect.py,
                width,
                height,
            }
        }
    }
}

/// Rigid transform between two stream frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extrinsics {
    /// Column-major 3x3 rotation
    pub rotation: [f32; 9],
    /// Translation in meters
    pub translation: [f32; 3],
}

impl Extrinsics {
    /// All-zero sentinel. Note the rotation is zero, not identity.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_pose(&self) -> Pose {
        Pose::new(
            Matrix3::from_column_slice(&self.rotation),
            Vector3::from_column_slice(&self.translation),
        )
    }
}

impl From<Pose> for Extrinsics {
    fn from(pose: Pose) -> Self {
        let mut rotation = [0.0f32; 9];
        rotation.copy_from_slice(pose.orientation.as_slice());
        Self {
            rotation,
            translation: [pose.position.x, pose.position.y, pose.position.z],
        }
    }
}

/// Intrinsics of a recorded stream.
///
/// The color stream follows the third camera's own rectification flag. Depth
/// and both infrared imagers all follow the depth flag and share the depth
/// image size.
pub fn intrinsics(stream: StreamType, projection: &ProjectionData) -> Intrinsics {
    let third = &projection.third_camera_params;
    match stream {
        StreamType::Color => Intrinsics::select(
            third.is_rectified,
            &third.calib_intrinsics_rectified,
            &third.calib_intrinsics_non_rectified,
            third.width,
            third.height,
        ),
        StreamType::Depth => Intrinsics::select(
            projection.z_rectified,
            &projection.z_intrin_rect,
            &projection.z_intrin_non_rect,
            projection.d_width,
            projection.d_height,
        ),
        StreamType::Left => Intrinsics::select(
            projection.z_rectified,
            &projection.lr_intrin_rect,
            &projection.l_intrin_non_rect,
            projection.d_width,
            projection.d_height,
        ),
        StreamType::Right => Intrinsics::select(
            projection.z_rectified,
            &projection.lr_intrin_rect,
            &projection.r_intrin_non_rect,
            projection.d_width,
            projection.d_height,
        ),
        StreamType::Ir | StreamType::AuxColor | StreamType::Unknown(_) => Intrinsics::default(),
    }
}

/// Pose of the third camera relative to depth, as recorded (millimeters
/// already scaled to meters).
pub fn color_to_depth_pose(projection: &ProjectionData) -> Pose {
    let third = &projection.third_camera_params;
    let source = if third.is_rectified {
        &third.z_to_rect_color_translation
    } else {
        &third.z_to_non_rect_color_translation
    };
    let translation = Vector3::from_fn(|i, _| (source[i] * MM_TO_M) as f32);

    // Rows of the recorded matrix are the basis columns of the pose
    let r_third = &projection.calib_params.r_third;
    let orientation = Matrix3::from_fn(|row, col| r_third[col][row]);

    Pose::new(orientation, translation)
}

/// Extrinsics from depth to the given stream. Only the color stream is
/// calibrated; every other stream gets the zero sentinel.
pub fn extrinsics(stream: StreamType, projection: &ProjectionData) -> Extrinsics {
    match stream {
        StreamType::Color => Extrinsics::from(color_to_depth_pose(projection).inverse()),
        _ => Extrinsics::default(),
    }
}
