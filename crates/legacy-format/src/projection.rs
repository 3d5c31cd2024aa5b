//! Vendor calibration blob ("projection data")
//!
//! Stored once in the file header. Holds calibration for the depth pair and
//! the third (color) camera in both rectified and non-rectified form.

/// Intrinsics of a camera after rectification
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectifiedIntrinsics {
    /// Focal length x (pixels)
    pub rfx: f32,
    /// Focal length y (pixels)
    pub rfy: f32,
    /// Principal point x
    pub rpx: f32,
    /// Principal point y
    pub rpy: f32,
    pub rw: i32,
    pub rh: i32,
}

/// Intrinsics of a camera with lens distortion still present
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NonRectifiedIntrinsics {
    pub fx: f32,
    pub fy: f32,
    pub px: f32,
    pub py: f32,
    /// Brown-Conrady distortion coefficients
    pub k: [f64; 5],
    pub w: i32,
    pub h: i32,
}

/// Factory calibration shared by all cameras
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalibrationParameters {
    /// Rotation between depth and third camera, row-major
    pub r_third: [[f32; 3]; 3],
    /// Translation between depth and third camera (mm)
    pub t_third: [f32; 3],
    /// Baseline of the infrared pair (mm)
    pub b: f32,
}

/// Calibration of the third (color) camera
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThirdCameraParams {
    pub is_rectified: bool,
    pub calib_intrinsics_rectified: RectifiedIntrinsics,
    pub calib_intrinsics_non_rectified: NonRectifiedIntrinsics,
    pub width: i32,
    pub height: i32,
    /// Depth to rectified color translation (mm)
    pub z_to_rect_color_translation: [f64; 3],
    /// Depth to non-rectified color translation (mm)
    pub z_to_non_rect_color_translation: [f64; 3],
}

/// Full calibration blob
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionData {
    /// Depth stream rectification flag, also governs the infrared pair
    pub z_rectified: bool,
    pub z_intrin_rect: RectifiedIntrinsics,
    pub z_intrin_non_rect: NonRectifiedIntrinsics,
    /// Shared rectified intrinsics of the left and right imagers
    pub lr_intrin_rect: RectifiedIntrinsics,
    pub l_intrin_non_rect: NonRectifiedIntrinsics,
    pub r_intrin_non_rect: NonRectifiedIntrinsics,
    /// Depth image size, shared by the infrared pair
    pub d_width: i32,
    pub d_height: i32,
    pub calib_params: CalibrationParameters,
    pub third_camera_params: ThirdCameraParams,
}
