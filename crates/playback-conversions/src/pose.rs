//! Rigid transforms

use nalgebra::{Matrix3, Vector3};

/// Rotation followed by translation, mapping points from one frame to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub orientation: Matrix3<f32>,
    pub position: Vector3<f32>,
}

impl Pose {
    pub fn new(orientation: Matrix3<f32>, position: Vector3<f32>) -> Self {
        Self { orientation, position }
    }

    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// Inverse transform. Assumes an orthonormal orientation.
    pub fn inverse(&self) -> Self {
        let orientation = self.orientation.transpose();
        let position = -(orientation * self.position);
        Self { orientation, position }
    }

    /// `self` applied after `other`
    pub fn compose(&self, other: &Pose) -> Self {
        Self {
            orientation: self.orientation * other.orientation,
            position: self.orientation * other.position + self.position,
        }
    }

    pub fn transform(&self, point: &Vector3<f32>) -> Vector3<f32> {
        self.orientation * point + self.position
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Pose, epsilon: f32) -> bool {
        let orientation = self
            .orientation
            .iter()
            .zip(other.orientation.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon);
        let position = self
            .position
            .iter()
            .zip(other.position.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon);
        orientation && position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Rotation3;
    use proptest::prelude::*;

    #[test]
    fn test_inverse_of_translation() {
        let pose = Pose::new(Matrix3::identity(), Vector3::new(1.0, -2.0, 3.0));
        let inv = pose.inverse();
        assert_eq!(inv.position, Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_inverse_undoes_transform() {
        let rotation = Rotation3::from_euler_angles(0.1, -0.4, 1.2).into_inner();
        let pose = Pose::new(rotation, Vector3::new(0.025, 0.0, -0.004));
        let point = Vector3::new(0.3, 0.2, 1.5);
        let back = pose.inverse().transform(&pose.transform(&point));
        assert!((back - point).norm() < 1e-5);
    }

    proptest! {
        #[test]
        fn compose_with_inverse_is_identity(
            roll in -3.1f32..3.1,
            pitch in -1.5f32..1.5,
            yaw in -3.1f32..3.1,
            tx in -100.0f32..100.0,
            ty in -100.0f32..100.0,
            tz in -100.0f32..100.0,
        ) {
            let rotation = Rotation3::from_euler_angles(roll, pitch, yaw).into_inner();
            let pose = Pose::new(rotation, Vector3::new(tx, ty, tz));
            prop_assert!(pose.compose(&pose.inverse()).approx_eq(&Pose::identity(), 1e-3));
            prop_assert!(pose.inverse().compose(&pose).approx_eq(&Pose::identity(), 1e-3));
        }
    }
}
