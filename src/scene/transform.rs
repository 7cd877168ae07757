//! Transform of the scene group that parents every node.

use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;

/// Translation plus Euler rotation (radians, XYZ order) applied to all
/// nodes as one group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GroupTransform {
    /// Group translation in render space.
    pub offset: Vec3,
    /// Group rotation as XYZ Euler angles in radians.
    pub rotation: Vec3,
}

impl GroupTransform {
    /// Untransformed group.
    pub const IDENTITY: Self = Self {
        offset: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    /// Translation-only transform.
    #[must_use]
    pub fn from_offset(offset: Vec3) -> Self {
        Self {
            offset,
            rotation: Vec3::ZERO,
        }
    }

    /// Rotation as a quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Map a group-local point into world space.
    #[must_use]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.quat() * local + self.offset
    }
}
