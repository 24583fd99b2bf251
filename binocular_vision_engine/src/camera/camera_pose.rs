/// Logical cameras and their poses.

use glam::{Quat, Vec3};

/// One of the three logical viewpoints rendered each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraRef {
    LeftEye,
    RightEye,
    /// Third-person "god view" showing the whole rig
    Observer,
}

impl CameraRef {
    pub const ALL: [CameraRef; 3] = [CameraRef::LeftEye, CameraRef::RightEye, CameraRef::Observer];

    /// Part of the stereo pair (as opposed to the diagnostic observer).
    pub fn is_eye(&self) -> bool {
        matches!(self, CameraRef::LeftEye | CameraRef::RightEye)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraRef::LeftEye => "left eye",
            CameraRef::RightEye => "right eye",
            CameraRef::Observer => "observer",
        }
    }
}

/// Position plus yaw (rotation about +Y, radians).
///
/// Yaw 0 looks down -Z. Positive yaw turns the line of sight toward -X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Unit line-of-sight direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}
