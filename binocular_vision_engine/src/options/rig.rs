use serde::{Deserialize, Serialize};
use crate::error::Result;
use super::check_range;

/// Observer placement and camera projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RigOptions {
    /// Observer height above the eye plane, in metres.
    pub observer_height_m: f32,
    /// Observer distance behind the eyes, in metres.
    pub observer_back_offset_m: f32,
    /// Vertical field of view of the observer, in degrees.
    pub observer_fov_deg: f32,
    /// Derive the eye FOV from focal length instead of using `eye_fov_deg`.
    pub eye_fov_from_focal_length: bool,
    /// Fixed eye FOV, in degrees.
    pub eye_fov_deg: f32,
    pub near_clip_m: f32,
    pub far_clip_m: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            observer_height_m: 8.0,
            observer_back_offset_m: 5.0,
            observer_fov_deg: 50.0,
            eye_fov_from_focal_length: true,
            eye_fov_deg: 45.0,
            near_clip_m: 0.1,
            far_clip_m: 2000.0,
        }
    }
}

impl RigOptions {
    pub fn validate(&self) -> Result<()> {
        check_range("rig.observer_fov_deg", self.observer_fov_deg, 1.0, 179.0)?;
        check_range("rig.eye_fov_deg", self.eye_fov_deg, 1.0, 179.0)?;
        check_range("rig.near_clip_m", self.near_clip_m, f32::MIN_POSITIVE, f32::MAX)?;
        check_range("rig.far_clip_m", self.far_clip_m, self.near_clip_m, f32::MAX)?;
        check_range("rig.observer_height_m", self.observer_height_m, f32::MIN, f32::MAX)?;
        check_range("rig.observer_back_offset_m", self.observer_back_offset_m, f32::MIN, f32::MAX)
    }
}
