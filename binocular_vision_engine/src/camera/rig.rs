/// Camera rig: left eye, right eye and the fixed observer.
///
/// The eyes sit on the X axis at z = target distance, mirror-symmetric
/// about X = 0, yawed inward so both lines of sight cross at the origin
/// (where the subject sits). The observer hovers above and behind the rig
/// unless the user has orbited it, and never reacts to IPD.

use glam::Vec3;
use crate::optics::{DerivedGeometry, OpticalParameters};
use crate::options::RigOptions;
use crate::viewport::ScreenRect;
use super::camera::{ClipRange, RenderCamera};
use super::camera_pose::{CameraPose, CameraRef};
use super::orbit::ObserverOrbit;

/// World-space point the eyes converge on and the observer looks at.
pub const SUBJECT_POSITION: Vec3 = Vec3::ZERO;

/// Poses of all logical cameras for one parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub left: CameraPose,
    pub right: CameraPose,
    pub observer: CameraPose,
    eye_fov_deg: f32,
    observer_fov_deg: f32,
    clip: ClipRange,
}

/// Build the rig with default observer placement.
pub fn build_rig(params: &OpticalParameters, geometry: &DerivedGeometry) -> CameraRig {
    build_rig_with(params, geometry, &RigOptions::default(), None)
}

/// Build the rig with explicit observer placement and camera options.
///
/// An `orbit` overrides the home observer placement from `options`.
pub fn build_rig_with(
    params: &OpticalParameters,
    geometry: &DerivedGeometry,
    options: &RigOptions,
    orbit: Option<&ObserverOrbit>,
) -> CameraRig {
    let z = params.target_distance_m;
    let half = geometry.half_baseline_m;
    let convergence = geometry.convergence_angle_rad;

    let eye_fov_deg = if options.eye_fov_from_focal_length {
        geometry.field_of_view_deg
    } else {
        options.eye_fov_deg
    };

    let observer = match orbit {
        Some(orbit) => CameraPose::new(orbit.position(SUBJECT_POSITION), orbit.yaw()),
        None => CameraPose::new(
            Vec3::new(0.0, options.observer_height_m, z + options.observer_back_offset_m),
            0.0,
        ),
    };

    CameraRig {
        left: CameraPose::new(Vec3::new(-half, 0.0, z), -convergence),
        right: CameraPose::new(Vec3::new(half, 0.0, z), convergence),
        observer,
        eye_fov_deg,
        observer_fov_deg: options.observer_fov_deg,
        clip: ClipRange {
            near: options.near_clip_m,
            far: options.far_clip_m,
        },
    }
}

impl CameraRig {
    pub fn pose(&self, camera: CameraRef) -> &CameraPose {
        match camera {
            CameraRef::LeftEye => &self.left,
            CameraRef::RightEye => &self.right,
            CameraRef::Observer => &self.observer,
        }
    }

    /// Left and right eyes mirror each other about X = 0.
    pub fn is_symmetric(&self) -> bool {
        self.left.position.x == -self.right.position.x
            && self.left.position.y == self.right.position.y
            && self.left.position.z == self.right.position.z
            && self.left.yaw == -self.right.yaw
    }

    /// Distance between the two eye positions, in metres.
    pub fn baseline_m(&self) -> f32 {
        self.left.position.distance(self.right.position)
    }

    pub fn eye_fov_deg(&self) -> f32 {
        self.eye_fov_deg
    }

    pub fn observer_fov_deg(&self) -> f32 {
        self.observer_fov_deg
    }

    pub fn clip(&self) -> ClipRange {
        self.clip
    }

    /// Render camera for one logical camera drawn into `region`.
    ///
    /// Eyes look along their yaw; the observer looks at the subject.
    pub fn render_camera(&self, camera: CameraRef, region: ScreenRect) -> RenderCamera {
        match camera {
            CameraRef::LeftEye | CameraRef::RightEye => {
                RenderCamera::from_pose(self.pose(camera), self.eye_fov_deg, region, self.clip)
            }
            CameraRef::Observer => RenderCamera::looking_at(
                &self.observer,
                SUBJECT_POSITION,
                self.observer_fov_deg,
                region,
                self.clip,
            ),
        }
    }
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
