/// RenderCamera: passive per-viewport camera handed to the renderer.
///
/// Built from a `CameraPose` and the viewport it is drawn into. After
/// construction it computes nothing: the renderer reads matrices and the
/// pixel region straight off it.

use glam::{Mat4, Vec3};
use crate::viewport::ScreenRect;
use super::camera_pose::CameraPose;

/// Near/far clip distances in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    pub near: f32,
    pub far: f32,
}

/// Camera ready for drawing one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCamera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: ScreenRect,
    fov_deg: f32,
}

impl RenderCamera {
    /// Camera looking along the pose's yaw direction.
    pub fn from_pose(pose: &CameraPose, fov_deg: f32, viewport: ScreenRect, clip: ClipRange) -> Self {
        let view = Mat4::look_to_rh(pose.position, pose.forward(), Vec3::Y);
        Self::with_view(view, fov_deg, viewport, clip)
    }

    /// Camera at the pose's position aimed at `target`, ignoring yaw.
    ///
    /// Falls back to `from_pose` when the target coincides with the position.
    pub fn looking_at(
        pose: &CameraPose,
        target: Vec3,
        fov_deg: f32,
        viewport: ScreenRect,
        clip: ClipRange,
    ) -> Self {
        let direction = target - pose.position;
        if direction.length_squared() <= f32::EPSILON {
            return Self::from_pose(pose, fov_deg, viewport, clip);
        }
        let view = Mat4::look_to_rh(pose.position, direction.normalize(), Vec3::Y);
        Self::with_view(view, fov_deg, viewport, clip)
    }

    fn with_view(view: Mat4, fov_deg: f32, viewport: ScreenRect, clip: ClipRange) -> Self {
        let projection = Mat4::perspective_rh(
            fov_deg.to_radians(),
            viewport.aspect_ratio(),
            clip.near,
            clip.far,
        );
        Self {
            view_matrix: view,
            projection_matrix: projection,
            viewport,
            fov_deg,
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Pixel region this camera draws into.
    pub fn viewport(&self) -> &ScreenRect {
        &self.viewport
    }

    /// Vertical field of view in degrees.
    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
