/// Renderer seam: what the composer hands the external renderer per viewport.
///
/// The engine computes nothing about meshes, materials or GPU state. The
/// renderer receives a viewport, the pose of the camera assigned to it and
/// a `SceneFrame` describing what to draw, and draws it however it likes.

use glam::Mat4;
use crate::animation::RotationState;
use crate::camera::{CameraPose, CameraRef, CameraRig, RenderCamera};
use crate::controls::{ControlState, ObjectType};
use crate::error::Result;
use crate::viewport::ViewportSpec;

/// Per-frame scene description, independent of any viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneDescription {
    pub object_type: ObjectType,
    pub wireframe: bool,
    pub object_scale: f32,
    /// Size of the camera models drawn in the observer view.
    pub camera_visualizer_scale: f32,
    pub rotation: RotationState,
}

impl SceneDescription {
    pub fn from_controls(controls: &ControlState, rotation: RotationState) -> Self {
        Self {
            object_type: controls.object_type,
            wireframe: controls.wireframe,
            object_scale: controls.params.object_scale,
            camera_visualizer_scale: controls.camera_visualizer_scale,
            rotation,
        }
    }

    /// World matrix of the subject (rotation then uniform scale, at the origin).
    pub fn model_matrix(&self) -> Mat4 {
        self.rotation.model_matrix(self.object_scale)
    }
}

/// Everything the renderer needs to draw one viewport.
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame<'a> {
    scene: &'a SceneDescription,
    rig: &'a CameraRig,
    camera: RenderCamera,
    camera_ref: CameraRef,
}

impl<'a> SceneFrame<'a> {
    pub fn new(
        scene: &'a SceneDescription,
        rig: &'a CameraRig,
        camera_ref: CameraRef,
        camera: RenderCamera,
    ) -> Self {
        Self { scene, rig, camera, camera_ref }
    }

    pub fn scene(&self) -> &SceneDescription {
        self.scene
    }

    /// Full rig, for drawing the camera visualizers.
    pub fn rig(&self) -> &CameraRig {
        self.rig
    }

    pub fn camera(&self) -> &RenderCamera {
        &self.camera
    }

    pub fn camera_ref(&self) -> CameraRef {
        self.camera_ref
    }

    /// Only the observer shows the eye cameras and their sight lines.
    pub fn draws_camera_visualizers(&self) -> bool {
        self.camera_ref == CameraRef::Observer
    }

    /// Model-view-projection of the subject for this viewport.
    pub fn subject_mvp(&self) -> Mat4 {
        self.camera.view_projection_matrix() * self.scene.model_matrix()
    }
}

/// External renderer contract.
///
/// `begin_frame` and `end_frame` bracket one composed frame; the default
/// implementations do nothing.
pub trait ViewportRenderer {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    /// Draw one viewport. Region, blend, opacity and tint come from `viewport`.
    fn render_viewport(
        &mut self,
        viewport: &ViewportSpec,
        pose: &CameraPose,
        frame: &SceneFrame<'_>,
    ) -> Result<()>;

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }
}
