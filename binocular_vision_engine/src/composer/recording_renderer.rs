/// Recording renderer for tests and headless hosts (no GPU required).
///
/// Stores one `RecordedDraw` per viewport instead of drawing, so callers
/// can assert what the composer asked for. Can be told to fail on a given
/// camera to exercise error propagation.

use glam::Mat4;
use crate::camera::{CameraPose, CameraRef};
use crate::error::Result;
use crate::viewport::{BlendMode, ScreenRect, TintPlane, ViewportSpec};
use crate::engine_bail;
use super::renderer::{SceneFrame, ViewportRenderer};

/// One `render_viewport` call as seen by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub frame_index: u64,
    pub camera: CameraRef,
    pub region: ScreenRect,
    pub z_order: i32,
    pub blend: BlendMode,
    pub opacity: f32,
    pub tint: Option<TintPlane>,
    pub pose: CameraPose,
    pub subject_mvp: Mat4,
    pub draws_camera_visualizers: bool,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    draws: Vec<RecordedDraw>,
    frames_begun: u64,
    frames_ended: u64,
    fail_on: Option<CameraRef>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that returns `RenderFailed` whenever `camera` is drawn.
    pub fn failing_on(camera: CameraRef) -> Self {
        Self {
            fail_on: Some(camera),
            ..Self::default()
        }
    }

    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Draws recorded during the most recent frame.
    pub fn last_frame(&self) -> Vec<&RecordedDraw> {
        let Some(last) = self.draws.last() else {
            return Vec::new();
        };
        self.draws.iter().filter(|draw| draw.frame_index == last.frame_index).collect()
    }

    pub fn frames_begun(&self) -> u64 {
        self.frames_begun
    }

    pub fn frames_ended(&self) -> u64 {
        self.frames_ended
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl ViewportRenderer for RecordingRenderer {
    fn begin_frame(&mut self) -> Result<()> {
        self.frames_begun += 1;
        Ok(())
    }

    fn render_viewport(
        &mut self,
        viewport: &ViewportSpec,
        pose: &CameraPose,
        frame: &SceneFrame<'_>,
    ) -> Result<()> {
        if self.fail_on == Some(viewport.camera) {
            engine_bail!("binocular::RecordingRenderer", RenderFailed,
                "Injected failure on {} viewport", viewport.camera.label());
        }

        self.draws.push(RecordedDraw {
            frame_index: self.frames_begun,
            camera: viewport.camera,
            region: viewport.region,
            z_order: viewport.z_order,
            blend: viewport.blend,
            opacity: viewport.opacity,
            tint: viewport.tint,
            pose: *pose,
            subject_mvp: frame.subject_mvp(),
            draws_camera_visualizers: frame.draws_camera_visualizers(),
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames_ended += 1;
        Ok(())
    }
}
