/// SceneComposer: drives the renderer over the routed viewports.
///
/// Viewports are drawn in ascending z-order so stacked eye layers blend in
/// a defined order (left, then right, then the observer on its own band).

use crate::camera::CameraRig;
use crate::error::Result;
use crate::viewport::ViewportSpec;
use crate::{engine_trace, engine_warn};
use super::renderer::{SceneDescription, SceneFrame, ViewportRenderer};

#[derive(Debug, Default)]
pub struct SceneComposer {
    frames_composed: u64,
}

impl SceneComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames that completed `end_frame` successfully.
    pub fn frames_composed(&self) -> u64 {
        self.frames_composed
    }

    /// Render every non-empty viewport and return how many were drawn.
    ///
    /// Zero-area regions (collapsed container) are skipped. The first
    /// renderer error aborts the frame and is returned as is.
    pub fn compose(
        &mut self,
        renderer: &mut dyn ViewportRenderer,
        viewports: &[ViewportSpec],
        rig: &CameraRig,
        scene: &SceneDescription,
    ) -> Result<usize> {
        let mut ordered: Vec<&ViewportSpec> = viewports.iter().collect();
        ordered.sort_by_key(|viewport| viewport.z_order);

        renderer.begin_frame()?;

        let mut drawn = 0;
        for viewport in ordered {
            if viewport.region.is_empty() {
                engine_trace!("binocular::SceneComposer",
                    "Skipping empty {} viewport", viewport.camera.label());
                continue;
            }

            let camera = rig.render_camera(viewport.camera, viewport.region);
            let frame = SceneFrame::new(scene, rig, viewport.camera, camera);

            if let Err(e) = renderer.render_viewport(viewport, rig.pose(viewport.camera), &frame) {
                engine_warn!("binocular::SceneComposer",
                    "Frame aborted at {} viewport: {}", viewport.camera.label(), e);
                return Err(e);
            }
            drawn += 1;
        }

        renderer.end_frame()?;
        self.frames_composed += 1;

        Ok(drawn)
    }
}

#[cfg(test)]
#[path = "scene_composer_tests.rs"]
mod tests;
