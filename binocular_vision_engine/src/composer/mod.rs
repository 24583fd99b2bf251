//! Scene composition module
//!
//! Walks the routed viewports in z-order and hands each one, with its
//! camera pose and the frame's scene description, to the external renderer.

mod recording_renderer;
mod renderer;
mod scene_composer;

pub use recording_renderer::{RecordedDraw, RecordingRenderer};
pub use renderer::{SceneDescription, SceneFrame, ViewportRenderer};
pub use scene_composer::SceneComposer;
