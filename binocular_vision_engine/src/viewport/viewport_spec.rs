/// Viewport descriptions consumed by the renderer.

use serde::{Deserialize, Serialize};
use crate::camera::CameraRef;
use super::screen_rect::ScreenRect;

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// How a layer combines with what is already in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendMode {
    /// Replace destination
    Opaque,
    /// `dst + src * opacity`
    Additive,
    /// `dst * src`
    Multiply,
}

/// Translucent full-frame plane drawn in front of a camera's scene content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintPlane {
    pub color: Color,
    pub opacity: f32,
    pub blend: BlendMode,
    /// Distance in front of the camera, in metres.
    pub depth_offset_m: f32,
}

/// One camera drawn into one screen region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSpec {
    pub camera: CameraRef,
    pub region: ScreenRect,
    /// How the finished viewport is composited over lower z-orders
    pub blend: BlendMode,
    pub opacity: f32,
    pub tint: Option<TintPlane>,
    /// Higher draws later (on top)
    pub z_order: i32,
}

impl ViewportSpec {
    /// Opaque, untinted viewport.
    pub fn opaque(camera: CameraRef, region: ScreenRect, z_order: i32) -> Self {
        Self {
            camera,
            region,
            blend: BlendMode::Opaque,
            opacity: 1.0,
            tint: None,
            z_order,
        }
    }

    pub fn is_stereo(&self) -> bool {
        self.camera.is_eye()
    }
}
