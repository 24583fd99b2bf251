use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::viewport::{BlendMode, Color};
use super::check_range;

/// Layering parameters for a mode that stacks both eyes on one region.
///
/// No field-level defaults: the overlay and anaglyph presets differ, so a
/// table that is present in TOML must be complete. Omitted tables fall back
/// to their own preset through `CompositingOptions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackedModeOptions {
    /// Opacity of the left eye layer (drawn first).
    pub left_opacity: f32,
    /// Opacity of the right eye layer (drawn on top).
    pub right_opacity: f32,
    /// Blend of each eye layer over what is below it.
    pub layer_blend: BlendMode,
    pub left_tint: Color,
    pub right_tint: Color,
    pub tint_opacity: f32,
    pub tint_blend: BlendMode,
    /// Distance of the tint plane in front of the camera, in metres.
    pub tint_depth_m: f32,
}

impl StackedModeOptions {
    /// Cyan left, red right, faint additive tint.
    pub fn overlay() -> Self {
        Self {
            left_opacity: 1.0,
            right_opacity: 0.5,
            layer_blend: BlendMode::Additive,
            left_tint: Color::CYAN,
            right_tint: Color::RED,
            tint_opacity: 0.1,
            tint_blend: BlendMode::Additive,
            tint_depth_m: 1.0,
        }
    }

    /// Red left, cyan right at half strength, full-strength multiplicative filter.
    pub fn anaglyph() -> Self {
        Self {
            left_opacity: 1.0,
            right_opacity: 0.5,
            layer_blend: BlendMode::Additive,
            left_tint: Color::RED,
            right_tint: Color::CYAN,
            tint_opacity: 1.0,
            tint_blend: BlendMode::Multiply,
            tint_depth_m: 0.5,
        }
    }

    fn validate(&self, prefix: &str) -> Result<()> {
        check_range(&format!("{}.left_opacity", prefix), self.left_opacity, 0.0, 1.0)?;
        check_range(&format!("{}.right_opacity", prefix), self.right_opacity, 0.0, 1.0)?;
        check_range(&format!("{}.tint_opacity", prefix), self.tint_opacity, 0.0, 1.0)?;
        check_range(&format!("{}.tint_depth_m", prefix), self.tint_depth_m, 0.0, f32::MAX)
    }
}

/// Viewport layout and per-mode blending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompositingOptions {
    /// Share of the container height given to the observer band (bottom).
    pub observer_height_fraction: f32,
    pub overlay: StackedModeOptions,
    pub anaglyph: StackedModeOptions,
}

impl Default for CompositingOptions {
    fn default() -> Self {
        Self {
            observer_height_fraction: 1.0 / 3.0,
            overlay: StackedModeOptions::overlay(),
            anaglyph: StackedModeOptions::anaglyph(),
        }
    }
}

impl CompositingOptions {
    pub fn validate(&self) -> Result<()> {
        check_range(
            "compositing.observer_height_fraction",
            self.observer_height_fraction,
            0.0,
            1.0,
        )?;
        self.overlay.validate("compositing.overlay")?;
        self.anaglyph.validate("compositing.anaglyph")
    }
}
