/// Animation clock: continuous subject rotation.
///
/// Stepped explicitly by the host with the elapsed time since the previous
/// frame. Knows nothing about cameras or viewports.

use std::f32::consts::TAU;
use glam::{Mat4, Quat};
use crate::options::AnimationOptions;

/// Subject orientation, in radians. Both angles stay within [0, TAU).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub yaw: f32,
    pub pitch: f32,
}

impl RotationState {
    /// Intrinsic X-then-Y orientation: pitch applied in the parent frame.
    pub fn quat(&self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }

    /// Model matrix for the subject at the given uniform scale.
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_quat(self.quat()) * Mat4::from_scale(glam::Vec3::splat(scale))
    }
}

#[derive(Debug, Clone)]
pub struct AnimationClock {
    rotation: RotationState,
    yaw_rate: f32,
    pitch_rate: f32,
    elapsed: f64,
}

impl AnimationClock {
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            rotation: RotationState::default(),
            yaw_rate: options.yaw_rate,
            pitch_rate: options.pitch_rate,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds unless paused, and return the rotation.
    ///
    /// Negative or non-finite `dt` counts as zero.
    pub fn tick(&mut self, dt: f32, paused: bool) -> RotationState {
        if paused || !dt.is_finite() || dt <= 0.0 {
            return self.rotation;
        }

        self.rotation.yaw = (self.rotation.yaw + self.yaw_rate * dt).rem_euclid(TAU);
        self.rotation.pitch = (self.rotation.pitch + self.pitch_rate * dt).rem_euclid(TAU);
        self.elapsed += dt as f64;
        self.rotation
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Unpaused seconds accumulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.rotation = RotationState::default();
        self.elapsed = 0.0;
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(&AnimationOptions::default())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
