/// Input record delivered by the controls collaborator on every change.
///
/// The documented ranges below are the collaborator's contract. The core
/// never clamps: `clamped()` exists for the collaborator to call before
/// handing the record over.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::optics::OpticalParameters;
use crate::viewport::ViewMode;

pub const IPD_RANGE_MM: RangeInclusive<f32> = 0.0..=20000.0;
pub const TARGET_DISTANCE_RANGE_M: RangeInclusive<f32> = 0.5..=1000.0;
pub const FOCAL_LENGTH_RANGE_MM: RangeInclusive<f32> = 15.0..=2000.0;
pub const OBJECT_SCALE_RANGE: RangeInclusive<f32> = 0.1..=3.0;
pub const CAMERA_VISUALIZER_SCALE_RANGE: RangeInclusive<f32> = 0.05..=1.0;

/// Subject shape; the mesh itself is built by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    #[default]
    Torus,
    Cube,
    Sphere,
    Dna,
}

impl ObjectType {
    pub const ALL: [ObjectType; 4] = [ObjectType::Torus, ObjectType::Cube, ObjectType::Sphere, ObjectType::Dna];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Torus => "torus",
            ObjectType::Cube => "cube",
            ObjectType::Sphere => "sphere",
            ObjectType::Dna => "dna",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .into_iter()
            .find(|object| object.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown object type '{}'", s))
    }
}

/// Everything the controls panel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlState {
    pub params: OpticalParameters,
    pub object_type: ObjectType,
    pub wireframe: bool,
    pub is_paused: bool,
    pub view_mode: ViewMode,
    /// Size of the camera models drawn in the observer view.
    pub camera_visualizer_scale: f32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            params: OpticalParameters::default(),
            object_type: ObjectType::default(),
            wireframe: false,
            is_paused: false,
            view_mode: ViewMode::default(),
            camera_visualizer_scale: 0.15,
        }
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        return fallback;
    }
    value.clamp(*range.start(), *range.end())
}

impl ControlState {
    /// Copy with every numeric field clamped to its documented range.
    ///
    /// NaN falls back to the default value for that field.
    pub fn clamped(&self) -> Self {
        let defaults = ControlState::default();
        let p = &self.params;
        let d = &defaults.params;

        Self {
            params: OpticalParameters {
                ipd_mm: clamp_to(p.ipd_mm, &IPD_RANGE_MM, d.ipd_mm),
                target_distance_m: clamp_to(p.target_distance_m, &TARGET_DISTANCE_RANGE_M, d.target_distance_m),
                focal_length_mm: clamp_to(p.focal_length_mm, &FOCAL_LENGTH_RANGE_MM, d.focal_length_mm),
                object_scale: clamp_to(p.object_scale, &OBJECT_SCALE_RANGE, d.object_scale),
            },
            camera_visualizer_scale: clamp_to(
                self.camera_visualizer_scale,
                &CAMERA_VISUALIZER_SCALE_RANGE,
                defaults.camera_visualizer_scale,
            ),
            ..*self
        }
    }

    /// All numeric fields lie within their documented ranges.
    pub fn is_within_bounds(&self) -> bool {
        IPD_RANGE_MM.contains(&self.params.ipd_mm)
            && TARGET_DISTANCE_RANGE_M.contains(&self.params.target_distance_m)
            && FOCAL_LENGTH_RANGE_MM.contains(&self.params.focal_length_mm)
            && OBJECT_SCALE_RANGE.contains(&self.params.object_scale)
            && CAMERA_VISUALIZER_SCALE_RANGE.contains(&self.camera_visualizer_scale)
    }
}

#[cfg(test)]
#[path = "control_state_tests.rs"]
mod tests;
