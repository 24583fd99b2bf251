/// Optical parameters as delivered by the controls collaborator.
///
/// The core performs no range validation. Range clamping happens upstream
/// (see `ControlState::clamped`).

use serde::{Deserialize, Serialize};
use super::derived_geometry::{derive_geometry_with_focal_length, DerivedGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpticalParameters {
    /// Interpupillary distance in millimetres. Zero is valid (cyclops).
    pub ipd_mm: f32,
    /// Distance from the eyes to the fixation target, in metres.
    pub target_distance_m: f32,
    /// Lens focal length in millimetres.
    pub focal_length_mm: f32,
    /// Uniform scale of the subject object.
    pub object_scale: f32,
}

impl Default for OpticalParameters {
    fn default() -> Self {
        Self {
            ipd_mm: 64.0,
            target_distance_m: 2.5,
            focal_length_mm: 50.0,
            object_scale: 0.5,
        }
    }
}

/// Bit-exact key of the parameters that affect camera geometry.
///
/// `object_scale` is excluded: it changes what is drawn, not where the
/// cameras are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryKey {
    ipd_bits: u32,
    distance_bits: u32,
    focal_bits: u32,
}

impl OpticalParameters {
    pub fn new(ipd_mm: f32, target_distance_m: f32, focal_length_mm: f32) -> Self {
        Self {
            ipd_mm,
            target_distance_m,
            focal_length_mm,
            ..Self::default()
        }
    }

    /// Derive the full stereo geometry, including FOV from focal length.
    pub fn derive(&self) -> DerivedGeometry {
        derive_geometry_with_focal_length(self.ipd_mm, self.target_distance_m, self.focal_length_mm)
    }

    pub fn geometry_key(&self) -> GeometryKey {
        GeometryKey {
            ipd_bits: self.ipd_mm.to_bits(),
            distance_bits: self.target_distance_m.to_bits(),
            focal_bits: self.focal_length_mm.to_bits(),
        }
    }
}
