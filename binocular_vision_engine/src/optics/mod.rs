//! Optics model: pure functions from optical parameters to stereo geometry.
//!
//! Nothing here holds state. `DerivedGeometry` is a projection of
//! `OpticalParameters` and is recomputed, never mutated.

mod derived_geometry;
mod optical_parameters;

pub use derived_geometry::{
    derive_geometry, derive_geometry_with_focal_length, field_of_view_for_focal_length,
    DerivedGeometry, DEFAULT_EYE_FOV_DEG, MIN_FOCAL_LENGTH_MM, MIN_TARGET_DISTANCE_M,
    SENSOR_HEIGHT_MM,
};
pub use optical_parameters::{GeometryKey, OpticalParameters};
