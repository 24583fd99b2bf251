/// Stereo geometry derived from IPD, target distance and focal length.
///
/// Units: IPD and focal length in millimetres, distances in metres,
/// convergence in radians, field of view in degrees (vertical).

/// Smallest target distance used in the convergence computation.
pub const MIN_TARGET_DISTANCE_M: f32 = 1.0e-6;

/// Smallest focal length used in the field-of-view computation.
pub const MIN_FOCAL_LENGTH_MM: f32 = 1.0e-3;

/// Vertical field of view of the eye cameras when no focal length is given.
pub const DEFAULT_EYE_FOV_DEG: f32 = 45.0;

/// Full-frame (35 mm) sensor height used to map focal length to FOV.
pub const SENSOR_HEIGHT_MM: f32 = 24.0;

/// Geometry shared by both eye cameras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    /// Half of the IPD, in metres. Each eye sits this far from the centre line.
    pub half_baseline_m: f32,
    /// Inward yaw of each eye so both lines of sight meet at the target.
    pub convergence_angle_rad: f32,
    /// Vertical field of view of the eye cameras.
    pub field_of_view_deg: f32,
}

impl DerivedGeometry {
    /// Total angle between the two lines of sight, in degrees.
    pub fn vergence_deg(&self) -> f32 {
        2.0 * self.convergence_angle_rad.to_degrees()
    }

    /// Convergence of a single eye, in degrees.
    pub fn convergence_deg(&self) -> f32 {
        self.convergence_angle_rad.to_degrees()
    }

    /// Both eyes share one viewpoint (IPD of zero).
    pub fn is_cyclopean(&self) -> bool {
        self.half_baseline_m == 0.0
    }
}

/// Derive baseline and convergence for the given IPD and target distance.
///
/// The target distance is clamped to `MIN_TARGET_DISTANCE_M`; an IPD of zero
/// yields a convergence of exactly zero. The field of view is the default
/// eye FOV; use `derive_geometry_with_focal_length` to derive it from optics.
pub fn derive_geometry(ipd_mm: f32, target_distance_m: f32) -> DerivedGeometry {
    let half_baseline_m = (ipd_mm / 1000.0) / 2.0;
    let distance = target_distance_m.max(MIN_TARGET_DISTANCE_M);

    DerivedGeometry {
        half_baseline_m,
        convergence_angle_rad: (half_baseline_m / distance).atan(),
        field_of_view_deg: DEFAULT_EYE_FOV_DEG,
    }
}

/// Same as `derive_geometry`, with the field of view taken from the focal length.
pub fn derive_geometry_with_focal_length(
    ipd_mm: f32,
    target_distance_m: f32,
    focal_length_mm: f32,
) -> DerivedGeometry {
    DerivedGeometry {
        field_of_view_deg: field_of_view_for_focal_length(focal_length_mm),
        ..derive_geometry(ipd_mm, target_distance_m)
    }
}

/// Vertical field of view (degrees) of a lens on a full-frame sensor.
///
/// `fov = 2 * atan(sensor_height / (2 * focal_length))`
pub fn field_of_view_for_focal_length(focal_length_mm: f32) -> f32 {
    let focal = focal_length_mm.max(MIN_FOCAL_LENGTH_MM);
    (2.0 * (SENSOR_HEIGHT_MM / (2.0 * focal)).atan()).to_degrees()
}

#[cfg(test)]
#[path = "derived_geometry_tests.rs"]
mod tests;
