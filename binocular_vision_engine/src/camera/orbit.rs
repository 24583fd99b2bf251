/// Orbit state of the observer camera around the subject.
///
/// Spherical coordinates about a target point, Y up. Azimuth 0 puts the
/// camera on the +Z side of the target; positive elevation raises it.

use glam::Vec3;

/// Closest the observer may orbit to the subject, in metres.
pub const MIN_ORBIT_DISTANCE_M: f32 = 2.0;
/// Farthest the observer may orbit from the subject, in metres.
pub const MAX_ORBIT_DISTANCE_M: f32 = 20.0;
/// Elevation stays short of the poles so the up vector never degenerates.
pub const MAX_ORBIT_ELEVATION_RAD: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOrbit {
    azimuth_rad: f32,
    elevation_rad: f32,
    distance_m: f32,
}

impl ObserverOrbit {
    /// Build an orbit, wrapping azimuth into [0, TAU) and clamping
    /// elevation and distance. Non-finite angles become 0 and a
    /// non-finite distance becomes the minimum.
    pub fn new(azimuth_rad: f32, elevation_rad: f32, distance_m: f32) -> Self {
        let finite_or = |value: f32, fallback: f32| if value.is_finite() { value } else { fallback };

        Self {
            azimuth_rad: finite_or(azimuth_rad, 0.0).rem_euclid(std::f32::consts::TAU),
            elevation_rad: finite_or(elevation_rad, 0.0)
                .clamp(-MAX_ORBIT_ELEVATION_RAD, MAX_ORBIT_ELEVATION_RAD),
            distance_m: finite_or(distance_m, MIN_ORBIT_DISTANCE_M)
                .clamp(MIN_ORBIT_DISTANCE_M, MAX_ORBIT_DISTANCE_M),
        }
    }

    /// Orbit that places the camera at `position` when looking at `target`.
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return Self::new(0.0, 0.0, MIN_ORBIT_DISTANCE_M);
        }

        let azimuth = offset.x.atan2(offset.z);
        let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self::new(azimuth, elevation, distance)
    }

    pub fn azimuth_rad(&self) -> f32 {
        self.azimuth_rad
    }

    pub fn elevation_rad(&self) -> f32 {
        self.elevation_rad
    }

    pub fn distance_m(&self) -> f32 {
        self.distance_m
    }

    /// Rotate and dolly by the given deltas. Limits still apply.
    pub fn orbited(&self, delta_azimuth_rad: f32, delta_elevation_rad: f32, delta_distance_m: f32) -> Self {
        Self::new(
            self.azimuth_rad + delta_azimuth_rad,
            self.elevation_rad + delta_elevation_rad,
            self.distance_m + delta_distance_m,
        )
    }

    /// Camera position for this orbit around `target`.
    pub fn position(&self, target: Vec3) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth_rad.sin_cos();
        let (sin_el, cos_el) = self.elevation_rad.sin_cos();
        target + self.distance_m * Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    /// Yaw that turns a -Z forward camera toward the target horizontally.
    pub fn yaw(&self) -> f32 {
        self.azimuth_rad
    }
}

#[cfg(test)]
#[path = "orbit_tests.rs"]
mod tests;
