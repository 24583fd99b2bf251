//! Camera module: logical camera poses, the stereo rig, and render cameras.
//!
//! Poses are pure functions of the optical parameters. Render cameras are
//! passive per-viewport snapshots built from a pose and a screen region.

mod camera;
mod camera_pose;
mod orbit;
mod rig;

pub use camera::{ClipRange, RenderCamera};
pub use camera_pose::{CameraPose, CameraRef};
pub use orbit::{ObserverOrbit, MAX_ORBIT_DISTANCE_M, MAX_ORBIT_ELEVATION_RAD, MIN_ORBIT_DISTANCE_M};
pub use rig::{build_rig, build_rig_with, CameraRig, SUBJECT_POSITION};
