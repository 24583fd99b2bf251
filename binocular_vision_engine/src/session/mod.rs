//! Session module
//!
//! Ties controls, optics, rig, router, clock and composer into one
//! frame-driven object.

mod stereo_session;

pub use stereo_session::{FrameStats, StereoSession};
