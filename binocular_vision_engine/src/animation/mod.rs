//! Animation module: subject rotation driven by an explicit clock.

mod clock;

pub use clock::{AnimationClock, RotationState};
