use serde::{Deserialize, Serialize};

/// Continuous subject rotation rates, in radians per second.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationOptions {
    pub yaw_rate: f32,
    pub pitch_rate: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            yaw_rate: 0.2,
            pitch_rate: 0.1,
        }
    }
}
