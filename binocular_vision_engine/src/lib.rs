/*!
# Binocular Vision Engine

Stereo camera geometry and multi-viewport compositing for a binocular
vision simulator.

The engine turns a handful of optical parameters (interpupillary distance,
target distance, focal length) into a converging stereo camera rig, and
routes the left eye, right eye and a fixed observer camera into screen
regions according to the active view mode. Drawing is left to an external
renderer behind the `ViewportRenderer` trait.

## Architecture

- **optics**: pure derivation of baseline, convergence and field of view
- **camera**: logical camera poses, the stereo rig, render cameras
- **viewport**: view modes, screen rectangles and the viewport router
- **animation**: clock-driven subject rotation
- **composer**: walks viewports in z-order and drives the renderer
- **session**: host-facing object tying the above together
- **narrative**: optional natural-language analysis from an external service
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod animation;
pub mod camera;
pub mod composer;
pub mod controls;
pub mod narrative;
pub mod optics;
pub mod options;
pub mod session;
pub mod viewport;

// Main binocular namespace module
pub mod binocular {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Host entry point
    pub use crate::session::{FrameStats, StereoSession};
    pub use crate::controls::{ControlState, ObjectType};
    pub use crate::options::EngineOptions;
    pub use crate::viewport::{ContainerSize, ViewMode};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            format_entry, CaptureLogger, DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    // Renderer seam
    pub mod render {
        pub use crate::camera::{CameraPose, CameraRef, CameraRig, ObserverOrbit, RenderCamera};
        pub use crate::composer::*;
        pub use crate::viewport::{BlendMode, Color, ScreenRect, TintPlane, ViewportSpec};
    }
}

// Re-export math library at crate root
pub use glam;
