//! Viewport routing: which camera draws where, and how layers combine.

mod router;
mod screen_rect;
mod view_mode;
mod viewport_spec;

pub use router::{
    route_viewports, split_bands, ViewportRouter, Z_LEFT_EYE, Z_OBSERVER, Z_RIGHT_EYE,
};
pub use screen_rect::{ContainerSize, ScreenRect};
pub use view_mode::{ParseViewModeError, ViewMode};
pub use viewport_spec::{BlendMode, Color, TintPlane, ViewportSpec};
