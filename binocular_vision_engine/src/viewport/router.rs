/// Viewport router: maps logical cameras to screen regions.
///
/// Layout (top to bottom):
/// - stereo band: the eyes, split or stacked depending on the view mode
/// - observer band: the observer camera, always its own region, never tinted
///
/// The viewport list is a pure function of (mode, container size, options).
/// `ViewportRouter` caches it and rebuilds only when one of those changes.

use crate::camera::CameraRef;
use crate::options::{CompositingOptions, StackedModeOptions};
use crate::{engine_debug, engine_info};
use super::screen_rect::{ContainerSize, ScreenRect};
use super::view_mode::ViewMode;
use super::viewport_spec::{TintPlane, ViewportSpec};

pub const Z_LEFT_EYE: i32 = 0;
pub const Z_RIGHT_EYE: i32 = 1;
pub const Z_OBSERVER: i32 = 2;

/// Split the container into (stereo band, observer band).
///
/// The two bands tile the container exactly.
pub fn split_bands(size: ContainerSize, observer_height_fraction: f32) -> (ScreenRect, ScreenRect) {
    let fraction = if observer_height_fraction.is_finite() {
        observer_height_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let observer_height = ((size.height as f64) * fraction as f64).round() as u32;
    let observer_height = observer_height.min(size.height);
    let stereo_height = size.height - observer_height;

    (
        ScreenRect::new(0, 0, size.width, stereo_height),
        ScreenRect::new(0, stereo_height, size.width, observer_height),
    )
}

/// Build the full viewport list for a mode and container size.
///
/// Always returns exactly three viewports: left eye, right eye, observer,
/// in ascending z-order.
pub fn route_viewports(
    mode: ViewMode,
    size: ContainerSize,
    options: &CompositingOptions,
) -> Vec<ViewportSpec> {
    let (stereo, observer) = split_bands(size, options.observer_height_fraction);

    let mut viewports = match mode {
        ViewMode::SideBySide => side_by_side(stereo),
        ViewMode::Overlay => stacked(stereo, &options.overlay),
        ViewMode::Anaglyph => stacked(stereo, &options.anaglyph),
    };
    viewports.push(ViewportSpec::opaque(CameraRef::Observer, observer, Z_OBSERVER));
    viewports
}

fn side_by_side(stereo: ScreenRect) -> Vec<ViewportSpec> {
    let left_width = stereo.width / 2;
    let left = ScreenRect::new(stereo.x, stereo.y, left_width, stereo.height);
    let right = ScreenRect::new(
        stereo.x + left_width,
        stereo.y,
        stereo.width - left_width,
        stereo.height,
    );

    vec![
        ViewportSpec::opaque(CameraRef::LeftEye, left, Z_LEFT_EYE),
        ViewportSpec::opaque(CameraRef::RightEye, right, Z_RIGHT_EYE),
    ]
}

fn stacked(stereo: ScreenRect, mode: &StackedModeOptions) -> Vec<ViewportSpec> {
    let tint = |color| TintPlane {
        color,
        opacity: mode.tint_opacity,
        blend: mode.tint_blend,
        depth_offset_m: mode.tint_depth_m,
    };

    vec![
        ViewportSpec {
            camera: CameraRef::LeftEye,
            region: stereo,
            blend: mode.layer_blend,
            opacity: mode.left_opacity,
            tint: Some(tint(mode.left_tint)),
            z_order: Z_LEFT_EYE,
        },
        ViewportSpec {
            camera: CameraRef::RightEye,
            region: stereo,
            blend: mode.layer_blend,
            opacity: mode.right_opacity,
            tint: Some(tint(mode.right_tint)),
            z_order: Z_RIGHT_EYE,
        },
    ]
}

/// Cached viewport layout, rebuilt on mode or size change.
///
/// Mode transitions happen only through `set_mode`; nothing here changes
/// the mode on its own.
#[derive(Debug, Clone)]
pub struct ViewportRouter {
    mode: ViewMode,
    size: ContainerSize,
    options: CompositingOptions,
    viewports: Vec<ViewportSpec>,
    rebuild_count: u64,
}

impl ViewportRouter {
    pub fn new(mode: ViewMode, size: ContainerSize, options: CompositingOptions) -> Self {
        let viewports = route_viewports(mode, size, &options);
        Self {
            mode,
            size,
            options,
            viewports,
            rebuild_count: 1,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn size(&self) -> ContainerSize {
        self.size
    }

    pub fn options(&self) -> &CompositingOptions {
        &self.options
    }

    /// Current layout, in ascending z-order.
    pub fn viewports(&self) -> &[ViewportSpec] {
        &self.viewports
    }

    /// Viewport showing `camera`.
    pub fn viewport_for(&self, camera: CameraRef) -> Option<&ViewportSpec> {
        self.viewports.iter().find(|spec| spec.camera == camera)
    }

    /// Number of times the layout has been computed (including construction).
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Switch view mode. Returns true if the layout was rebuilt.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if mode == self.mode {
            return false;
        }
        engine_info!("binocular::ViewportRouter", "View mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.rebuild();
        true
    }

    /// Track a container resize. Returns true if the layout was rebuilt.
    pub fn resize(&mut self, size: ContainerSize) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.rebuild();
        true
    }

    /// Replace compositing options; always rebuilds.
    pub fn set_options(&mut self, options: CompositingOptions) {
        self.options = options;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.viewports = route_viewports(self.mode, self.size, &self.options);
        self.rebuild_count += 1;
        engine_debug!(
            "binocular::ViewportRouter",
            "Rebuilt {} viewports for {} at {}x{}",
            self.viewports.len(),
            self.mode,
            self.size.width,
            self.size.height
        );
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
