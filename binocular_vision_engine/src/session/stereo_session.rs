/// StereoSession: the host-facing entry point.
///
/// Owns the current controls, the derived geometry and rig, the viewport
/// router and the animation clock. The host delivers a new `ControlState`
/// on every input event and calls `frame` once per display frame.
///
/// Geometry is recomputed only when the optical tuple changes. The view
/// mode only reaches the router and the pause flag only reaches the clock,
/// so neither can move a camera. The observer can be orbited around the
/// subject; the orbit survives control changes until `reset_observer`.

use crate::animation::{AnimationClock, RotationState};
use crate::camera::{build_rig_with, CameraRig, ObserverOrbit, SUBJECT_POSITION};
use crate::composer::{SceneComposer, SceneDescription, ViewportRenderer};
use crate::controls::ControlState;
use crate::error::Result;
use crate::optics::{DerivedGeometry, GeometryKey};
use crate::options::EngineOptions;
use crate::viewport::{ContainerSize, ViewMode, ViewportRouter, ViewportSpec};
use crate::{engine_debug, engine_info, engine_trace};

/// What one call to `StereoSession::frame` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame_index: u64,
    pub viewports_drawn: usize,
    pub rotation: RotationState,
    pub view_mode: ViewMode,
}

pub struct StereoSession {
    options: EngineOptions,
    controls: ControlState,
    geometry_key: GeometryKey,
    geometry: DerivedGeometry,
    rig: CameraRig,
    observer_orbit: Option<ObserverOrbit>,
    router: ViewportRouter,
    clock: AnimationClock,
    composer: SceneComposer,
    geometry_updates: u64,
    frame_count: u64,
}

impl StereoSession {
    /// Start a session with default controls.
    pub fn new(options: EngineOptions, size: ContainerSize) -> Result<Self> {
        Self::with_controls(options, size, ControlState::default())
    }

    pub fn with_controls(options: EngineOptions, size: ContainerSize, controls: ControlState) -> Result<Self> {
        options.validate()?;

        let geometry = controls.params.derive();
        let rig = build_rig_with(&controls.params, &geometry, &options.rig, None);
        let router = ViewportRouter::new(controls.view_mode, size, options.compositing.clone());
        let clock = AnimationClock::new(&options.animation);

        engine_info!("binocular::StereoSession",
            "Session started ({}x{}, mode {}, vergence {:.4} deg)",
            size.width, size.height, controls.view_mode, geometry.vergence_deg());

        Ok(Self {
            geometry_key: controls.params.geometry_key(),
            geometry,
            rig,
            observer_orbit: None,
            router,
            clock,
            composer: SceneComposer::new(),
            geometry_updates: 1,
            frame_count: 0,
            controls,
            options,
        })
    }

    /// Accept a new control record from the host.
    ///
    /// Recomputes geometry and rig only when IPD, distance or focal length
    /// changed. Never touches the animation clock.
    pub fn apply_controls(&mut self, controls: ControlState) {
        let key = controls.params.geometry_key();
        if key != self.geometry_key {
            self.geometry = controls.params.derive();
            self.rig = build_rig_with(
                &controls.params,
                &self.geometry,
                &self.options.rig,
                self.observer_orbit.as_ref(),
            );
            self.geometry_key = key;
            self.geometry_updates += 1;

            engine_debug!("binocular::StereoSession",
                "Geometry recomputed: IPD {} mm, distance {} m, vergence {:.4} deg",
                controls.params.ipd_mm, controls.params.target_distance_m,
                self.geometry.vergence_deg());
        }

        self.router.set_mode(controls.view_mode);
        self.controls = controls;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.controls.view_mode = mode;
        self.router.set_mode(mode);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.controls.is_paused = paused;
    }

    pub fn resize(&mut self, size: ContainerSize) {
        self.router.resize(size);
    }

    /// Orbit the observer around the subject by the given deltas.
    ///
    /// The first call starts from the current observer position. Distance
    /// is clamped to [`MIN_ORBIT_DISTANCE_M`, `MAX_ORBIT_DISTANCE_M`].
    ///
    /// [`MIN_ORBIT_DISTANCE_M`]: crate::camera::MIN_ORBIT_DISTANCE_M
    /// [`MAX_ORBIT_DISTANCE_M`]: crate::camera::MAX_ORBIT_DISTANCE_M
    pub fn orbit_observer(&mut self, delta_azimuth_rad: f32, delta_elevation_rad: f32, delta_distance_m: f32) {
        let current = self
            .observer_orbit
            .unwrap_or_else(|| ObserverOrbit::from_position(self.rig.observer.position, SUBJECT_POSITION));
        self.set_observer_orbit(current.orbited(delta_azimuth_rad, delta_elevation_rad, delta_distance_m));
    }

    pub fn set_observer_orbit(&mut self, orbit: ObserverOrbit) {
        self.observer_orbit = Some(orbit);
        self.rebuild_rig();

        engine_trace!("binocular::StereoSession",
            "Observer orbit: azimuth {:.3} rad, elevation {:.3} rad, distance {:.2} m",
            orbit.azimuth_rad(), orbit.elevation_rad(), orbit.distance_m());
    }

    /// Return the observer to its home placement above and behind the rig.
    pub fn reset_observer(&mut self) {
        if self.observer_orbit.take().is_some() {
            self.rebuild_rig();
        }
    }

    fn rebuild_rig(&mut self) {
        self.rig = build_rig_with(
            &self.controls.params,
            &self.geometry,
            &self.options.rig,
            self.observer_orbit.as_ref(),
        );
    }

    /// Draw every viewport at the clock advanced by `dt` seconds.
    ///
    /// The clock only moves when the whole frame was drawn, so a failed
    /// frame leaves both the rotation and the frame count where they were.
    pub fn frame(&mut self, dt: f32, renderer: &mut dyn ViewportRenderer) -> Result<FrameStats> {
        let mut clock = self.clock.clone();
        let rotation = clock.tick(dt, self.controls.is_paused);
        let scene = SceneDescription::from_controls(&self.controls, rotation);

        let viewports_drawn = self.composer.compose(
            renderer,
            self.router.viewports(),
            &self.rig,
            &scene,
        )?;

        self.clock = clock;
        self.frame_count += 1;

        Ok(FrameStats {
            frame_index: self.frame_count,
            viewports_drawn,
            rotation,
            view_mode: self.router.mode(),
        })
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// `None` while the observer sits at its home placement.
    pub fn observer_orbit(&self) -> Option<ObserverOrbit> {
        self.observer_orbit
    }

    pub fn viewports(&self) -> &[ViewportSpec] {
        self.router.viewports()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.router.mode()
    }

    pub fn container_size(&self) -> ContainerSize {
        self.router.size()
    }

    pub fn rotation(&self) -> RotationState {
        self.clock.rotation()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Number of times geometry has been derived, including the first.
    pub fn geometry_updates(&self) -> u64 {
        self.geometry_updates
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
#[path = "stereo_session_tests.rs"]
mod tests;
