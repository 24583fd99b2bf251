use crate::camera::{CameraRef, MAX_ORBIT_DISTANCE_M, MIN_ORBIT_DISTANCE_M};
use crate::composer::RecordingRenderer;
use crate::error::Error;
use crate::optics::OpticalParameters;
use super::*;

fn session() -> StereoSession {
    StereoSession::new(EngineOptions::default(), ContainerSize::new(1200, 900)).unwrap()
}

fn controls_with_ipd(ipd_mm: f32) -> ControlState {
    let mut controls = ControlState::default();
    controls.params.ipd_mm = ipd_mm;
    controls
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_session_uses_defaults() {
    let session = session();
    assert_eq!(*session.controls(), ControlState::default());
    assert_eq!(session.view_mode(), ViewMode::SideBySide);
    assert_eq!(session.viewports().len(), 3);
    assert!((session.geometry().half_baseline_m - 0.032).abs() < 1e-7);
    assert_eq!(session.geometry_updates(), 1);
    assert_eq!(session.frame_count(), 0);
}

#[test]
fn test_new_session_rejects_invalid_options() {
    let mut options = EngineOptions::default();
    options.compositing.observer_height_fraction = 2.0;
    let result = StereoSession::new(options, ContainerSize::new(800, 600));
    assert!(matches!(result, Err(Error::InvalidOptions(_))));
}

// ============================================================================
// Memoization
// ============================================================================

#[test]
fn test_geometry_recomputed_only_on_optical_change() {
    let mut session = session();

    // Same tuple: no recompute
    session.apply_controls(ControlState::default());
    assert_eq!(session.geometry_updates(), 1);

    // Scale, wireframe and object type do not move cameras
    let mut cosmetic = ControlState::default();
    cosmetic.params.object_scale = 2.0;
    cosmetic.wireframe = true;
    cosmetic.camera_visualizer_scale = 0.5;
    session.apply_controls(cosmetic);
    assert_eq!(session.geometry_updates(), 1);
    assert_eq!(session.controls().params.object_scale, 2.0);

    session.apply_controls(controls_with_ipd(100.0));
    assert_eq!(session.geometry_updates(), 2);
    assert!((session.rig().right.position.x - 0.05).abs() < 1e-7);
}

#[test]
fn test_apply_controls_switches_mode() {
    let mut session = session();
    let controls = ControlState {
        view_mode: ViewMode::Anaglyph,
        ..ControlState::default()
    };
    session.apply_controls(controls);
    assert_eq!(session.view_mode(), ViewMode::Anaglyph);
    assert!(session.viewports().iter().any(|viewport| viewport.tint.is_some()));
}

// ============================================================================
// Mode and pause independence
// ============================================================================

#[test]
fn test_mode_switch_keeps_rig() {
    let mut session = session();
    let before = *session.rig();

    for mode in [ViewMode::Anaglyph, ViewMode::Overlay, ViewMode::SideBySide] {
        session.set_view_mode(mode);
        assert_eq!(*session.rig(), before);
        assert_eq!(session.geometry_updates(), 1);
    }
}

#[test]
fn test_pause_keeps_geometry_and_rotation() {
    let mut session = session();
    let mut renderer = RecordingRenderer::new();

    session.frame(1.0, &mut renderer).unwrap();
    let rotation = session.rotation();
    let rig = *session.rig();

    session.set_paused(true);
    for _ in 0..5 {
        let stats = session.frame(0.5, &mut renderer).unwrap();
        assert_eq!(stats.rotation, rotation);
    }
    assert_eq!(*session.rig(), rig);

    session.set_paused(false);
    let stats = session.frame(0.5, &mut renderer).unwrap();
    assert!(stats.rotation.yaw > rotation.yaw);
}

#[test]
fn test_apply_controls_does_not_touch_clock() {
    let mut session = session();
    let mut renderer = RecordingRenderer::new();
    session.frame(2.0, &mut renderer).unwrap();
    let rotation = session.rotation();

    session.apply_controls(controls_with_ipd(0.0));
    assert_eq!(session.rotation(), rotation);
}

// ============================================================================
// Frames
// ============================================================================

#[test]
fn test_frame_draws_all_viewports() {
    let mut session = session();
    let mut renderer = RecordingRenderer::new();

    let stats = session.frame(0.016, &mut renderer).unwrap();
    assert_eq!(stats.frame_index, 1);
    assert_eq!(stats.viewports_drawn, 3);
    assert_eq!(stats.view_mode, ViewMode::SideBySide);
    assert_eq!(renderer.draws().len(), 3);
    assert_eq!(session.frame_count(), 1);
}

#[test]
fn test_frame_reflects_current_rig() {
    let mut session = session();
    let mut renderer = RecordingRenderer::new();
    session.apply_controls(controls_with_ipd(0.0));
    session.frame(0.016, &mut renderer).unwrap();

    let left = renderer.draws().iter().find(|draw| draw.camera == CameraRef::LeftEye).unwrap();
    assert_eq!(left.pose.position, glam::Vec3::new(0.0, 0.0, 2.5));
    assert_eq!(left.pose.yaw, 0.0);
}

#[test]
fn test_frame_error_propagates() {
    let mut session = session();
    let mut renderer = RecordingRenderer::failing_on(CameraRef::Observer);
    let result = session.frame(0.016, &mut renderer);
    assert!(matches!(result, Err(Error::RenderFailed(_))));
    assert_eq!(session.frame_count(), 0);
}

#[test]
fn test_failed_frame_does_not_advance_rotation() {
    let mut session = session();
    let mut failing = RecordingRenderer::failing_on(CameraRef::RightEye);
    assert!(session.frame(0.5, &mut failing).is_err());
    assert_eq!(session.rotation(), RotationState::default());

    // The retried frame sees the same dt applied once
    let mut renderer = RecordingRenderer::new();
    let stats = session.frame(0.5, &mut renderer).unwrap();
    assert_eq!(stats.rotation, session.rotation());
    assert!((stats.rotation.yaw - 0.1).abs() < 1e-6);
    assert_eq!(stats.frame_index, 1);
}

// ============================================================================
// Observer orbit
// ============================================================================

#[test]
fn test_orbit_survives_ipd_change() {
    let mut session = session();
    assert!(session.observer_orbit().is_none());

    session.orbit_observer(0.6, -0.2, 3.0);
    let orbited = session.rig().observer;
    assert_ne!(orbited.position, glam::Vec3::new(0.0, 8.0, 7.5));

    session.apply_controls(controls_with_ipd(6500.0));
    assert_eq!(session.geometry_updates(), 2);
    assert_eq!(session.rig().observer, orbited);
    assert!((session.rig().right.position.x - 3.25).abs() < 1e-5);
}

#[test]
fn test_orbit_starts_from_home_placement() {
    let mut session = session();
    let home = session.rig().observer.position;

    session.orbit_observer(0.0, 0.0, 0.0);
    assert!(session.rig().observer.position.abs_diff_eq(home, 1e-4));
}

#[test]
fn test_orbit_distance_is_clamped() {
    let mut session = session();

    session.orbit_observer(0.0, 0.0, -100.0);
    let distance = session.rig().observer.position.length();
    assert!((distance - MIN_ORBIT_DISTANCE_M).abs() < 1e-4);

    session.orbit_observer(1.0, 0.3, 100.0);
    let distance = session.rig().observer.position.length();
    assert!((distance - MAX_ORBIT_DISTANCE_M).abs() < 1e-4);
}

#[test]
fn test_reset_observer_returns_home() {
    let mut session = session();
    session.orbit_observer(1.2, 0.1, -4.0);
    session.reset_observer();

    assert!(session.observer_orbit().is_none());
    assert_eq!(session.rig().observer.position, glam::Vec3::new(0.0, 8.0, 7.5));
    assert_eq!(session.rig().observer.yaw, 0.0);
}

#[test]
fn test_resize_rebuilds_layout() {
    let mut session = session();
    session.resize(ContainerSize::new(600, 300));
    assert_eq!(session.container_size(), ContainerSize::new(600, 300));

    let observer = session
        .viewports()
        .iter()
        .find(|viewport| viewport.camera == CameraRef::Observer)
        .unwrap();
    assert_eq!(observer.region.width, 600);
    assert_eq!(observer.region.height, 100);
}

#[test]
fn test_with_controls_starts_from_given_state() {
    let controls = ControlState {
        params: OpticalParameters::new(0.0, 10.0, 35.0),
        view_mode: ViewMode::Overlay,
        ..ControlState::default()
    };
    let session = StereoSession::with_controls(
        EngineOptions::default(),
        ContainerSize::new(800, 600),
        controls,
    )
    .unwrap();

    assert!(session.geometry().is_cyclopean());
    assert_eq!(session.view_mode(), ViewMode::Overlay);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
#[serial_test::serial]
fn test_recompute_and_mode_change_are_logged() {
    use crate::binocular::Engine;
    use crate::log::{CaptureLogger, LogSeverity};

    let capture = CaptureLogger::new();
    Engine::set_logger(capture.clone());

    let mut session = session();
    session.apply_controls(controls_with_ipd(6500.0));
    session.set_view_mode(ViewMode::Anaglyph);

    Engine::reset_logger();

    assert!(capture
        .entries_from("binocular::StereoSession")
        .iter()
        .any(|entry| entry.severity == LogSeverity::Debug && entry.message.contains("IPD 6500")));
    assert!(capture
        .entries_from("binocular::ViewportRouter")
        .iter()
        .any(|entry| entry.severity == LogSeverity::Info && entry.message.contains("ANAGLYPH")));
}
