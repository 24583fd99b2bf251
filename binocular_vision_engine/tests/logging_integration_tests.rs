//! Integration tests for Engine logging system
//!
//! These tests verify that a host can capture engine logs.
//!
//! Run with: cargo test --test logging_integration_tests

use binocular_vision_engine::binocular::log::{CaptureLogger, LogEntry, LogSeverity, Logger};
use binocular_vision_engine::binocular::render::{CameraRef, RecordingRenderer};
use binocular_vision_engine::binocular::{ContainerSize, Engine, EngineOptions, Error, StereoSession, ViewMode};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that keeps only the messages
struct MessageLogger {
    messages: Arc<Mutex<Vec<(LogSeverity, String)>>>,
}

impl Logger for MessageLogger {
    fn log(&self, entry: &LogEntry) {
        self.messages.lock().unwrap().push((entry.severity, entry.message.clone()));
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let messages = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(MessageLogger { messages: messages.clone() });

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    Engine::reset_logger();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], (LogSeverity::Info, "Test info message".to_string()));
    assert_eq!(messages[1].0, LogSeverity::Warn);
}

#[test]
#[serial]
fn test_integration_session_logs_mode_changes() {
    let capture = CaptureLogger::new();
    Engine::set_logger(capture.clone());

    let mut session = StereoSession::new(EngineOptions::default(), ContainerSize::new(640, 480)).unwrap();
    session.set_view_mode(ViewMode::Overlay);
    session.set_view_mode(ViewMode::Overlay);

    Engine::reset_logger();

    let mode_changes: Vec<_> = capture
        .entries_from("binocular::ViewportRouter")
        .into_iter()
        .filter(|entry| entry.severity == LogSeverity::Info)
        .collect();
    assert_eq!(mode_changes.len(), 1);
    assert!(mode_changes[0].message.contains("SBS"));
    assert!(mode_changes[0].message.contains("OVERLAY"));
}

#[test]
#[serial]
fn test_integration_render_failure_is_logged() {
    let capture = CaptureLogger::new();
    Engine::set_logger(capture.clone());

    let mut session = StereoSession::new(EngineOptions::default(), ContainerSize::new(640, 480)).unwrap();
    let mut renderer = RecordingRenderer::failing_on(CameraRef::LeftEye);
    let result = session.frame(0.016, &mut renderer);

    Engine::reset_logger();

    assert!(matches!(result, Err(Error::RenderFailed(_))));
    let errors: Vec<_> = capture
        .entries()
        .into_iter()
        .filter(|entry| entry.severity == LogSeverity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].file.is_some());
    assert!(!capture.entries_from("binocular::SceneComposer").is_empty());
}

#[test]
#[serial]
fn test_integration_invalid_options_are_logged() {
    let capture = CaptureLogger::new();
    Engine::set_logger(capture.clone());

    let result = EngineOptions::from_toml_str("[compositing]\nobserver_height_fraction = \"a third\"");

    Engine::reset_logger();

    assert!(matches!(result, Err(Error::InvalidOptions(_))));
    assert!(!capture.entries_from("binocular::Options").is_empty());
}
