//! Headless demo of the binocular vision engine.
//!
//! Runs a session against a console renderer, cycling through the view
//! modes and a few IPD presets. Pass a TOML options file as the first
//! argument to override the defaults.
//!
//! Run with: cargo run -p binocular_vision_demo -- [options.toml]

use std::path::Path;
use std::process::ExitCode;
use colored::*;
use binocular_vision_engine::binocular::log::{DefaultLogger, LogSeverity};
use binocular_vision_engine::binocular::render::{
    CameraPose, CameraRef, SceneFrame, ViewportRenderer, ViewportSpec,
};
use binocular_vision_engine::binocular::{
    ContainerSize, ControlState, Engine, EngineOptions, Result, StereoSession, ViewMode,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES_PER_STEP: u32 = 30;

/// (label, IPD in mm) presets walked through by the demo
const IPD_PRESETS: [(&str, f32); 3] = [
    ("human", 64.0),
    ("cyclops", 0.0),
    ("hammerhead", 6500.0),
];

/// Console color per camera: cyan left eye, red right eye.
fn label_color(camera: CameraRef) -> Color {
    match camera {
        CameraRef::LeftEye => Color::TrueColor { r: 0x22, g: 0xd3, b: 0xee },
        CameraRef::RightEye => Color::TrueColor { r: 0xf8, g: 0x71, b: 0x71 },
        CameraRef::Observer => Color::White,
    }
}

/// Prints one line per viewport on the last frame of each step.
struct ConsoleRenderer {
    verbose: bool,
}

impl ViewportRenderer for ConsoleRenderer {
    fn render_viewport(
        &mut self,
        viewport: &ViewportSpec,
        pose: &CameraPose,
        frame: &SceneFrame<'_>,
    ) -> Result<()> {
        if !self.verbose {
            return Ok(());
        }

        let label = viewport.camera.label().color(label_color(viewport.camera));
        let tint = viewport
            .tint
            .map(|tint| format!(" tint {:?} {:.2}", tint.blend, tint.opacity))
            .unwrap_or_default();

        println!(
            "    {} z={} region={}x{}+{}+{} pos=({:.3}, {:.3}, {:.3}) yaw={:+.4} blend={:?} opacity={:.2}{}{}",
            label,
            viewport.z_order,
            viewport.region.width,
            viewport.region.height,
            viewport.region.x,
            viewport.region.y,
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.yaw,
            viewport.blend,
            viewport.opacity,
            tint,
            if frame.draws_camera_visualizers() { " [rig visible]" } else { "" },
        );
        Ok(())
    }
}

fn load_options() -> Result<EngineOptions> {
    match std::env::args().nth(1) {
        Some(path) => EngineOptions::load(Path::new(&path)),
        None => Ok(EngineOptions::default()),
    }
}

fn run() -> Result<()> {
    let options = load_options()?;
    let mut session = StereoSession::new(options, ContainerSize::new(1280, 720))?;
    let mut renderer = ConsoleRenderer { verbose: false };

    for (preset, ipd_mm) in IPD_PRESETS {
        let mut controls = ControlState::default();
        controls.params.ipd_mm = ipd_mm;

        for mode in ViewMode::ALL {
            controls.view_mode = mode;
            session.apply_controls(controls.clamped());

            let geometry = session.geometry();
            println!(
                "{} {} | {} | vergence {:.4} deg, baseline {:.3} m",
                "==>".green().bold(),
                preset.bold(),
                mode,
                geometry.vergence_deg(),
                session.rig().baseline_m(),
            );

            for step in 0..FRAMES_PER_STEP {
                renderer.verbose = step + 1 == FRAMES_PER_STEP;
                session.frame(FRAME_DT, &mut renderer)?;
            }
        }
    }

    let rotation = session.rotation();
    println!(
        "{} {} frames, subject yaw {:.3} rad, pitch {:.3} rad",
        "done".green().bold(),
        session.frame_count(),
        rotation.yaw,
        rotation.pitch,
    );
    Ok(())
}

fn main() -> ExitCode {
    Engine::set_logger(DefaultLogger::new(LogSeverity::Info));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
