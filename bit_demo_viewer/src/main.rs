use bit_demo_engine::bit::app::{AppContext, RecordingUniformSink, VIEW_MATRIX_UNIFORM};
use bit_demo_engine::bit::log::DefaultLogger;
use bit_demo_engine::bit::{Engine, Error, Result};
use bit_demo_engine::{bit_info, bit_warn};
use winit::keyboard::KeyCode;
use winit::event_loop::{ControlFlow, EventLoop};

mod settings;
mod viewer;

use clap::Parser;
use settings::{parse_severity, ViewerArgs, ViewerSettings, LOG_LEVEL_VAR};
use viewer::Viewer;

const HEADLESS_DELTA_TIME: f32 = 1.0 / 60.0;

fn install_logger() {
    if let Ok(level) = std::env::var(LOG_LEVEL_VAR) {
        match parse_severity(&level) {
            Some(severity) => Engine::set_logger(DefaultLogger::with_min_severity(severity)),
            None => bit_warn!("bit::Viewer", "Ignoring unknown {} '{}'", LOG_LEVEL_VAR, level),
        }
    }
}

/// Fly forward at a fixed step without opening a window.
fn run_headless(settings: &ViewerSettings, frames: u32) -> Result<()> {
    let mut context = AppContext::new(settings.camera, settings.projection()?, RecordingUniformSink::new())?;

    context.input_mut().on_key(KeyCode::KeyW, true);
    for _ in 0..frames {
        context.frame_with_delta(HEADLESS_DELTA_TIME);
    }

    let camera = context.camera();
    bit_info!("bit::Viewer",
        "Headless run: {} frames, {} view uploads, camera at {:?} (yaw {:.2}°, pitch {:.2}°)",
        context.frame_count(),
        context.sink().upload_count(VIEW_MATRIX_UNIFORM),
        camera.position(),
        camera.yaw(),
        camera.pitch());
    Ok(())
}

fn main() -> Result<()> {
    install_logger();

    let args = ViewerArgs::parse();
    let settings = ViewerSettings::default().with_args(&args);

    if let Some(frames) = settings.headless_frames {
        return run_headless(&settings, frames);
    }

    let event_loop = EventLoop::new().map_err(|e| Error::InitializationFailed(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut viewer = Viewer::new(settings);
    event_loop
        .run_app(&mut viewer)
        .map_err(|e| Error::WindowError(e.to_string()))?;

    match viewer.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
