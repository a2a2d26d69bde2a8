/// Viewer startup settings.
///
/// Window size and the normal-mapping toggle are the only settings the
/// renderer consumes. The camera values reproduce the Sponza walkthrough.

use bit_demo_engine::bit::camera::{FlyCameraConfig, Projection};
use bit_demo_engine::bit::log::LogSeverity;
use bit_demo_engine::bit::Result;
use clap::Parser;
use glam::Vec3;

/// Environment variable selecting the minimum log severity.
pub const LOG_LEVEL_VAR: &str = "BIT_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub use_normal_mapping: bool,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera: FlyCameraConfig,
    /// Run this many simulated frames without a window
    pub headless_frames: Option<u32>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            title: "Bit Engine - Sponza".to_string(),
            window_width: 800,
            window_height: 600,
            use_normal_mapping: true,
            fov_y_degrees: 45.0,
            near: 2.0,
            far: 4000.0,
            camera: FlyCameraConfig::default()
                .with_position(Vec3::new(-900.0, 600.0, -200.0))
                .with_direction(Vec3::new(1.0, -0.5, 0.4))
                .with_movement_speed(1000.0)
                .with_rotation_speed(4.0),
            headless_frames: None,
        }
    }
}

/// Command line of the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "bit_demo_viewer", about = "Fly through the Sponza scene with the Bit demo camera")]
pub struct ViewerArgs {
    /// Run this many simulated frames without opening a window
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u32>,

    /// Window size in pixels
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_window_size)]
    pub size: Option<WindowSize>,
}

/// Non-empty window size parsed from `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

fn parse_window_size(value: &str) -> std::result::Result<WindowSize, String> {
    let invalid = || format!("expected WIDTHxHEIGHT, got '{}'", value);
    let (width, height) = value.split_once('x').ok_or_else(invalid)?;
    let width = width.parse::<u32>().map_err(|_| invalid())?;
    let height = height.parse::<u32>().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(format!("window size must be non-empty, got {}x{}", width, height));
    }
    Ok(WindowSize { width, height })
}

impl ViewerSettings {
    /// Apply parsed command line arguments on top of these settings.
    pub fn with_args(mut self, args: &ViewerArgs) -> Self {
        if let Some(frames) = args.headless {
            self.headless_frames = Some(frames);
        }
        if let Some(size) = args.size {
            self.window_width = size.width;
            self.window_height = size.height;
        }
        self
    }

    pub fn projection(&self) -> Result<Projection> {
        Projection::for_viewport(
            self.fov_y_degrees,
            self.window_width,
            self.window_height,
            self.near,
            self.far,
        )
    }
}

/// Parse a severity name such as `debug` or `WARN`.
pub fn parse_severity(name: &str) -> Option<LogSeverity> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LogSeverity::Trace),
        "debug" => Some(LogSeverity::Debug),
        "info" => Some(LogSeverity::Info),
        "warn" | "warning" => Some(LogSeverity::Warn),
        "error" => Some(LogSeverity::Error),
        _ => None,
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
