/// AppContext: explicit owner of everything one demo frame touches.
///
/// Camera, input state, projection, frame timer and the uniform sink live
/// here instead of in process-wide globals. The host's event loop forwards
/// window events to `input_mut()` and calls `frame()` once per redraw.

use crate::error::Result;
use crate::camera::{FlyCamera, FlyCameraConfig, Projection};
use crate::input::{CameraInput, KeyBindings};
use crate::{bit_debug, bit_info};
use super::frame_timer::FrameTimer;
use super::uniform_sink::{ViewUniformSink, PROJECTION_MATRIX_UNIFORM, VIEW_MATRIX_UNIFORM};

pub struct AppContext<S: ViewUniformSink> {
    camera: FlyCamera,
    input: CameraInput,
    projection: Projection,
    timer: FrameTimer,
    sink: S,
    frame_count: u64,
}

impl<S: ViewUniformSink> AppContext<S> {
    /// Build the camera and upload the initial view and projection matrices.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the camera config is invalid.
    pub fn new(config: FlyCameraConfig, projection: Projection, sink: S) -> Result<Self> {
        Self::with_bindings(config, projection, KeyBindings::default(), sink)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the camera config or the key
    /// bindings are invalid.
    pub fn with_bindings(
        config: FlyCameraConfig,
        projection: Projection,
        bindings: KeyBindings,
        sink: S,
    ) -> Result<Self> {
        bindings.validate()?;
        let camera = FlyCamera::with_config(config)?;

        let mut context = Self {
            camera,
            input: CameraInput::with_bindings(bindings),
            projection,
            timer: FrameTimer::new(),
            sink,
            frame_count: 0,
        };
        context.upload_projection();
        context.upload_view();

        bit_info!("bit::AppContext", "Frame context ready (camera at {:?})", context.camera.position());
        Ok(context)
    }

    /// Run one frame using the wall-clock time since the previous frame.
    pub fn frame(&mut self) -> bool {
        let delta_time = self.timer.tick();
        self.frame_with_delta(delta_time)
    }

    /// Run one frame with an explicit delta time in seconds.
    ///
    /// Applies pending input, updates the camera and re-uploads the view
    /// matrix only when the camera reports a change. Returns that flag.
    pub fn frame_with_delta(&mut self, delta_time: f32) -> bool {
        self.input.apply(&mut self.camera);
        let changed = self.camera.update(delta_time);
        if changed {
            self.upload_view();
        }
        self.frame_count += 1;
        changed
    }

    /// Apply a new viewport size. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.projection.set_viewport_size(width, height) {
            bit_debug!("bit::AppContext", "Viewport resized to {}x{}", width, height);
            self.upload_projection();
        }
    }

    /// Restart the frame timer after a stall.
    pub fn restart_timer(&mut self) {
        self.timer.restart();
    }

    fn upload_view(&mut self) {
        self.sink.upload_matrix(VIEW_MATRIX_UNIFORM, self.camera.matrix());
    }

    fn upload_projection(&mut self) {
        let matrix = self.projection.matrix();
        self.sink.upload_matrix(PROJECTION_MATRIX_UNIFORM, &matrix);
    }

    // ===== ACCESSORS =====

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    /// Direct camera access. Setter changes are uploaded on the next frame.
    pub fn camera_mut(&mut self) -> &mut FlyCamera {
        &mut self.camera
    }

    pub fn input(&self) -> &CameraInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut CameraInput {
        &mut self.input
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Frames run since construction.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
#[path = "app_context_tests.rs"]
mod tests;
