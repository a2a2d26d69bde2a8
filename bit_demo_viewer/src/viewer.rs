use bit_demo_engine::bit::app::{matrix_bytes, AppContext, ViewUniformSink};
use bit_demo_engine::bit::{Error, Result};
use glam::Mat4;
use bit_demo_engine::{bit_debug, bit_error, bit_info, bit_trace};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use crate::settings::ViewerSettings;

/// Reports uploads through the logger in place of a GPU uniform buffer.
#[derive(Debug, Default)]
pub struct LogUniformSink {
    uploads: u64,
}

impl LogUniformSink {
    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}

impl ViewUniformSink for LogUniformSink {
    fn upload_matrix(&mut self, name: &str, matrix: &Mat4) {
        self.uploads += 1;
        bit_trace!("bit::Viewer", "Upload {} ({} bytes)", name, matrix_bytes(matrix).len());
    }
}

struct ViewerState {
    window: Window,
    context: AppContext<LogUniformSink>,
}

pub struct Viewer {
    settings: ViewerSettings,
    state: Option<ViewerState>,
    use_normal_mapping: bool,
    error: Option<Error>,
}

impl Viewer {
    pub fn new(settings: ViewerSettings) -> Self {
        let use_normal_mapping = settings.use_normal_mapping;
        Self {
            settings,
            state: None,
            use_normal_mapping,
            error: None,
        }
    }

    /// First error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn create_state(&self, event_loop: &ActiveEventLoop) -> Result<ViewerState> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));
        let window = event_loop
            .create_window(attributes)
            .map_err(|e| Error::WindowError(e.to_string()))?;

        let context = AppContext::new(
            self.settings.camera,
            self.settings.projection()?,
            LogUniformSink::default(),
        )?;

        Ok(ViewerState { window, context })
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;

        if let Some(state) = &mut self.state {
            if state.context.input_mut().on_key(code, pressed) {
                return;
            }
        }
        if pressed && !event.repeat && self.handle_shortcut(code) {
            event_loop.exit();
        }
    }

    /// Viewer-level shortcuts. Returns `true` when the viewer should exit.
    fn handle_shortcut(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Escape => true,
            KeyCode::KeyM => {
                self.use_normal_mapping = !self.use_normal_mapping;
                bit_info!("bit::Viewer", "Normal mapping {}",
                    if self.use_normal_mapping { "enabled" } else { "disabled" });
                false
            }
            _ => false,
        }
    }

    pub fn use_normal_mapping(&self) -> bool {
        self.use_normal_mapping
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.create_state(event_loop) {
            Ok(state) => {
                bit_info!("bit::Viewer", "Window {}x{} created",
                    self.settings.window_width, self.settings.window_height);
                self.state = Some(state);
            }
            Err(e) => {
                bit_error!("bit::Viewer", "Failed to start viewer: {}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.on_key(event_loop, &event),
            _ => {
                let Some(state) = &mut self.state else {
                    return;
                };
                match event {
                    WindowEvent::MouseInput { state: button_state, button, .. } => {
                        state.context.input_mut()
                            .on_mouse_button(button, button_state == ElementState::Pressed);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        state.context.input_mut().on_cursor_moved(position.x, position.y);
                    }
                    WindowEvent::Focused(false) => {
                        state.context.input_mut().on_focus_lost();
                    }
                    WindowEvent::Focused(true) => {
                        state.context.restart_timer();
                    }
                    WindowEvent::Resized(size) => {
                        state.context.resize(size.width, size.height);
                    }
                    WindowEvent::RedrawRequested => {
                        if state.context.frame() {
                            bit_trace!("bit::Viewer", "View matrix updated (frame {})",
                                state.context.frame_count());
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            bit_debug!("bit::Viewer", "Exiting after {} frames, {} uploads",
                state.context.frame_count(), state.context.sink().uploads());
        }
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
