/// CameraInput: translates window events into fly camera intent.
///
/// Event handlers only update held-key and cursor state. `apply()` runs once
/// per frame, right before `FlyCamera::update()`, and re-issues every held
/// movement key plus the mouse delta gathered since the previous frame.

use glam::{DVec2, Vec2};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use crate::camera::{FlyCamera, MovementFlags};
use super::key_bindings::KeyBindings;

#[derive(Debug, Clone, Default)]
pub struct CameraInput {
    bindings: KeyBindings,
    held: MovementFlags,
    dragging: bool,
    /// Last known cursor position in window pixels
    cursor: Option<DVec2>,
    /// Screen-space delta accumulated while dragging
    mouse_delta: Vec2,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self { bindings, ..Self::default() }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Replace the bindings. Held keys are released.
    pub fn set_bindings(&mut self, bindings: KeyBindings) {
        self.bindings = bindings;
        self.held = MovementFlags::empty();
    }

    /// Returns `true` if the key is bound to a movement.
    pub fn on_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(flag) = self.bindings.movement_for(key) else {
            return false;
        };
        self.held.set(flag, pressed);
        true
    }

    /// Returns `true` if the button is the rotate button.
    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) -> bool {
        if button != self.bindings.rotate_button {
            return false;
        }
        self.dragging = pressed;
        true
    }

    /// Track the cursor; while dragging, add the offset from the previous position.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let position = DVec2::new(x, y);
        if !position.is_finite() {
            return;
        }
        if self.dragging {
            if let Some(previous) = self.cursor {
                self.mouse_delta += (position - previous).as_vec2();
            }
        }
        self.cursor = Some(position);
    }

    /// Release everything: the window no longer receives key-up events.
    pub fn on_focus_lost(&mut self) {
        self.held = MovementFlags::empty();
        self.dragging = false;
        self.mouse_delta = Vec2::ZERO;
    }

    /// Forward this frame's input to the camera.
    pub fn apply(&mut self, camera: &mut FlyCamera) {
        if self.held.contains(MovementFlags::FORWARD) {
            camera.move_forward();
        }
        if self.held.contains(MovementFlags::BACKWARD) {
            camera.move_backward();
        }
        if self.held.contains(MovementFlags::LEFT) {
            camera.move_left();
        }
        if self.held.contains(MovementFlags::RIGHT) {
            camera.move_right();
        }
        if self.mouse_delta != Vec2::ZERO {
            camera.rotate(self.mouse_delta.x, self.mouse_delta.y);
            self.mouse_delta = Vec2::ZERO;
        }
    }

    pub fn held_movement(&self) -> MovementFlags {
        self.held
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mouse delta waiting for the next `apply()`.
    pub fn pending_mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }
}

#[cfg(test)]
#[path = "camera_input_tests.rs"]
mod tests;
