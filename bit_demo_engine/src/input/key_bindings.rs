/// Key and mouse-button bindings for camera control.

use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use crate::error::Result;
use crate::bit_bail;
use crate::camera::MovementFlags;

/// Physical keys mapped to movement intents, plus the button that enables mouse-look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    /// Held to rotate with the mouse
    pub rotate_button: MouseButton,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            rotate_button: MouseButton::Left,
        }
    }
}

impl KeyBindings {
    /// Movement intent bound to `key`, if any.
    pub fn movement_for(&self, key: KeyCode) -> Option<MovementFlags> {
        if key == self.forward {
            Some(MovementFlags::FORWARD)
        } else if key == self.backward {
            Some(MovementFlags::BACKWARD)
        } else if key == self.left {
            Some(MovementFlags::LEFT)
        } else if key == self.right {
            Some(MovementFlags::RIGHT)
        } else {
            None
        }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if one key is bound to two movements.
    pub fn validate(&self) -> Result<()> {
        let keys = [self.forward, self.backward, self.left, self.right];
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                bit_bail!("bit::KeyBindings", "{:?} is bound to more than one movement", key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "key_bindings_tests.rs"]
mod tests;
