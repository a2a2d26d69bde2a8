//! Input module: window events to camera intent.

mod camera_input;
mod key_bindings;

pub use camera_input::CameraInput;
pub use key_bindings::KeyBindings;
