/*!
# Bit Demo Engine

Camera and frame-loop core shared by the Bit Engine demos.

The crate is renderer-agnostic: it produces view and projection matrices
and hands them to a `ViewUniformSink` implemented by the host.

## Architecture

- **FlyCamera**: free-look camera driven by movement/rotation intent and a per-frame delta time
- **Projection**: perspective projection parameters
- **CameraInput**: maps winit key, mouse and focus events to camera intent
- **AppContext**: owns camera, input, projection, timer and sink for one window
- **Logger**: pluggable logging backend, installed through `Engine::set_logger`
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod input;
pub mod app;

// Main bit namespace module
pub mod bit {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Frame loop sub-module
    pub mod app {
        pub use crate::app::*;
    }
}

// Re-export math and windowing libraries at crate root
pub use glam;
pub use winit;
