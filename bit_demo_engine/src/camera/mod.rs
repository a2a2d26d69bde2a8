//! Camera module: fly camera controller and projection.
//!
//! The camera is owned and driven by the application's frame loop.
//! It consumes a delta time and discrete movement/rotation commands and
//! produces a view matrix for the renderer.

pub mod angles;
mod config;
mod fly_camera;
mod movement;
mod projection;

pub use angles::{PITCH_LIMIT, WORLD_UP, CANONICAL_FORWARD};
pub use config::FlyCameraConfig;
pub use fly_camera::FlyCamera;
pub use movement::MovementFlags;
pub use projection::Projection;
