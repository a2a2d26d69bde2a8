//! App module: per-frame glue between input, camera and renderer.

mod app_context;
mod frame_timer;
mod uniform_sink;

pub use app_context::AppContext;
pub use frame_timer::FrameTimer;
pub use uniform_sink::{
    matrix_bytes, RecordingUniformSink, UniformUpload, ViewUniformSink,
    PROJECTION_MATRIX_UNIFORM, VIEW_MATRIX_UNIFORM,
};
