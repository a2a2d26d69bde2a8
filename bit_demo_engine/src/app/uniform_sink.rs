/// Renderer seam for camera matrices.
///
/// The frame loop never talks to a GPU API directly. It hands named
/// matrices to a `ViewUniformSink`, which the host implements on top of
/// its shader/uniform system.

use glam::Mat4;

/// Uniform name of the view matrix.
pub const VIEW_MATRIX_UNIFORM: &str = "ViewMatrix";

/// Uniform name of the projection matrix.
pub const PROJECTION_MATRIX_UNIFORM: &str = "ProjectionMatrix";

/// Receives matrix uploads from the frame loop.
pub trait ViewUniformSink {
    fn upload_matrix(&mut self, name: &str, matrix: &Mat4);
}

/// Column-major bytes of a matrix, as uploaded to a uniform buffer.
pub fn matrix_bytes(matrix: &Mat4) -> &[u8] {
    bytemuck::bytes_of(matrix)
}

/// One recorded upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformUpload {
    pub name: String,
    pub matrix: Mat4,
}

/// In-memory sink that records every upload (no GPU required).
#[derive(Debug, Default)]
pub struct RecordingUniformSink {
    uploads: Vec<UniformUpload>,
}

impl RecordingUniformSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All uploads in order.
    pub fn uploads(&self) -> &[UniformUpload] {
        &self.uploads
    }

    pub fn upload_count(&self, name: &str) -> usize {
        self.uploads.iter().filter(|upload| upload.name == name).count()
    }

    /// Most recent matrix uploaded under `name`.
    pub fn last(&self, name: &str) -> Option<&Mat4> {
        self.uploads
            .iter()
            .rev()
            .find(|upload| upload.name == name)
            .map(|upload| &upload.matrix)
    }

    pub fn clear(&mut self) {
        self.uploads.clear();
    }
}

impl ViewUniformSink for RecordingUniformSink {
    fn upload_matrix(&mut self, name: &str, matrix: &Mat4) {
        self.uploads.push(UniformUpload {
            name: name.to_string(),
            matrix: *matrix,
        });
    }
}

#[cfg(test)]
#[path = "uniform_sink_tests.rs"]
mod tests;
