/// Perspective projection paired with the fly camera's view matrix.
///
/// OpenGL clip-space convention (depth in [-1, 1]), right-handed, matching
/// the `look_to_rh` view matrix built by `FlyCamera`.

use glam::Mat4;
use crate::error::Result;
use crate::bit_bail;

/// Vertical-FOV perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if fov is outside (0, 180), aspect
    /// is not positive, near is not positive or far <= near.
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
            bit_bail!("bit::Projection", "fov must be in (0, 180) degrees, got {}", fov_y_degrees);
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            bit_bail!("bit::Projection", "aspect must be > 0, got {}", aspect);
        }
        if !(near.is_finite() && near > 0.0) {
            bit_bail!("bit::Projection", "near must be > 0, got {}", near);
        }
        if !(far.is_finite() && far > near) {
            bit_bail!("bit::Projection", "far ({}) must be > near ({})", far, near);
        }
        Ok(Self { fov_y_degrees, aspect, near, far })
    }

    /// Projection whose aspect ratio comes from a viewport size in pixels.
    pub fn for_viewport(
        fov_y_degrees: f32,
        width: u32,
        height: u32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            bit_bail!("bit::Projection", "viewport must be non-empty, got {}x{}", width, height);
        }
        Self::new(fov_y_degrees, width as f32 / height as f32, near, far)
    }

    /// Update the aspect ratio after a resize.
    ///
    /// Returns `false` (and keeps the old aspect) for a zero-sized viewport,
    /// which happens while a window is minimized.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }
}

impl Default for Projection {
    /// 45° vertical FOV on an 800x600 viewport, depth range [2, 4000].
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 2.0,
            far: 4000.0,
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
