/// Fly camera configuration.
///
/// Camera parameters are set programmatically by the host application at
/// startup. `FlyCamera::with_config()` validates the config before use.

use glam::Vec3;
use crate::error::Result;
use crate::bit_bail;
use super::angles::CANONICAL_FORWARD;

/// Startup parameters for a `FlyCamera`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCameraConfig {
    /// Initial eye position (world space)
    pub position: Vec3,
    /// Initial view direction, any non-zero length
    pub direction: Vec3,
    /// Linear speed in units per second
    pub movement_speed: f32,
    /// Angular speed of `rotate_*` in degrees per input unit per second
    pub rotation_speed: f32,
    /// Degrees turned per unit of `rotate(dx, dy)` mouse delta, independent of frame time
    pub look_sensitivity: f32,
    /// Upper bound applied to `update()` delta times, in seconds
    pub max_delta_time: f32,
    /// Normalize combined forward + sideways movement so diagonals are not faster
    pub normalize_diagonal: bool,
}

impl Default for FlyCameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: CANONICAL_FORWARD,
            movement_speed: 1.0,
            rotation_speed: 1.0,
            look_sensitivity: 1.0,
            max_delta_time: 1.0,
            normalize_diagonal: false,
        }
    }
}

impl FlyCameraConfig {
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_direction(mut self, direction: Vec3) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_look_sensitivity(mut self, degrees_per_unit: f32) -> Self {
        self.look_sensitivity = degrees_per_unit;
        self
    }

    pub fn with_max_delta_time(mut self, seconds: f32) -> Self {
        self.max_delta_time = seconds;
        self
    }

    pub fn with_normalize_diagonal(mut self, enabled: bool) -> Self {
        self.normalize_diagonal = enabled;
        self
    }

    /// Check every field, logging and returning the first violation.
    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() {
            bit_bail!("bit::FlyCameraConfig", "position must be finite, got {:?}", self.position);
        }
        if !self.direction.is_finite() || self.direction.length_squared() == 0.0 {
            bit_bail!("bit::FlyCameraConfig",
                "direction must be finite and non-zero, got {:?}", self.direction);
        }
        validate_speed("movement_speed", self.movement_speed)?;
        validate_speed("rotation_speed", self.rotation_speed)?;
        validate_speed("look_sensitivity", self.look_sensitivity)?;
        if !(self.max_delta_time.is_finite() && self.max_delta_time > 0.0) {
            bit_bail!("bit::FlyCameraConfig",
                "max_delta_time must be > 0, got {}", self.max_delta_time);
        }
        Ok(())
    }
}

/// Speeds must be finite and strictly positive.
pub(crate) fn validate_speed(name: &str, value: f32) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        bit_bail!("bit::FlyCameraConfig", "{} must be > 0, got {}", name, value);
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
