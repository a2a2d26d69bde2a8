/// FlyCamera: free-look first-person camera controller.
///
/// Input handlers record intent (`move_*`, `rotate*`) during event polling.
/// Once per frame, `update(delta_time)` integrates that intent into
/// position and yaw/pitch, clears it, and recomputes the cached view matrix
/// only if something actually changed. The return value tells the render
/// loop whether the "ViewMatrix" uniform needs a re-upload.
///
/// Single-owner, single-threaded: the frame loop owns the camera and
/// serializes every call. There is no internal locking.

use glam::{Mat4, Vec2, Vec3};
use crate::error::Result;
use crate::{bit_debug, bit_trace, bit_warn};
use super::angles::{
    angles_from_direction, clamp_pitch, direction_from_angles, flank_from_direction, wrap_yaw,
    CANONICAL_FORWARD, WORLD_UP,
};
use super::config::{validate_speed, FlyCameraConfig};
use super::movement::MovementFlags;

/// Free-look camera with yaw/pitch orientation and frame-rate independent motion.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    direction: Vec3,
    flank_direction: Vec3,
    /// Degrees, [0, 360)
    yaw: f32,
    /// Degrees, [-PITCH_LIMIT, PITCH_LIMIT]
    pitch: f32,

    pending_movement: MovementFlags,
    /// x = yaw delta, y = pitch delta, in input units (scaled by speed and dt)
    pending_rotation: Vec2,
    /// Mouse-look delta, scaled by sensitivity only
    pending_look: Vec2,

    movement_speed: f32,
    rotation_speed: f32,
    look_sensitivity: f32,
    max_delta_time: f32,
    normalize_diagonal: bool,

    view_matrix: Mat4,
    /// Set by direct state overrides; consumed by the next update
    view_dirty: bool,
}

impl FlyCamera {
    /// Camera at the origin looking down -Z, speeds 1.0.
    pub fn new() -> Self {
        Self::from_valid_config(&FlyCameraConfig::default())
    }

    /// Create a camera from a config.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the config fails validation.
    pub fn with_config(config: FlyCameraConfig) -> Result<Self> {
        config.validate()?;
        let camera = Self::from_valid_config(&config);
        bit_debug!("bit::FlyCamera",
            "Created at {:?} (yaw {:.2}°, pitch {:.2}°)", camera.position, camera.yaw, camera.pitch);
        Ok(camera)
    }

    fn from_valid_config(config: &FlyCameraConfig) -> Self {
        let (yaw, pitch) = angles_from_direction(config.direction, 0.0).unwrap_or((0.0, 0.0));
        let mut camera = Self {
            position: config.position,
            direction: CANONICAL_FORWARD,
            flank_direction: Vec3::X,
            yaw,
            pitch,
            pending_movement: MovementFlags::empty(),
            pending_rotation: Vec2::ZERO,
            pending_look: Vec2::ZERO,
            movement_speed: config.movement_speed,
            rotation_speed: config.rotation_speed,
            look_sensitivity: config.look_sensitivity,
            max_delta_time: config.max_delta_time,
            normalize_diagonal: config.normalize_diagonal,
            view_matrix: Mat4::IDENTITY,
            view_dirty: false,
        };
        camera.apply_angles();
        camera.update_matrix();
        camera
    }

    // ===== MOVEMENT INTENT =====

    pub fn move_forward(&mut self) {
        self.pending_movement.insert(MovementFlags::FORWARD);
    }

    pub fn move_backward(&mut self) {
        self.pending_movement.insert(MovementFlags::BACKWARD);
    }

    pub fn move_left(&mut self) {
        self.pending_movement.insert(MovementFlags::LEFT);
    }

    pub fn move_right(&mut self) {
        self.pending_movement.insert(MovementFlags::RIGHT);
    }

    // ===== ROTATION INTENT =====

    /// Record a relative mouse delta in screen space.
    ///
    /// +dx (cursor right) turns right, +dy (cursor down) looks down.
    /// Deltas accumulate until the next `update()`, where each unit turns
    /// the camera by `look_sensitivity` degrees. Frame time is not applied:
    /// the delta already measures how far the cursor moved.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let delta = Vec2::new(-dx, -dy);
        if !accumulate(&mut self.pending_look, delta) {
            bit_warn!("bit::FlyCamera", "Ignoring non-finite mouse-look input {:?}", delta);
        }
    }

    pub fn rotate_up(&mut self, amount: f32) {
        self.add_rotation(Vec2::new(0.0, amount));
    }

    pub fn rotate_down(&mut self, amount: f32) {
        self.add_rotation(Vec2::new(0.0, -amount));
    }

    pub fn rotate_left(&mut self, amount: f32) {
        self.add_rotation(Vec2::new(amount, 0.0));
    }

    pub fn rotate_right(&mut self, amount: f32) {
        self.add_rotation(Vec2::new(-amount, 0.0));
    }

    fn add_rotation(&mut self, delta: Vec2) {
        if !accumulate(&mut self.pending_rotation, delta) {
            bit_warn!("bit::FlyCamera", "Ignoring non-finite rotation input {:?}", delta);
        }
    }

    /// Whether any movement or rotation intent is waiting for `update()`.
    pub fn has_pending_input(&self) -> bool {
        !self.pending_movement.is_empty()
            || self.pending_rotation != Vec2::ZERO
            || self.pending_look != Vec2::ZERO
    }

    // ===== FRAME UPDATE =====

    /// Integrate pending intent over `delta_time` seconds.
    ///
    /// Returns `true` if the view matrix was recomputed during this call.
    /// All pending intent is cleared whether or not it moved the camera.
    pub fn update(&mut self, delta_time: f32) -> bool {
        let dt = self.sanitize_delta_time(delta_time);
        let mut changed = std::mem::take(&mut self.view_dirty);

        // Linear integration along the current forward/flank axes
        let (forward, right) = self.pending_movement.resolve_conflicts().axes();
        let mut step = self.direction * forward + self.flank_direction * right;
        if self.normalize_diagonal {
            step = step.normalize_or_zero();
        }
        let delta = step * (self.movement_speed * dt);
        if delta != Vec3::ZERO && (self.position + delta).is_finite() {
            self.position += delta;
            changed = true;
        }

        // Angular integration
        let rotation = self.pending_rotation * (self.rotation_speed * dt)
            + self.pending_look * self.look_sensitivity;
        if rotation != Vec2::ZERO && self.apply_rotation(rotation) {
            changed = true;
        }

        self.pending_movement = MovementFlags::empty();
        self.pending_rotation = Vec2::ZERO;
        self.pending_look = Vec2::ZERO;

        if changed {
            self.update_matrix();
            bit_trace!("bit::FlyCamera", "Moved to {:?} (yaw {:.2}°, pitch {:.2}°, dt {:.4}s)",
                self.position, self.yaw, self.pitch, dt);
        }
        changed
    }

    /// Add a (yaw, pitch) offset in degrees. Returns `true` if either angle changed.
    ///
    /// A rotation that overflows to a non-finite angle is dropped whole.
    fn apply_rotation(&mut self, rotation: Vec2) -> bool {
        let yaw = wrap_yaw(self.yaw + rotation.x);
        let pitch = clamp_pitch(self.pitch + rotation.y);
        if !(rotation.is_finite() && yaw.is_finite() && pitch.is_finite()) {
            bit_warn!("bit::FlyCamera", "Dropping non-finite rotation {:?}", rotation);
            return false;
        }
        if yaw == self.yaw && pitch == self.pitch {
            return false;
        }
        self.yaw = yaw;
        self.pitch = pitch;
        self.apply_angles();
        true
    }

    fn sanitize_delta_time(&self, delta_time: f32) -> f32 {
        if !delta_time.is_finite() || delta_time < 0.0 {
            bit_debug!("bit::FlyCamera", "Treating invalid delta time {} as 0", delta_time);
            0.0
        } else if delta_time > self.max_delta_time {
            bit_debug!("bit::FlyCamera",
                "Clamping delta time {:.3}s to {:.3}s", delta_time, self.max_delta_time);
            self.max_delta_time
        } else {
            delta_time
        }
    }

    /// Recompute direction and flank from the current yaw/pitch.
    fn apply_angles(&mut self) {
        self.direction = direction_from_angles(self.yaw, self.pitch);
        // Pitch is clamped short of vertical, so the flank always exists
        if let Some(flank) = flank_from_direction(self.direction) {
            self.flank_direction = flank;
        }
    }

    /// Rebuild the cached view matrix from position and direction now.
    ///
    /// Equivalent to look-at(position, position + direction, world up).
    /// Clears any pending override, so the next `update()` only reports
    /// changes made after this call.
    pub fn update_matrix(&mut self) {
        let matrix = Mat4::look_to_rh(self.position, self.direction, WORLD_UP);
        if matrix.is_finite() {
            self.view_matrix = matrix;
        } else {
            bit_warn!("bit::FlyCamera", "Discarding non-finite view matrix at {:?}", self.position);
        }
        self.view_dirty = false;
    }

    // ===== SETTERS =====

    /// Teleport the camera. Non-finite positions are ignored.
    pub fn set_position(&mut self, position: Vec3) {
        if !position.is_finite() {
            bit_warn!("bit::FlyCamera", "Ignoring non-finite position {:?}", position);
            return;
        }
        self.position = position;
        self.view_dirty = true;
    }

    /// Point the camera along `direction` (any non-zero length).
    ///
    /// Yaw and pitch are recovered from the vector so later relative
    /// rotation continues from it. A vertical direction keeps the previous
    /// yaw and is clamped to the pitch limit. Zero-length or non-finite
    /// vectors are ignored and leave the camera unchanged.
    pub fn set_direction(&mut self, direction: Vec3) {
        match angles_from_direction(direction, self.yaw) {
            Some((yaw, pitch)) => {
                self.yaw = yaw;
                self.pitch = pitch;
                self.apply_angles();
                self.view_dirty = true;
            }
            None => {
                bit_warn!("bit::FlyCamera", "Ignoring degenerate direction {:?}", direction);
            }
        }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `speed` is not finite and > 0.
    pub fn set_movement_speed(&mut self, speed: f32) -> Result<()> {
        validate_speed("movement_speed", speed)?;
        self.movement_speed = speed;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `speed` is not finite and > 0.
    pub fn set_rotation_speed(&mut self, speed: f32) -> Result<()> {
        validate_speed("rotation_speed", speed)?;
        self.rotation_speed = speed;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `sensitivity` is not finite and > 0.
    pub fn set_look_sensitivity(&mut self, sensitivity: f32) -> Result<()> {
        validate_speed("look_sensitivity", sensitivity)?;
        self.look_sensitivity = sensitivity;
        Ok(())
    }

    // ===== GETTERS =====

    /// Cached view matrix (world space to camera space).
    pub fn matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit forward vector.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit right vector, `normalize(direction × world up)`.
    pub fn flank_direction(&self) -> Vec3 {
        self.flank_direction
    }

    /// Local up vector, orthogonal to both direction and flank.
    pub fn up_direction(&self) -> Vec3 {
        self.flank_direction.cross(self.direction).normalize_or_zero()
    }

    /// Yaw in degrees, [0, 360).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, clamped to ±PITCH_LIMIT.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Degrees per unit of `rotate()` delta.
    pub fn look_sensitivity(&self) -> f32 {
        self.look_sensitivity
    }

    pub fn max_delta_time(&self) -> f32 {
        self.max_delta_time
    }
}

/// Add `delta` to `pending` unless either the delta or the sum is non-finite.
fn accumulate(pending: &mut Vec2, delta: Vec2) -> bool {
    let sum = *pending + delta;
    if !(delta.is_finite() && sum.is_finite()) {
        return false;
    }
    *pending = sum;
    true
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "fly_camera_tests.rs"]
mod tests;
