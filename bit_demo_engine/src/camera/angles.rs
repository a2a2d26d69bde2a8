/// Yaw/pitch conventions shared by the fly camera.
///
/// Angles are in degrees. At yaw = pitch = 0 the camera looks down -Z.
/// Positive pitch looks up (rotation around the flank axis), positive yaw
/// turns left (counter-clockwise around world up seen from +Y).

use glam::{Quat, Vec2, Vec3};

/// Pitch never reaches ±90° so the flank vector stays defined.
pub const PITCH_LIMIT: f32 = 89.99;

/// World up used for the flank vector and the look-at construction.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Forward direction at yaw = pitch = 0.
pub const CANONICAL_FORWARD: Vec3 = Vec3::NEG_Z;

/// Horizontal lengths below this are treated as a vertical direction.
const VERTICAL_EPSILON: f32 = 1e-6;

/// Wrap a yaw angle into [0, 360).
pub fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = yaw.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        // + 0.0 turns -0.0 into 0.0
        wrapped + 0.0
    }
}

/// Clamp a pitch angle into [-PITCH_LIMIT, PITCH_LIMIT].
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Forward direction for the given angles.
///
/// Rotates `CANONICAL_FORWARD` by pitch around the local flank (X at
/// yaw 0), then by yaw around world up.
pub fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let rotation = Quat::from_rotation_y(yaw.to_radians()) * Quat::from_rotation_x(pitch.to_radians());
    (rotation * CANONICAL_FORWARD).normalize()
}

/// Right vector: normalize(direction × world up).
///
/// `None` when the direction is parallel to world up (or degenerate).
pub fn flank_from_direction(direction: Vec3) -> Option<Vec3> {
    direction.cross(WORLD_UP).try_normalize()
}

/// Recover (yaw, pitch) from a direction vector, inverse of `direction_from_angles`.
///
/// Returns `None` for zero-length or non-finite input. A vertical direction
/// has no defined yaw, so `fallback_yaw` is kept in that case.
pub fn angles_from_direction(direction: Vec3, fallback_yaw: f32) -> Option<(f32, f32)> {
    let d = direction.try_normalize()?;

    let pitch = clamp_pitch(d.y.clamp(-1.0, 1.0).asin().to_degrees());

    let horizontal = Vec2::new(d.x, d.z).length();
    let yaw = if horizontal < VERTICAL_EPSILON {
        wrap_yaw(fallback_yaw)
    } else {
        wrap_yaw((-d.x).atan2(-d.z).to_degrees())
    };

    Some((yaw, pitch))
}

#[cfg(test)]
#[path = "angles_tests.rs"]
mod tests;
