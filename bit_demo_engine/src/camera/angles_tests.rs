use glam::Vec3;
use super::*;

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-5,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ============================================================================
// wrap_yaw / clamp_pitch
// ============================================================================

#[test]
fn test_wrap_yaw_keeps_values_in_range() {
    assert_eq!(wrap_yaw(0.0), 0.0);
    assert_eq!(wrap_yaw(45.0), 45.0);
    assert!((wrap_yaw(370.0) - 10.0).abs() < 1e-4);
    assert!((wrap_yaw(-10.0) - 350.0).abs() < 1e-4);
    assert!((wrap_yaw(-725.0) - 355.0).abs() < 1e-3);
}

#[test]
fn test_wrap_yaw_exactly_360_becomes_zero() {
    assert_eq!(wrap_yaw(360.0), 0.0);
    assert_eq!(wrap_yaw(720.0), 0.0);
}

#[test]
fn test_wrap_yaw_tiny_negative_never_returns_360() {
    let wrapped = wrap_yaw(-1e-8);
    assert!(wrapped >= 0.0 && wrapped < 360.0);
}

#[test]
fn test_wrap_yaw_negative_zero() {
    let wrapped = wrap_yaw(-0.0);
    assert_eq!(wrapped, 0.0);
    assert!(wrapped.is_sign_positive());
}

#[test]
fn test_clamp_pitch() {
    assert_eq!(clamp_pitch(10.0), 10.0);
    assert_eq!(clamp_pitch(150.0), PITCH_LIMIT);
    assert_eq!(clamp_pitch(-90.0), -PITCH_LIMIT);
}

// ============================================================================
// direction_from_angles
// ============================================================================

#[test]
fn test_direction_at_zero_angles_is_canonical_forward() {
    assert_vec3_near(direction_from_angles(0.0, 0.0), Vec3::NEG_Z);
}

#[test]
fn test_positive_yaw_turns_left() {
    // 90° counter-clockwise from -Z (seen from +Y) is -X
    assert_vec3_near(direction_from_angles(90.0, 0.0), Vec3::NEG_X);
    assert_vec3_near(direction_from_angles(270.0, 0.0), Vec3::X);
}

#[test]
fn test_positive_pitch_looks_up() {
    let dir = direction_from_angles(0.0, 45.0);
    assert!(dir.y > 0.0);
    assert!(dir.z < 0.0);
    assert!((dir.length() - 1.0).abs() < 1e-6);
}

// ============================================================================
// flank_from_direction
// ============================================================================

#[test]
fn test_flank_of_canonical_forward_is_positive_x() {
    assert_vec3_near(flank_from_direction(Vec3::NEG_Z).unwrap(), Vec3::X);
}

#[test]
fn test_flank_of_vertical_direction_is_none() {
    assert!(flank_from_direction(Vec3::Y).is_none());
    assert!(flank_from_direction(Vec3::NEG_Y).is_none());
    assert!(flank_from_direction(Vec3::ZERO).is_none());
}

// ============================================================================
// angles_from_direction
// ============================================================================

#[test]
fn test_angles_from_direction_inverts_direction_from_angles() {
    for (yaw, pitch) in [(0.0, 0.0), (30.0, 10.0), (135.0, -45.0), (300.0, 80.0)] {
        let dir = direction_from_angles(yaw, pitch);
        let (y, p) = angles_from_direction(dir, 0.0).unwrap();
        assert!((y - yaw).abs() < 1e-3, "yaw {} -> {}", yaw, y);
        assert!((p - pitch).abs() < 1e-3, "pitch {} -> {}", pitch, p);
    }
}

#[test]
fn test_angles_from_unnormalized_direction() {
    let (yaw, pitch) = angles_from_direction(Vec3::new(0.0, 0.0, -5.0), 0.0).unwrap();
    assert!(yaw.abs() < 1e-4);
    assert!(pitch.abs() < 1e-4);
}

#[test]
fn test_angles_from_vertical_direction_keeps_fallback_yaw() {
    let (yaw, pitch) = angles_from_direction(Vec3::Y, 123.0).unwrap();
    assert_eq!(yaw, 123.0);
    assert_eq!(pitch, PITCH_LIMIT);

    let (yaw, pitch) = angles_from_direction(Vec3::NEG_Y, 10.0).unwrap();
    assert_eq!(yaw, 10.0);
    assert_eq!(pitch, -PITCH_LIMIT);
}

#[test]
fn test_angles_from_degenerate_direction_is_none() {
    assert!(angles_from_direction(Vec3::ZERO, 0.0).is_none());
    assert!(angles_from_direction(Vec3::new(f32::NAN, 0.0, 1.0), 0.0).is_none());
    assert!(angles_from_direction(Vec3::new(f32::INFINITY, 0.0, 0.0), 0.0).is_none());
}
