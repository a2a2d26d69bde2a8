use glam::Vec3;
use crate::error::Error;
use super::*;

#[test]
fn test_default_config_is_valid() {
    let config = FlyCameraConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.position, Vec3::ZERO);
    assert_eq!(config.direction, Vec3::NEG_Z);
    assert_eq!(config.movement_speed, 1.0);
    assert_eq!(config.rotation_speed, 1.0);
    assert!(!config.normalize_diagonal);
}

#[test]
fn test_builder_methods() {
    let config = FlyCameraConfig::default()
        .with_position(Vec3::new(-900.0, 600.0, -200.0))
        .with_direction(Vec3::new(1.0, -0.5, 0.4))
        .with_movement_speed(1000.0)
        .with_rotation_speed(4.0)
        .with_max_delta_time(0.5)
        .with_normalize_diagonal(true);

    assert_eq!(config.position, Vec3::new(-900.0, 600.0, -200.0));
    assert_eq!(config.movement_speed, 1000.0);
    assert_eq!(config.rotation_speed, 4.0);
    assert_eq!(config.max_delta_time, 0.5);
    assert!(config.normalize_diagonal);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_direction_rejected() {
    let config = FlyCameraConfig::default().with_direction(Vec3::ZERO);
    assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
}

#[test]
fn test_nan_position_rejected() {
    let config = FlyCameraConfig::default().with_position(Vec3::new(f32::NAN, 0.0, 0.0));
    assert!(config.validate().is_err());
}

#[test]
fn test_non_positive_speeds_rejected() {
    assert!(FlyCameraConfig::default().with_movement_speed(0.0).validate().is_err());
    assert!(FlyCameraConfig::default().with_movement_speed(-1.0).validate().is_err());
    assert!(FlyCameraConfig::default().with_rotation_speed(f32::NAN).validate().is_err());
}

#[test]
fn test_invalid_max_delta_time_rejected() {
    assert!(FlyCameraConfig::default().with_max_delta_time(0.0).validate().is_err());
    assert!(FlyCameraConfig::default().with_max_delta_time(f32::INFINITY).validate().is_err());
}

#[test]
fn test_error_message_names_the_field() {
    match FlyCameraConfig::default().with_rotation_speed(-2.0).validate() {
        Err(Error::InvalidParameter(msg)) => assert!(msg.contains("rotation_speed")),
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

#[test]
fn test_look_sensitivity() {
    let config = FlyCameraConfig::default();
    assert_eq!(config.look_sensitivity, 1.0);

    let config = config.with_look_sensitivity(0.2);
    assert_eq!(config.look_sensitivity, 0.2);
    assert!(config.validate().is_ok());

    assert!(FlyCameraConfig::default().with_look_sensitivity(0.0).validate().is_err());
    assert!(FlyCameraConfig::default().with_look_sensitivity(f32::INFINITY).validate().is_err());
}
