//! Integration tests for the fly camera through the public API
//!
//! No GPU required: matrices are captured by a RecordingUniformSink.
//!
//! Run with: cargo test --test camera_integration_tests

use bit_demo_engine::bit::app::{AppContext, RecordingUniformSink, VIEW_MATRIX_UNIFORM};
use bit_demo_engine::bit::camera::{FlyCamera, FlyCameraConfig, Projection, PITCH_LIMIT};
use bit_demo_engine::glam::{Vec3, Vec4};
use bit_demo_engine::winit::event::MouseButton;
use bit_demo_engine::winit::keyboard::KeyCode;

// ============================================================================
// HELPERS
// ============================================================================

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-3,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn assert_frame_invariants(camera: &FlyCamera) {
    assert!((camera.direction().length() - 1.0).abs() < 1e-5);
    assert!(camera.direction().dot(camera.flank_direction()).abs() < 1e-5);
    assert!(camera.pitch() > -90.0 && camera.pitch() < 90.0);
    assert!(camera.yaw() >= 0.0 && camera.yaw() < 360.0);
    assert!(camera.matrix().is_finite());
}

/// Camera configured like the Sponza demo
fn sponza_config() -> FlyCameraConfig {
    FlyCameraConfig::default()
        .with_position(Vec3::new(-900.0, 600.0, -200.0))
        .with_direction(Vec3::new(1.0, -0.5, 0.4))
        .with_movement_speed(1000.0)
        .with_rotation_speed(4.0)
}

// ============================================================================
// CAMERA SCENARIOS
// ============================================================================

#[test]
fn test_integration_move_forward_one_second() {
    let mut camera = FlyCamera::with_config(
        FlyCameraConfig::default().with_movement_speed(10.0),
    )
    .unwrap();

    camera.move_forward();
    assert!(camera.update(1.0));

    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, -10.0));
    assert_frame_invariants(&camera);
}

#[test]
fn test_integration_pitch_clamps_at_limit() {
    let mut camera = FlyCamera::with_config(
        FlyCameraConfig::default().with_rotation_speed(15.0),
    )
    .unwrap();

    for _ in 0..10 {
        camera.rotate_up(1.0);
        camera.update(1.0);
        assert!(camera.pitch() <= PITCH_LIMIT);
        assert_frame_invariants(&camera);
    }
    assert!((camera.pitch() - PITCH_LIMIT).abs() < 1e-4);
}

#[test]
fn test_integration_straight_up_direction_keeps_yaw() {
    let mut camera = FlyCamera::new();
    camera.rotate_left(30.0);
    camera.update(1.0);
    let yaw = camera.yaw();

    camera.set_direction(Vec3::new(0.0, 1.0, 0.0));
    camera.update(0.0);

    assert!(camera.yaw().is_finite());
    assert!(camera.pitch().is_finite());
    assert!((camera.yaw() - yaw).abs() < 1e-4);
    assert!((camera.pitch() - PITCH_LIMIT).abs() < 1e-4);
    assert_frame_invariants(&camera);
}

#[test]
fn test_integration_frame_rate_independence() {
    let config = sponza_config();
    let mut coarse = FlyCamera::with_config(config).unwrap();
    let mut fine = FlyCamera::with_config(config).unwrap();

    coarse.move_forward();
    coarse.move_right();
    coarse.update(1.0);

    for _ in 0..10 {
        fine.move_forward();
        fine.move_right();
        fine.update(0.1);
    }

    assert!((coarse.position() - fine.position()).length() < 1e-2);
}

#[test]
fn test_integration_random_walk_keeps_invariants() {
    let mut camera = FlyCamera::with_config(sponza_config()).unwrap();

    // Deterministic pseudo-random input sequence
    let mut seed: u32 = 12345;
    let mut next = || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((seed >> 16) & 0x7fff) as f32 / 32767.0 * 2.0 - 1.0
    };

    for _ in 0..500 {
        let (dx, dy) = (next() * 200.0, next() * 200.0);
        camera.rotate(dx, dy);
        if next() > 0.0 {
            camera.move_forward();
        }
        if next() > 0.5 {
            camera.move_left();
        }
        camera.update((next() + 1.0) * 0.05);
        assert_frame_invariants(&camera);
    }
}

// ============================================================================
// FRAME LOOP
// ============================================================================

#[test]
fn test_integration_sponza_frame_loop() {
    let projection = Projection::for_viewport(45.0, 800, 600, 2.0, 4000.0).unwrap();
    let mut ctx = AppContext::new(sponza_config(), projection, RecordingUniformSink::new()).unwrap();
    let start = ctx.camera().position();

    // Idle frames do not upload
    for _ in 0..5 {
        assert!(!ctx.frame_with_delta(1.0 / 60.0));
    }
    assert_eq!(ctx.sink().upload_count(VIEW_MATRIX_UNIFORM), 1);

    // Hold W for 30 frames
    ctx.input_mut().on_key(KeyCode::KeyW, true);
    for _ in 0..30 {
        assert!(ctx.frame_with_delta(1.0 / 60.0));
    }
    ctx.input_mut().on_key(KeyCode::KeyW, false);

    let travelled = (ctx.camera().position() - start).length();
    assert!((travelled - 500.0).abs() < 0.5);
    assert_eq!(ctx.sink().upload_count(VIEW_MATRIX_UNIFORM), 31);

    // Drag the mouse 20 px to the right: one degree per pixel
    ctx.input_mut().on_cursor_moved(400.0, 300.0);
    ctx.input_mut().on_mouse_button(MouseButton::Left, true);
    ctx.input_mut().on_cursor_moved(420.0, 300.0);
    let yaw = ctx.camera().yaw();
    assert!(ctx.frame_with_delta(0.5));
    let turned = (yaw - ctx.camera().yaw()).rem_euclid(360.0);
    assert!((turned - 20.0).abs() < 1e-2);

    // The uploaded matrix maps the eye to the origin
    let view = *ctx.sink().last(VIEW_MATRIX_UNIFORM).unwrap();
    let eye = view * ctx.camera().position().extend(1.0);
    assert!((eye - Vec4::new(0.0, 0.0, 0.0, 1.0)).length() < 1e-2);

    assert_frame_invariants(ctx.camera());
    assert_eq!(ctx.frame_count(), 36);
}

#[test]
fn test_integration_focus_loss_stops_motion() {
    let mut ctx = AppContext::new(sponza_config(), Projection::default(), RecordingUniformSink::new()).unwrap();

    ctx.input_mut().on_key(KeyCode::KeyS, true);
    assert!(ctx.frame_with_delta(0.016));

    ctx.input_mut().on_focus_lost();
    let position = ctx.camera().position();
    assert!(!ctx.frame_with_delta(0.016));
    assert_eq!(ctx.camera().position(), position);
}
