//! End-to-end walkthrough of the simulation loop
//!
//! Drives the full stack (terrain field, integrator, controller, camera,
//! fixed tick) the way the windowed frontend would, and checks the renderer
//! contract holds throughout: finite state, orthonormal basis, player above
//! ground.

use field::{DistanceField, Terrain};
use fieldwalk_app::{
    Camera, FixedTick, FrameState, InputSnapshot, MotionController, SimClock, SimConfig,
};
use fieldwalk_physics::Integrator;
use glam::{Mat3, Vec2, Vec3};

fn assert_orthonormal(basis: Mat3) {
    let (cu, cv, cw) = (basis.x_axis, basis.y_axis, basis.z_axis);
    for axis in [cu, cv, cw] {
        assert!((axis.length() - 1.0).abs() < 1e-4, "non-unit column {axis}");
    }
    assert!(cu.dot(cv).abs() < 1e-4);
    assert!(cu.dot(cw).abs() < 1e-4);
    assert!(cv.dot(cw).abs() < 1e-4);
}

#[test]
fn test_initial_pose_and_translate_variant() {
    let config = SimConfig::default();
    let mut camera = Camera::new(config.origin_vec(), config.target_vec(), config.up_vec());

    // Stock pose looks down negative Z.
    assert!((camera.front() - Vec3::NEG_Z).length() < 1e-4);

    // Ray-front-preserving translate: origin and target move together.
    camera.translate(Vec3::new(0.0, 0.0, -1.0));
    assert!((camera.origin() - Vec3::new(0.0, 1.0, -1.0)).length() < 1e-5);
    assert!((camera.front() - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn test_walk_forward_over_terrain() {
    let config = SimConfig::default();
    let terrain = Terrain::new();
    let mut camera = Camera::new(config.origin_vec(), config.target_vec(), config.up_vec());
    let mut controller =
        MotionController::new(&camera, config.move_speed, config.mouse_sensitivity);
    let mut integrator = Integrator::new(config.gravity, config.hit_radius);
    let mut clock = SimClock::new();
    let dt = config.tick_interval;

    let input = InputSnapshot {
        forward: true,
        ..Default::default()
    };

    for _ in 0..500 {
        controller.tick(&terrain, &mut camera, &mut integrator, &input, dt);
        clock.tick(dt);

        let origin = camera.origin();
        assert!(origin.is_finite(), "state corrupted at {origin}");
        assert!(!terrain.is_inside(origin), "walked inside geometry at {origin}");
        assert!(origin.y > 0.0, "fell through the ground at {origin}");
        assert_orthonormal(camera.basis());
    }

    // Five seconds of walking at 5 u/s must cover real distance.
    assert!(camera.origin().z < -5.0);
}

#[test]
fn test_look_around_while_walking() {
    let config = SimConfig::default();
    let terrain = Terrain::new();
    let mut camera = Camera::new(config.origin_vec(), config.target_vec(), config.up_vec());
    let mut controller =
        MotionController::new(&camera, config.move_speed, config.mouse_sensitivity);
    let mut integrator = Integrator::new(config.gravity, config.hit_radius);

    let input = InputSnapshot {
        forward: true,
        look_delta: Vec2::new(20.0, 5.0),
        ..Default::default()
    };

    for _ in 0..300 {
        controller.tick(&terrain, &mut camera, &mut integrator, &input, config.tick_interval);
        assert!(camera.front().is_finite());
        assert_orthonormal(camera.basis());
    }

    // Constant yaw input must have turned the camera away from -Z.
    assert!((camera.front() - Vec3::NEG_Z).length() > 0.1);
}

#[test]
fn test_fixed_tick_drives_simulation_deterministically() {
    let config = SimConfig::default();
    let terrain = Terrain::new();
    let dt = config.tick_interval;

    // Path A: irregular frame times through the scheduler.
    let mut scheduler = FixedTick::new(dt);
    let mut camera_a = Camera::new(config.origin_vec(), config.target_vec(), config.up_vec());
    let mut controller_a =
        MotionController::new(&camera_a, config.move_speed, config.mouse_sensitivity);
    let mut integrator_a = Integrator::new(config.gravity, config.hit_radius);
    let input = InputSnapshot {
        forward: true,
        ..Default::default()
    };

    let mut ticks_a = 0;
    for frame_time in [0.016, 0.007, 0.033, 0.004, 0.040] {
        for _ in 0..scheduler.advance(frame_time) {
            controller_a.tick(&terrain, &mut camera_a, &mut integrator_a, &input, dt);
            ticks_a += 1;
        }
    }

    // Path B: the same number of ticks issued directly.
    let mut camera_b = Camera::new(config.origin_vec(), config.target_vec(), config.up_vec());
    let mut controller_b =
        MotionController::new(&camera_b, config.move_speed, config.mouse_sensitivity);
    let mut integrator_b = Integrator::new(config.gravity, config.hit_radius);
    for _ in 0..ticks_a {
        controller_b.tick(&terrain, &mut camera_b, &mut integrator_b, &input, dt);
    }

    // Fixed timestep means identical trajectories regardless of frame pacing.
    assert_eq!(camera_a.origin(), camera_b.origin());
    assert_eq!(integrator_a.fall_speed(), integrator_b.fall_speed());
}

#[test]
fn test_frame_state_contract() {
    let config = SimConfig::default();
    let camera = Camera::new(config.origin_vec(), config.target_vec(), config.up_vec());
    let clock = SimClock::new();

    let frame = FrameState::capture(&camera, &clock, Vec2::new(1920.0, 1080.0));
    assert_eq!(frame.origin, camera.origin());
    assert_orthonormal(frame.basis);
    assert_eq!(frame.resolution, Vec2::new(1920.0, 1080.0));
}
