//! Motion controller
//!
//! Translates one tick of input into a proposed displacement and a look
//! update, lets the integrator clamp the displacement against the field,
//! and applies the results to the camera. Owns the yaw/pitch accumulators
//! so look angles persist between ticks.

use field::DistanceField;
use fieldwalk_physics::Integrator;

use crate::camera::{Camera, MAX_PITCH};
use crate::input::InputSnapshot;

/// Default walking speed, units per second
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

/// Default look sensitivity, radians per device unit per second
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.15;

/// Per-tick movement and look glue between input, physics, and camera
#[derive(Debug, Clone)]
pub struct MotionController {
    yaw: f32,
    pitch: f32,
    move_speed: f32,
    mouse_sensitivity: f32,
}

impl MotionController {
    /// Create a controller seeded from the camera's current facing
    pub fn new(camera: &Camera, move_speed: f32, mouse_sensitivity: f32) -> Self {
        let (yaw, pitch) = camera.look_angles();
        Self {
            yaw,
            pitch,
            move_speed,
            mouse_sensitivity,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Run one fixed physics tick
    ///
    /// Movement intent is a linear combination of the camera's front, right
    /// (front x up), and up vectors scaled by speed and dt. Upward intent
    /// doubles as the fall-arrest signal. The look update is skipped
    /// entirely when the pointer did not move.
    pub fn tick(
        &mut self,
        field: &dyn DistanceField,
        camera: &mut Camera,
        integrator: &mut Integrator,
        input: &InputSnapshot,
        dt: f32,
    ) {
        let step = self.move_speed * dt;
        let front = camera.front();
        let up = camera.up();
        let right = front.cross(up).normalize_or_zero();

        let (ahead, side, rise) = input.move_axes();
        let intent = (front * ahead + right * side + up * rise) * step;

        let corrected = integrator.integrate(field, dt, camera.origin(), up, intent, input.ascend);
        camera.translate(corrected);

        if input.has_look() {
            self.yaw += input.look_delta.x * self.mouse_sensitivity * dt;
            self.pitch += input.look_delta.y * self.mouse_sensitivity * dt;
            self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
            camera.set_look_angles(self.yaw, self.pitch);
        }
    }
}
