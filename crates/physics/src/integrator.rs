//! Gravity and collision response
//!
//! The integrator owns the player's vertical fall speed and nothing else;
//! position lives in the camera and is only read here. Each tick it builds a
//! fall vector, folds it into the proposed displacement, and clamps the
//! result against the field: accepted as-is when the path is clear, slid
//! along the wall tangent on contact.

use field::DistanceField;
use glam::Vec3;
use tracing::{debug, trace};

use crate::march::{march, MarchConfig};

/// Free-fall acceleration, m/s^2
pub const DEFAULT_GRAVITY: f32 = 9.8;

/// Default radius of the player's collision sphere
pub const DEFAULT_HIT_RADIUS: f32 = 1.0;

/// Per-player kinematic integrator
///
/// Holds the accumulated fall speed explicitly so independent simulations
/// (and tests) never share state.
#[derive(Debug, Clone)]
pub struct Integrator {
    gravity: f32,
    hit_radius: f32,
    fall_speed: f32,
}

impl Integrator {
    pub fn new(gravity: f32, hit_radius: f32) -> Self {
        Self {
            gravity,
            hit_radius,
            fall_speed: 0.0,
        }
    }

    /// Current accumulated fall speed, m/s
    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// Player collision radius
    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    /// Accumulate free fall and produce this tick's fall displacement
    ///
    /// `arrest_fall` signals upward intent (climbing/flying), which cancels
    /// the fall instead of accelerating it. The candidate fall vector is
    /// cast against the field; landing within the hit radius zeroes both the
    /// vector and the accumulated speed.
    pub fn fall_vector(
        &mut self,
        field: &dyn DistanceField,
        dt: f32,
        origin: Vec3,
        up: Vec3,
        arrest_fall: bool,
    ) -> Vec3 {
        if arrest_fall {
            self.fall_speed = 0.0;
        } else {
            self.fall_speed += self.gravity * dt;
        }

        let mut fall = -up * self.fall_speed * dt;
        if fall.length_squared() > 0.0 {
            let result = march(field, origin, fall.normalize_or_zero(), &MarchConfig::movement());
            if result.blocked_within(self.hit_radius) {
                debug!(distance = result.distance, "landed, arresting fall");
                self.fall_speed = 0.0;
                fall = Vec3::ZERO;
            }
        }

        fall
    }

    /// Clamp a proposed displacement against the field
    ///
    /// Returns the displacement the caller should actually apply: the
    /// proposal plus fall when the path is clear, the tangential slide on
    /// wall contact, or zero when even the slide is blocked. The slide keeps
    /// the motion's tangential component and removes only the part driving
    /// into the surface.
    pub fn integrate(
        &mut self,
        field: &dyn DistanceField,
        dt: f32,
        origin: Vec3,
        up: Vec3,
        proposed: Vec3,
        arrest_fall: bool,
    ) -> Vec3 {
        let fall = self.fall_vector(field, dt, origin, up, arrest_fall);
        let motion = proposed + fall;

        if motion.length_squared() == 0.0 {
            return motion;
        }

        let dir = motion.normalize_or_zero();
        let result = march(field, origin, dir, &MarchConfig::movement());
        if !result.blocked_within(self.hit_radius) {
            return motion;
        }

        // Wall contact: estimate the surface normal where the collision
        // sphere meets the field and project the motion onto the tangent
        // plane. Subtracting the normal-aligned component is the physically
        // sound direction; re-test the slide so the correction itself never
        // introduces a new penetration.
        let contact = origin + dir * self.hit_radius;
        let normal = field.normal(contact);
        let slide = motion - normal * motion.dot(normal);
        trace!(?normal, ?slide, "wall contact, sliding");

        if slide.length_squared() > 0.0 {
            let check = march(field, origin, slide.normalize_or_zero(), &MarchConfig::movement());
            if !check.blocked_within(self.hit_radius) {
                return slide;
            }
        }

        Vec3::ZERO
    }
}
