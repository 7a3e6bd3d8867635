//! Render-facing frame state
//!
//! The external renderer mirrors the distance field in its fragment shader
//! and only needs four uniforms from the simulation: the ray origin, the
//! projection basis, the global time, and the viewport resolution. This
//! snapshot is captured once per render frame and performs no mutation.

use glam::{Mat3, Vec2, Vec3};

use crate::camera::Camera;
use crate::clock::SimClock;

/// Uniform snapshot handed to the renderer once per frame
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Ray origin in world space (the camera origin)
    pub origin: Vec3,
    /// Orthonormal projection basis, columns {right, view-up, forward}
    pub basis: Mat3,
    /// Simulation time in seconds
    pub time: f32,
    /// Viewport size in pixels
    pub resolution: Vec2,
}

impl FrameState {
    pub fn capture(camera: &Camera, clock: &SimClock, resolution: Vec2) -> Self {
        Self {
            origin: camera.origin(),
            basis: camera.basis(),
            time: clock.elapsed(),
            resolution,
        }
    }
}
