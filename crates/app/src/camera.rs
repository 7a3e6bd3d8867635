//! First-person camera frame
//!
//! One concrete type holds the origin/target/up triple together with the two
//! values derived from it: the unit front vector and the orthonormal
//! projection basis the renderer consumes. Every mutator recomputes both, so
//! the basis can never be read stale.
//!
//! # Coordinate System
//!
//! OpenGL convention: +X right, +Y up, -Z forward (into the screen).

use glam::{Mat3, Vec3};

/// Pitch is kept strictly inside ±90° so the front vector never parallels
/// the up vector, which would degenerate the basis cross products.
pub(crate) const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Camera frame: origin, look target, up hint, and the derived basis
///
/// `translate` moves origin and target together, preserving the front
/// direction (the ray-front-preserving variant; the alternative of pinning
/// the target in world space is intentionally not offered).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    target: Vec3,
    up: Vec3,
    front: Vec3,
    basis: Mat3,
}

impl Camera {
    /// Create a camera at `origin` looking toward `target`
    ///
    /// `up` must not be parallel to the view direction.
    pub fn new(origin: Vec3, target: Vec3, up: Vec3) -> Self {
        let mut camera = Self {
            origin,
            target,
            up,
            front: Vec3::ZERO,
            basis: Mat3::IDENTITY,
        };
        camera.refresh();
        camera
    }

    fn refresh(&mut self) {
        self.front = (self.target - self.origin).normalize_or_zero();
        self.basis = Self::projection_basis(self.origin, self.target, self.up);
    }

    /// Build the orthonormal projection basis {right, view-up, forward}
    ///
    /// `cw` looks from origin to target, `cu` is the right vector, `cv`
    /// re-derives a view-up perpendicular to both. Degenerate inputs produce
    /// zero columns instead of NaNs.
    pub fn projection_basis(origin: Vec3, target: Vec3, up: Vec3) -> Mat3 {
        let cw = (target - origin).normalize_or_zero();
        let cu = cw.cross(up).normalize_or_zero();
        let cv = cu.cross(cw).normalize_or_zero();
        Mat3::from_cols(cu, cv, cw)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit vector from origin toward target
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Projection basis, columns {right, view-up, forward}
    ///
    /// Orthonormal and right-handed whenever up is not parallel to front,
    /// which the pitch clamp guarantees for angle-driven cameras.
    pub fn basis(&self) -> Mat3 {
        self.basis
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
        self.refresh();
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.refresh();
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
        self.refresh();
    }

    /// Point the camera along `front`, placing the target one unit ahead
    pub fn set_front(&mut self, front: Vec3) {
        self.target = self.origin + front.normalize_or_zero();
        self.refresh();
    }

    /// Move origin and target together; front is unchanged
    pub fn translate(&mut self, displacement: Vec3) {
        self.origin += displacement;
        self.target += displacement;
        self.refresh();
    }

    /// Point the camera from yaw/pitch angles in radians
    ///
    /// Pitch is clamped inside ±90° before the front vector is derived.
    /// Calling twice with the same angles yields the same front and target.
    pub fn set_look_angles(&mut self, yaw: f32, pitch: f32) {
        let pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.set_front(front);
    }

    /// Yaw and pitch angles matching the current front vector
    pub fn look_angles(&self) -> (f32, f32) {
        let yaw = self.front.z.atan2(self.front.x);
        let pitch = self.front.y.clamp(-1.0, 1.0).asin();
        (yaw, pitch)
    }
}
