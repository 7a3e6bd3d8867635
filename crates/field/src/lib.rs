//! Signed distance field scene representation
//!
//! This crate defines the procedural scene as a signed distance field: a pure
//! function from a world-space point to the signed distance to the nearest
//! surface. The same field drives both rendering (mirrored in a fragment
//! shader by the external renderer) and player collision, so there is no
//! separate collision mesh.
//!
//! # SDF Convention
//!
//! The signed distance function follows standard convention:
//! - **Negative values**: Point is inside a solid
//! - **Zero**: Point is exactly on a surface
//! - **Positive values**: Point is outside (air/empty)
//!
//! Fields composed from the primitives and operators in this crate never
//! overestimate the true distance (Lipschitz bound of 1), which is the
//! property sphere tracing relies on to step safely.

use glam::Vec3;

pub mod ops;
pub mod primitives;
pub mod scene;

pub use scene::{HalfSpace, Terrain};

/// Step size for central-difference normal estimation
pub const NORMAL_EPS: f32 = 0.001;

/// Trait for types that can be evaluated as a signed distance field
///
/// Implementors provide distance-to-surface queries; normal estimation and
/// inside tests are derived from the distance function.
pub trait DistanceField {
    /// Compute signed distance from point to the nearest surface
    ///
    /// Negative inside a solid, positive outside. The magnitude is the
    /// distance to the nearest surface point and must never overestimate it.
    fn distance(&self, point: Vec3) -> f32;

    /// Compute the outward surface normal near a point
    ///
    /// Estimated as the normalized gradient of the field via central
    /// differences, six field evaluations per call. This is the most
    /// expensive query the crate offers; callers should issue at most one
    /// per collision event.
    ///
    /// Returns `Vec3::ZERO` when the gradient vanishes (e.g. at the exact
    /// center of a symmetric solid) rather than producing NaNs.
    fn normal(&self, point: Vec3) -> Vec3 {
        let gradient = Vec3::new(
            self.distance(point + Vec3::X * NORMAL_EPS)
                - self.distance(point - Vec3::X * NORMAL_EPS),
            self.distance(point + Vec3::Y * NORMAL_EPS)
                - self.distance(point - Vec3::Y * NORMAL_EPS),
            self.distance(point + Vec3::Z * NORMAL_EPS)
                - self.distance(point - Vec3::Z * NORMAL_EPS),
        );
        gradient.normalize_or_zero()
    }

    /// Check if a point is inside a solid (distance < 0)
    fn is_inside(&self, point: Vec3) -> bool {
        self.distance(point) < 0.0
    }
}
