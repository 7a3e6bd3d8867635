//! Sphere-traced physics for distance field scenes
//!
//! This crate turns the distance field into a collision oracle. The
//! [`march`](march::march) sphere tracer answers "how far can a ray travel
//! before hitting the scene", and the [`Integrator`] uses those answers for
//! gravity, landing, and wall-sliding collision response. There is no
//! collision mesh and no rigid-body solver; every query goes through the
//! same field the renderer shades.

mod integrator;
pub mod march;

pub use integrator::{Integrator, DEFAULT_GRAVITY, DEFAULT_HIT_RADIUS};
pub use march::{march, march_overstep, MarchConfig, MarchOutcome, MarchResult};

// Re-export for convenience
pub use field;
pub use glam;
