//! Application layer for the fieldwalk demo
//!
//! Ties the distance field and the sphere-traced physics to a first-person
//! camera: per tick, input becomes a proposed displacement, the integrator
//! clamps it against the field, and the camera frame is updated. The
//! windowed renderer, input devices, and frame timer are external
//! collaborators; this crate exposes exactly the state they exchange
//! ([`FrameState`], [`InputSnapshot`], [`FixedTick`]).

pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controller;
pub mod frame;
pub mod input;

pub use camera::Camera;
pub use clock::{FixedTick, SimClock, DEFAULT_TICK_INTERVAL};
pub use config::{ConfigError, SimConfig};
pub use controller::MotionController;
pub use frame::FrameState;
pub use input::InputSnapshot;

// Re-export for convenience
pub use field;
pub use fieldwalk_physics as physics;
