//! Procedural scenes
//!
//! Scenes are compositions of primitives and operators, not stored geometry.
//! [`Terrain`] is the playable map; [`HalfSpace`] is the minimal field used
//! by tests and benchmarks.

use glam::Vec3;

use crate::ops::{op_repeat, op_union};
use crate::primitives::{sd_plane_y, sd_sphere};
use crate::DistanceField;

/// Lattice spacing of the repeated spheres in [`Terrain`]
pub const TERRAIN_CELL: f32 = 7.0;

/// Radius of the repeated spheres in [`Terrain`]
pub const TERRAIN_SPHERE_RADIUS: f32 = 1.0;

/// The playable map: a ground plane under an infinite sphere lattice
///
/// With animation enabled the vertical lattice spacing breathes with the
/// simulation clock; the default is a static scene and the clock value is
/// ignored.
#[derive(Debug, Clone)]
pub struct Terrain {
    animate: bool,
    time: f32,
}

impl Terrain {
    /// Create the static terrain
    pub fn new() -> Self {
        Self {
            animate: false,
            time: 0.0,
        }
    }

    /// Create a terrain whose lattice spacing varies with time
    pub fn with_animation() -> Self {
        Self {
            animate: true,
            time: 0.0,
        }
    }

    /// Advance the scene clock (read only by animated terrains)
    pub fn set_time(&mut self, elapsed: f32) {
        self.time = elapsed;
    }

    fn lattice_cell(&self) -> Vec3 {
        if self.animate {
            Vec3::new(TERRAIN_CELL, TERRAIN_CELL + self.time.sin(), TERRAIN_CELL)
        } else {
            Vec3::splat(TERRAIN_CELL)
        }
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceField for Terrain {
    fn distance(&self, point: Vec3) -> f32 {
        let d = sd_plane_y(point);
        op_union(
            d,
            sd_sphere(op_repeat(point, self.lattice_cell()), TERRAIN_SPHERE_RADIUS),
        )
    }
}

/// Ground plane at y = 0 with nothing else in the world
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSpace;

impl DistanceField for HalfSpace {
    fn distance(&self, point: Vec3) -> f32 {
        sd_plane_y(point)
    }
}
