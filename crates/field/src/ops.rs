//! Distance field combination operators
//!
//! Operators either combine two distances (union) or fold the query point
//! before a primitive is evaluated (domain repetition). Repetition costs no
//! memory: one primitive evaluation stands in for an infinite lattice.

use glam::Vec3;

/// Union of two fields: the nearest surface wins
///
/// Ties resolve to the first operand; with floats this is unobservable.
pub fn op_union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Tile space into cells of size `cell`, re-centering the query point
///
/// Maps `p` into a single cell spanning `[-cell/2, cell/2]` per axis, so a
/// primitive evaluated on the result repeats at every lattice point. A zero
/// or negative cell component leaves that axis untiled.
pub fn op_repeat(p: Vec3, cell: Vec3) -> Vec3 {
    let fold = |x: f32, c: f32| if c > 0.0 { (x % c).abs() - 0.5 * c } else { x };
    Vec3::new(fold(p.x, cell.x), fold(p.y, cell.y), fold(p.z, cell.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::sd_sphere;

    #[test]
    fn test_union_picks_nearest() {
        assert_eq!(op_union(1.0, 2.0), 1.0);
        assert_eq!(op_union(3.0, -0.5), -0.5);
    }

    #[test]
    fn test_repeat_is_periodic() {
        let cell = Vec3::splat(7.0);
        let a = sd_sphere(op_repeat(Vec3::new(1.0, 2.0, 3.0), cell), 1.0);
        let b = sd_sphere(op_repeat(Vec3::new(1.0 + 7.0, 2.0 - 14.0, 3.0 + 21.0), cell), 1.0);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn test_repeat_centers_cell() {
        // The cell center maps to the repeated-space origin.
        let folded = op_repeat(Vec3::splat(3.5), Vec3::splat(7.0));
        assert!(folded.length() < 1e-6);
    }

    #[test]
    fn test_repeat_zero_cell_leaves_axis() {
        let folded = op_repeat(Vec3::new(1.0, 5.0, -2.0), Vec3::new(7.0, 0.0, 7.0));
        assert_eq!(folded.y, 5.0);
    }
}
