//! Signed distance primitives
//!
//! Each function returns the exact signed distance from `p` to the primitive
//! surface, negative inside. All primitives are centered at the origin;
//! translate the query point to place them elsewhere.

use glam::Vec3;

/// Horizontal ground plane at y = 0, solid below
pub fn sd_plane_y(p: Vec3) -> f32 {
    p.y
}

/// Sphere of radius `r`
pub fn sd_sphere(p: Vec3, r: f32) -> f32 {
    p.length() - r
}

/// Axis-aligned box with the given half-extents
pub fn sd_box(p: Vec3, half_extents: Vec3) -> f32 {
    let d = p.abs() - half_extents;
    d.x.max(d.y.max(d.z)).min(0.0) + d.max(Vec3::ZERO).length()
}

/// Infinite vertical cylinder of radius `r`
pub fn sd_cylinder_inf(p: Vec3, r: f32) -> f32 {
    Vec3::new(p.x, 0.0, p.z).length() - r
}

/// Vertical cylinder of radius `r` and half-height `h`
pub fn sd_cylinder(p: Vec3, r: f32, h: f32) -> f32 {
    let radial = Vec3::new(p.x, 0.0, p.z).length() - r;
    radial.max(p.y.abs() - h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_distance_is_height() {
        assert_eq!(sd_plane_y(Vec3::new(3.0, 2.5, -7.0)), 2.5);
        assert!(sd_plane_y(Vec3::new(0.0, -1.0, 0.0)) < 0.0);
    }

    #[test]
    fn test_sphere_distance() {
        assert!((sd_sphere(Vec3::new(2.0, 0.0, 0.0), 1.0) - 1.0).abs() < 1e-6);
        assert!((sd_sphere(Vec3::new(0.5, 0.0, 0.0), 1.0) - (-0.5)).abs() < 1e-6);
        assert!(sd_sphere(Vec3::new(1.0, 0.0, 0.0), 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_box_faces_and_corners() {
        let half = Vec3::ONE;

        // On a face
        assert!(sd_box(Vec3::new(1.0, 0.0, 0.0), half).abs() < 1e-6);
        // Outside along an axis
        assert!((sd_box(Vec3::new(2.0, 0.0, 0.0), half) - 1.0).abs() < 1e-6);
        // Inside: distance to nearest face
        assert!((sd_box(Vec3::ZERO, half) - (-1.0)).abs() < 1e-6);
        // Outside at a corner: Euclidean distance to the corner
        let expected = Vec3::ONE.length();
        assert!((sd_box(Vec3::splat(2.0), half) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_infinite_cylinder_ignores_height() {
        let d1 = sd_cylinder_inf(Vec3::new(2.0, 0.0, 0.0), 1.0);
        let d2 = sd_cylinder_inf(Vec3::new(2.0, 500.0, 0.0), 1.0);
        assert!((d1 - d2).abs() < 1e-6);
        assert!((d1 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_finite_cylinder_caps() {
        // Beyond the cap, directly above the axis
        let d = sd_cylinder(Vec3::new(0.0, 3.0, 0.0), 1.0, 2.0);
        assert!((d - 1.0).abs() < 1e-6);
        // Inside
        assert!(sd_cylinder(Vec3::new(0.5, 0.0, 0.0), 1.0, 2.0) < 0.0);
        // Radially outside
        let d = sd_cylinder(Vec3::new(3.0, 0.0, 0.0), 1.0, 2.0);
        assert!((d - 2.0).abs() < 1e-6);
    }
}
