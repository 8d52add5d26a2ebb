use std::f32::consts::{PI, TAU};

use nalgebra::{Point3, Vector3};

use super::orbit::orbit_position;
use super::sampling::sample_full_turn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

/// Triangle list for a sphere centered on the origin, with poles on the
/// y-axis. There are `slices` divisions around the pole axis and `stacks`
/// divisions from pole to pole, and each cell is split into two triangles.
pub fn sphere_triangles(radius: f32, slices: u32, stacks: u32) -> Vec<Vertex> {
    assert!(slices >= 3 && stacks >= 2, "Sphere too coarse: {}x{}", slices, stacks);

    let vertex = |slice: u32, stack: u32| {
        let theta = TAU * slice as f32 / slices as f32;
        let phi = PI * stack as f32 / stacks as f32;
        let normal = Vector3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
        Vertex {
            position: Point3::from(radius * normal),
            normal,
        }
    };

    let mut triangles = Vec::with_capacity((6 * slices * stacks) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = vertex(slice, stack);
            let b = vertex(slice, stack + 1);
            let c = vertex(slice + 1, stack + 1);
            let d = vertex(slice + 1, stack);
            triangles.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
    triangles
}

/// Triangle list for a flat annulus in the xz-plane. The rim is sampled every
/// `step_degrees` as a strip of quads, closing back on itself at 360.
pub fn ring_triangles(inner_radius: f32, outer_radius: f32, step_degrees: u32) -> Vec<Vertex> {
    let up = Vector3::y();
    let rim = |radius: f32| -> Vec<Vertex> {
        sample_full_turn(|angle| orbit_position(radius, angle), step_degrees)
            .map(|position| Vertex {
                position,
                normal: up,
            })
            .collect()
    };
    let inner = rim(inner_radius);
    let outer = rim(outer_radius);

    // Each consecutive pair of (inner, outer) samples makes one quad
    inner
        .windows(2)
        .zip(outer.windows(2))
        .flat_map(|(i, o)| [i[0], o[0], o[1], i[0], o[1], i[1]])
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_sphere_counts() {
        assert_eq!(sphere_triangles(1.0, 50, 50).len(), 6 * 50 * 50);
        assert_eq!(sphere_triangles(0.1, 30, 30).len(), 6 * 30 * 30);
    }

    #[test]
    fn test_sphere_surface() {
        let radius = 2.0;
        for v in sphere_triangles(radius, 12, 8) {
            assert_relative_eq!(v.position.coords.norm(), radius, epsilon = 1e-5);
            assert_relative_eq!(v.normal.norm(), 1.0, epsilon = 1e-5);
            // Normals point straight out
            assert_abs_diff_eq!(v.position.coords / radius, v.normal, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_poles() {
        let triangles = sphere_triangles(1.0, 8, 4);
        let top = triangles.iter().map(|v| v.position.y).fold(f32::MIN, f32::max);
        let bottom = triangles.iter().map(|v| v.position.y).fold(f32::MAX, f32::min);
        assert_relative_eq!(top, 1.0);
        assert_relative_eq!(bottom, -1.0);
    }

    #[test]
    fn test_ring() {
        let (inner, outer) = (1.5, 2.2);
        let triangles = ring_triangles(inner, outer, 10);
        // 37 samples make 36 quads
        assert_eq!(triangles.len(), 36 * 6);

        for v in triangles.iter() {
            assert_eq!(v.position.y, 0.0);
            assert_eq!(v.normal, Vector3::y());
            let r = v.position.coords.norm();
            assert!(
                (r - inner).abs() < 1e-5 || (r - outer).abs() < 1e-5,
                "vertex at radius {} is off the rims",
                r
            );
        }
    }
}
