use nalgebra::{Point3, Translation3, UnitQuaternion, Vector3};

use super::sampling::sample_full_turn;

/// Position on a circular orbit of radius `distance`, `angle` degrees around
/// from the x-axis, in the horizontal (xz) plane.
pub fn orbit_position(distance: f32, angle: f64) -> Point3<f32> {
    let (sin, cos) = angle.to_radians().sin_cos();
    let distance = f64::from(distance);
    Point3::new((distance * cos) as f32, 0.0, (distance * sin) as f32)
}

/// Points along a closed circular orbit, sampled every `step_degrees`. The
/// first and last points coincide.
pub fn orbit_path(distance: f32, step_degrees: u32) -> Vec<Point3<f32>> {
    sample_full_turn(|angle| orbit_position(distance, angle), step_degrees).collect()
}

/// Translation to a point on an orbit.
pub fn orbit_translation(distance: f32, angle: f64) -> Translation3<f32> {
    Translation3::from(orbit_position(distance, angle).coords)
}

/// Rotation about `axis` by `angle` degrees.
pub fn rotation_degrees(axis: &nalgebra::Unit<Vector3<f32>>, angle: f64) -> UnitQuaternion<f32> {
    UnitQuaternion::from_axis_angle(axis, angle.to_radians() as f32)
}

/// Turn about the vertical axis by `angle` degrees, in the same sense as
/// `orbit_position`: a positive angle carries +x toward +z.
pub fn spin_rotation(angle: f64) -> UnitQuaternion<f32> {
    rotation_degrees(&Vector3::y_axis(), -angle)
}

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_orbit_position() {
        assert_abs_diff_eq!(orbit_position(3.0, 0.0), Point3::new(3.0, 0.0, 0.0));
        assert_abs_diff_eq!(
            orbit_position(3.0, 90.0),
            Point3::new(0.0, 0.0, 3.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            orbit_position(2.0, 180.0),
            Point3::new(-2.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            orbit_position(2.0, -90.0),
            Point3::new(0.0, 0.0, -2.0),
            epsilon = 1e-6
        );

        // Zero distance stays at the parent's origin regardless of angle
        assert_abs_diff_eq!(orbit_position(0.0, 123.0), Point3::origin());
    }

    #[test]
    fn test_orbit_path_closed() {
        for &d in [1.0, 6.0, 13.0].iter() {
            let path = orbit_path(d, 5);
            assert_eq!(path.len(), 73);
            assert_abs_diff_eq!(path[0], path[72], epsilon = 1e-5);

            // Everything is on the circle, in the plane
            for pt in path.iter() {
                assert_relative_eq!(pt.coords.norm(), d, epsilon = 1e-5);
                assert_eq!(pt.y, 0.0);
            }
        }
    }

    #[test]
    fn test_rotation_degrees() {
        let rot = rotation_degrees(&Vector3::x_axis(), 90.0);
        assert_abs_diff_eq!(rot * Vector3::y(), Vector3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_spin_matches_orbit_sense() {
        for &angle in [30.0, 90.0, 200.0].iter() {
            let spun = spin_rotation(angle) * Vector3::x();
            let orbited = orbit_position(1.0, angle).coords;
            assert_abs_diff_eq!(spun, orbited, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_wrap_degrees() {
        assert_relative_eq!(wrap_degrees(370.0), 10.0);
        assert_relative_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert!(wrap_degrees(-1e-20) < 360.0);
    }
}
