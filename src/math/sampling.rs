use nalgebra::Point3;

/// Evaluates `f` at `num_segments + 1` evenly spaced parameters between
/// `t_start` and `t_end`, both ends included.
pub fn sample_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    assert!(
        num_segments >= 1,
        "Need at least one segment to sample, got {}",
        num_segments
    );
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| t_start + (t_end - t_start) * convert(i) / convert(num_segments))
        .map(f)
}

/// Samples `f` over a full turn every `step_degrees`, closing the loop at 360.
pub fn sample_full_turn<F>(f: F, step_degrees: u32) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(f64) -> Point3<f32>,
{
    assert!(
        step_degrees > 0 && 360 % step_degrees == 0,
        "Step must evenly divide a full turn, got {}",
        step_degrees
    );
    sample_parametric(f, 0.0, 360.0, (360 / step_degrees) as usize)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_parametric_endpoints() {
        let points: Vec<_> =
            sample_parametric(|t: f32| Point3::new(t, 2.0 * t, 0.0), 1.0, 3.0, 4).collect();
        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0], Point3::new(1.0, 2.0, 0.0));
        assert_relative_eq!(points[2], Point3::new(2.0, 4.0, 0.0));
        assert_relative_eq!(points[4], Point3::new(3.0, 6.0, 0.0));
    }

    #[test]
    fn test_full_turn() {
        // Record the angle in x so we can see exactly what got sampled
        let angles: Vec<_> = sample_full_turn(|deg| Point3::new(deg as f32, 0.0, 0.0), 10)
            .map(|p| p.x)
            .collect();
        assert_eq!(angles.len(), 37);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[1], 10.0);
        assert_eq!(angles[36], 360.0);

        assert_eq!(sample_full_turn(|_| Point3::origin(), 5).count(), 73);
    }

    #[test]
    #[should_panic]
    fn test_uneven_step() {
        let _ = sample_full_turn(|_| Point3::origin(), 7);
    }
}
