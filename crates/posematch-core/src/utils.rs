//! Geometric primitives and summary statistics for landmark sets.
//!
//! Every transform returns a new landmark list; inputs are never mutated.
//! Degenerate geometry (zero scale factor, zero-length rays) passes through
//! as an identity or neutral value instead of producing non-finite numbers.

use ndarray::ArrayView1;

use crate::types::Landmark;

/// Translates every landmark by subtracting `offset` from its coordinates.
///
/// Visibility values are preserved.
#[must_use]
pub fn translate(landmarks: &[Landmark], offset: &Landmark) -> Vec<Landmark> {
    landmarks
        .iter()
        .map(|lm| Landmark {
            x: lm.x - offset.x,
            y: lm.y - offset.y,
            z: lm.z - offset.z,
            visibility: lm.visibility,
        })
        .collect()
}

/// Divides every coordinate by `factor`.
///
/// A factor of exactly 0.0 is degenerate input; the landmarks are returned
/// unchanged rather than collapsing to infinities.
#[must_use]
pub fn scale(landmarks: &[Landmark], factor: f64) -> Vec<Landmark> {
    if factor == 0.0 {
        return landmarks.to_vec();
    }
    landmarks
        .iter()
        .map(|lm| Landmark {
            x: lm.x / factor,
            y: lm.y / factor,
            z: lm.z / factor,
            visibility: lm.visibility,
        })
        .collect()
}

/// Rotates every landmark by `angle` radians about the vertical axis.
///
/// Only `x` and `z` change; `y` and visibility are untouched.
#[must_use]
pub fn rotate_y(landmarks: &[Landmark], angle: f64) -> Vec<Landmark> {
    let (sin, cos) = angle.sin_cos();
    landmarks
        .iter()
        .map(|lm| Landmark {
            x: lm.x.mul_add(cos, -(lm.z * sin)),
            y: lm.y,
            z: lm.x.mul_add(sin, lm.z * cos),
            visibility: lm.visibility,
        })
        .collect()
}

/// Computes the angle at vertex `p2` between the rays to `p1` and `p3`.
///
/// Returns degrees in [0, 180] via the clamped arccosine of the normalized
/// dot product. A zero-length ray makes the angle undeterminable and yields
/// 0.0.
#[must_use]
pub fn joint_angle_deg(p1: &Landmark, p2: &Landmark, p3: &Landmark) -> f64 {
    let (ax, ay, az) = (p1.x - p2.x, p1.y - p2.y, p1.z - p2.z);
    let (bx, by, bz) = (p3.x - p2.x, p3.y - p2.y, p3.z - p2.z);

    let mag_a = az.mul_add(az, ax.mul_add(ax, ay * ay)).sqrt();
    let mag_b = bz.mul_add(bz, bx.mul_add(bx, by * by)).sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    let dot = az.mul_add(bz, ax.mul_add(bx, ay * by));
    let cos = (dot / (mag_a * mag_b)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Arithmetic mean of a sequence; 0.0 for empty input.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    ArrayView1::from(values).mean().unwrap_or(0.0)
}

/// Population variance (divide by `n`, not `n - 1`); 0.0 for empty input.
#[must_use]
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    ArrayView1::from(values).var(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lm(x: f64, y: f64, z: f64) -> Landmark {
        Landmark::new(x, y, z)
    }

    #[test]
    fn test_translate_preserves_visibility() {
        let landmarks = vec![Landmark::with_visibility(1.0, 2.0, 3.0, 0.7)];
        let moved = translate(&landmarks, &lm(1.0, 1.0, 1.0));

        assert!((moved[0].x - 0.0).abs() < 1e-12);
        assert!((moved[0].y - 1.0).abs() < 1e-12);
        assert!((moved[0].z - 2.0).abs() < 1e-12);
        assert_eq!(moved[0].visibility, Some(0.7));
    }

    #[test]
    fn test_scale_divides_coordinates() {
        let landmarks = vec![lm(2.0, 4.0, -6.0)];
        let scaled = scale(&landmarks, 2.0);

        assert!((scaled[0].x - 1.0).abs() < 1e-12);
        assert!((scaled[0].y - 2.0).abs() < 1e-12);
        assert!((scaled[0].z + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_by_zero_is_identity() {
        let landmarks = vec![lm(2.0, 4.0, -6.0)];
        let scaled = scale(&landmarks, 0.0);

        assert_eq!(scaled, landmarks);
        assert!(scaled[0].x.is_finite());
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = rotate_y(&[lm(1.0, 5.0, 0.0)], std::f64::consts::FRAC_PI_2);

        assert!(rotated[0].x.abs() < 1e-12);
        assert!((rotated[0].y - 5.0).abs() < 1e-12);
        assert!((rotated[0].z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let original = lm(0.3, -0.2, 0.9);
        let rotated = rotate_y(&[original], 2.0 * std::f64::consts::PI);

        assert!((rotated[0].x - original.x).abs() < 1e-12);
        assert!((rotated[0].z - original.z).abs() < 1e-12);
    }

    #[test]
    fn test_joint_angle_straight_line() {
        // Rays pointing the same way: 0 degrees. Opposite ways: 180.
        let vertex = lm(0.0, 0.0, 0.0);
        let same = joint_angle_deg(&lm(1.0, 0.0, 0.0), &vertex, &lm(2.0, 0.0, 0.0));
        let opposite = joint_angle_deg(&lm(-1.0, 0.0, 0.0), &vertex, &lm(1.0, 0.0, 0.0));

        assert!(same.abs() < 1e-9);
        assert!((opposite - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_joint_angle_perpendicular() {
        let angle = joint_angle_deg(
            &lm(1.0, 0.0, 0.0),
            &lm(0.0, 0.0, 0.0),
            &lm(0.0, 1.0, 0.0),
        );
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_joint_angle_degenerate_ray() {
        let vertex = lm(0.5, 0.5, 0.5);
        let angle = joint_angle_deg(&vertex, &vertex, &lm(1.0, 0.0, 0.0));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_mean_and_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        assert!((mean(&values) - 5.0).abs() < 1e-12);
        // Population variance of the classic example is exactly 4.
        assert!((population_variance(&values) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_stats_empty_input() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_variance(&[]), 0.0);
    }

    #[test]
    fn test_variance_single_value() {
        assert_eq!(population_variance(&[42.0]), 0.0);
    }
}
