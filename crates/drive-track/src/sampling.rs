//! Central-difference direction estimates on the ground (x-z) plane.

use drive_core::{DriveError, Result, Tolerance};
use drive_math::{heading, Side};
use tracing::warn;

use crate::curve::Curve;

/// Heading of the curve at absolute parameter `t`, from the chord between `t - dt` and `t + dt`.
///
/// Fails with [`DriveError::DegenerateTangent`] when the two samples coincide in the
/// x-z plane or either one is not finite. The reported `t` is relative to the
/// curve's start.
pub fn tangent_angle(curve: &dyn Curve, t: f64, dt: f64, tolerance: Tolerance) -> Result<f64> {
    let p0 = curve.point_at(t - dt);
    let p1 = curve.point_at(t + dt);
    let chord = p1 - p0;
    let separation = chord.x.hypot(chord.z);

    if !separation.is_finite() || tolerance.is_zero(separation) {
        let (start, _) = curve.domain();
        warn!(t = t - start, dt, separation, "Degenerate tangent estimate");
        return Err(DriveError::DegenerateTangent { t: t - start });
    }
    Ok(heading(chord))
}

/// Tangent heading rotated a quarter turn toward `side`.
pub fn normal_angle(
    curve: &dyn Curve,
    t: f64,
    dt: f64,
    side: Side,
    tolerance: Tolerance,
) -> Result<f64> {
    Ok(tangent_angle(curve, t, dt, tolerance)? + side.normal_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Circle, ParametricCurve};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_circle_tangent_perpendicular_to_radius() {
        let circle = Circle::new(1.0, 0.0);
        let tol = Tolerance::default();
        for i in 0..16 {
            let t = i as f64 * PI / 8.0;
            let angle = tangent_angle(&circle, t, 1e-4, tol).unwrap();
            let dot = angle.cos() * t.cos() + angle.sin() * t.sin();
            assert!(dot.abs() < 1e-9, "Tangent not perpendicular at t={}: dot={}", t, dot);
        }
    }

    #[test]
    fn test_vertical_tangent_keeps_quadrant() {
        // Moving straight along +Z at t=0 and -Z at t=PI
        let circle = Circle::new(1.0, 0.0);
        let tol = Tolerance::default();
        assert_relative_eq!(tangent_angle(&circle, 0.0, 1e-3, tol).unwrap(), FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(tangent_angle(&circle, PI, 1e-3, tol).unwrap(), -FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_normal_sides() {
        let circle = Circle::new(1.0, 0.0);
        let tol = Tolerance::default();
        let left = normal_angle(&circle, 0.0, 1e-3, Side::Left, tol).unwrap();
        let right = normal_angle(&circle, 0.0, 1e-3, Side::Right, tol).unwrap();
        // Heading +Z at (1, 0, 0): seen from above, left is +X (away from the center)
        assert_relative_eq!(left, 0.0, epsilon = 1e-9);
        assert_relative_eq!(right, PI, epsilon = 1e-9);
    }

    #[test]
    fn test_stationary_curve_is_degenerate() {
        let still = ParametricCurve::new(|_| 1.0, |t| t, |_| 2.0, 0.0, 1.0).unwrap();
        let err = tangent_angle(&still, 0.5, 0.1, Tolerance::default()).unwrap_err();
        match err {
            DriveError::DegenerateTangent { t } => assert_relative_eq!(t, 0.5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_sample_is_degenerate() {
        let broken = ParametricCurve::new(|t| 1.0 / t, |_| 0.0, |t| t, -1.0, 1.0).unwrap();
        // t - dt hits the pole at zero
        assert!(tangent_angle(&broken, 0.1, 0.1, Tolerance::default()).is_err());
    }
}
