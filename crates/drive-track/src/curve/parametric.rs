//! Curve built from three independent coordinate functions.

use std::fmt;

use drive_core::{DriveError, Result};
use drive_math::{dvec3, Point3};

use super::Curve;

type CoordFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Endpoints closer than this are treated as the same point.
const CLOSURE_EPSILON: f64 = 1e-9;

/// A curve given as `x(t)`, `y(t)`, `z(t)` over `[start, finish)`.
pub struct ParametricCurve {
    x: CoordFn,
    y: CoordFn,
    z: CoordFn,
    start: f64,
    finish: f64,
    closed: bool,
}

impl ParametricCurve {
    pub fn new<X, Y, Z>(x: X, y: Y, z: Z, start: f64, finish: f64) -> Result<Self>
    where
        X: Fn(f64) -> f64 + Send + Sync + 'static,
        Y: Fn(f64) -> f64 + Send + Sync + 'static,
        Z: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        if !start.is_finite() || !finish.is_finite() || finish <= start {
            return Err(DriveError::InvalidDomain { start, finish });
        }
        let mut curve = Self {
            x: Box::new(x),
            y: Box::new(y),
            z: Box::new(z),
            start,
            finish,
            closed: false,
        };
        curve.closed = curve.point_at(start).distance(curve.point_at(finish)) < CLOSURE_EPSILON;
        Ok(curve)
    }
}

impl Curve for ParametricCurve {
    fn point_at(&self, t: f64) -> Point3 {
        dvec3((self.x)(t), (self.y)(t), (self.z)(t))
    }

    fn domain(&self) -> (f64, f64) {
        (self.start, self.finish)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl fmt::Debug for ParametricCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("start", &self.start)
            .field("finish", &self.finish)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_rejects_empty_domain() {
        let err = ParametricCurve::new(f64::cos, |_| 0.0, f64::sin, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, DriveError::InvalidDomain { .. }));

        let err = ParametricCurve::new(f64::cos, |_| 0.0, f64::sin, 0.0, f64::NAN).unwrap_err();
        assert!(matches!(err, DriveError::InvalidDomain { .. }));
    }

    #[test]
    fn test_evaluates_each_axis() {
        let curve = ParametricCurve::new(|t| t, |t| 2.0 * t, |t| -t, 0.0, 1.0).unwrap();
        assert_eq!(curve.point_at(0.5), dvec3(0.5, 1.0, -0.5));
        assert_eq!(curve.domain(), (0.0, 1.0));
        assert!(!curve.is_closed());
    }

    #[test]
    fn test_detects_closed_loop() {
        let circle = ParametricCurve::new(f64::cos, |_| 0.0, f64::sin, 0.0, TAU).unwrap();
        assert!(circle.is_closed());
    }

    #[test]
    fn test_debug_omits_functions() {
        let curve = ParametricCurve::new(|t| t, |_| 0.0, |_| 0.0, 0.0, 2.0).unwrap();
        let text = format!("{:?}", curve);
        assert!(text.contains("finish: 2.0"));
    }
}
