//! Flat circular track.

use std::f64::consts::TAU;

use drive_math::{dvec3, Point3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A circle of `radius` around the Y axis at constant `height`, parameterized over `[0, 2*PI)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    pub height: f64,
}

impl Circle {
    pub fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        dvec3(self.radius * t.cos(), self.height, self.radius * t.sin())
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
