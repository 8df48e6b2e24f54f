//! Figure-eight track.

use std::f64::consts::FRAC_PI_2;

use drive_math::{dvec3, Point3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// `x = cos t`, `y = height`, `z = cos t * sin t` over `[-PI/2, 3*PI/2)`.
///
/// The loop crosses itself at the origin, once at `t = -PI/2` and again at `t = PI/2`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FigureEight {
    pub height: f64,
}

impl FigureEight {
    pub const DEFAULT_HEIGHT: f64 = 0.1;

    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl Default for FigureEight {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHT)
    }
}

impl Curve for FigureEight {
    fn point_at(&self, t: f64) -> Point3 {
        let c = t.cos();
        dvec3(c, self.height, c * t.sin())
    }

    fn domain(&self) -> (f64, f64) {
        (-FRAC_PI_2, 3.0 * FRAC_PI_2)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
