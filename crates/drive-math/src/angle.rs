//! Angle and parameter helpers for planar (x-z) headings.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::Vector3;

/// Which side of the direction of travel an offset is taken toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Angle added to a heading to obtain the normal on this side.
    pub fn normal_offset(self) -> f64 {
        match self {
            Side::Left => -FRAC_PI_2,
            Side::Right => FRAC_PI_2,
        }
    }
}

/// Fold `t` into `[0, length)`.
///
/// Uses a Euclidean remainder so negative parameters wrap forward instead of
/// keeping their sign. A non-positive `length` leaves `t` untouched.
pub fn wrap_parameter(t: f64, length: f64) -> f64 {
    if length <= 0.0 {
        return t;
    }
    let wrapped = t.rem_euclid(length);
    // rem_euclid can round up to exactly `length` for tiny negative inputs
    if wrapped >= length {
        0.0
    } else {
        wrapped
    }
}

/// Heading of a direction projected onto the x-z plane, measured from +X toward +Z.
pub fn heading(direction: Vector3) -> f64 {
    direction.z.atan2(direction.x)
}
