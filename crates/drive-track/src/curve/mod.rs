//! Curve trait and implementations.

mod cached;
mod circle;
mod figure_eight;
mod parametric;

use drive_math::Point3;

pub use cached::CachedCurve;
pub use circle::Circle;
pub use figure_eight::FigureEight;
pub use parametric::ParametricCurve;

/// Trait for parametric track centerlines in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at absolute parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Return the parameter domain `(start, finish)`, treated as `[start, finish)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve returns to its starting point at `finish`.
    fn is_closed(&self) -> bool {
        false
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    fn point_at(&self, t: f64) -> Point3 {
        (**self).point_at(t)
    }

    fn domain(&self) -> (f64, f64) {
        (**self).domain()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}
