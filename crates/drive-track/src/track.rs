//! A curve together with the road ribbon generated from it.

use std::fmt;

use drive_core::{DriveError, Result, Tolerance};
use drive_math::{wrap_parameter, Point3, Side};
use tracing::info;

use crate::config::TrackConfig;
use crate::curve::{Curve, ParametricCurve};
use crate::ribbon::{generate_ribbon, Ribbon, RibbonParams};
use crate::sampling;

/// A track centerline and its most recently generated ribbon.
///
/// Parameters passed to the query methods are relative to the start of the
/// curve's domain, so `t = 0` is always the first point of the loop.
pub struct Track {
    curve: Box<dyn Curve>,
    scale: f64,
    tolerance: Tolerance,
    ribbon: Option<Ribbon>,
}

impl Track {
    pub fn new<C: Curve + 'static>(curve: C) -> Result<Self> {
        let (start, finish) = curve.domain();
        if !start.is_finite() || !finish.is_finite() || finish <= start {
            return Err(DriveError::InvalidDomain { start, finish });
        }
        Ok(Self {
            curve: Box::new(curve),
            scale: 1.0,
            tolerance: Tolerance::default(),
            ribbon: None,
        })
    }

    /// Build a track from three coordinate functions over `[start, finish)`.
    pub fn from_fns<X, Y, Z>(x: X, y: Y, z: Z, start: f64, finish: f64) -> Result<Self>
    where
        X: Fn(f64) -> f64 + Send + Sync + 'static,
        Y: Fn(f64) -> f64 + Send + Sync + 'static,
        Z: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(ParametricCurve::new(x, y, z, start, finish)?)
    }

    /// Build a track and generate its ribbon from `config`.
    pub fn from_config<C: Curve + 'static>(curve: C, config: &TrackConfig) -> Result<Self> {
        let mut track = Self::new(curve)?
            .with_scale(config.scale)
            .with_tolerance(config.tolerance);
        track.generate(config.sample_count, config.width, config.thickness)?;
        Ok(track)
    }

    /// Multiplier applied to centerline coordinates when generating ribbons.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn curve(&self) -> &dyn Curve {
        self.curve.as_ref()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn start(&self) -> f64 {
        self.curve.domain().0
    }

    pub fn finish(&self) -> f64 {
        self.curve.domain().1
    }

    /// Parameter length of one lap.
    pub fn length(&self) -> f64 {
        let (start, finish) = self.curve.domain();
        finish - start
    }

    /// Centerline point at `t`, folded into one lap.
    pub fn evaluate(&self, t: f64) -> Point3 {
        let t = wrap_parameter(t, self.length());
        self.curve.point_at(self.start() + t)
    }

    /// Heading of the centerline at `t` on the ground plane, in radians from +X toward +Z.
    pub fn tangent_angle(&self, t: f64, dt: f64) -> Result<f64> {
        sampling::tangent_angle(self.curve(), self.start() + t, dt, self.tolerance)
    }

    /// Heading perpendicular to the centerline at `t`, on `side`.
    pub fn normal_angle(&self, t: f64, dt: f64, side: Side) -> Result<f64> {
        sampling::normal_angle(self.curve(), self.start() + t, dt, side, self.tolerance)
    }

    /// Regenerate the ribbon, replacing any previous one.
    ///
    /// On failure the previous ribbon, if any, is left in place.
    pub fn generate(&mut self, sample_count: usize, width: f64, thickness: f64) -> Result<&Ribbon> {
        let params = RibbonParams::new(sample_count, width, thickness);
        let ribbon = generate_ribbon(self.curve(), self.scale, &params, self.tolerance)?;
        info!(
            samples = ribbon.len(),
            width,
            replaced = self.ribbon.is_some(),
            "Track ribbon ready"
        );
        Ok(&*self.ribbon.insert(ribbon))
    }

    pub fn ribbon(&self) -> Option<&Ribbon> {
        self.ribbon.as_ref()
    }
}

impl fmt::Debug for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Track")
            .field("domain", &self.curve.domain())
            .field("scale", &self.scale)
            .field("tolerance", &self.tolerance)
            .field("ribbon_len", &self.ribbon.as_ref().map(Ribbon::len))
            .finish()
    }
}
