//! Road ribbon generation: curve samples pushed alternately to either edge.

use drive_core::traits::Validate;
use drive_core::{DriveError, Result, Tolerance};
use drive_math::{dvec3, Bounds, Point3, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::sampling::normal_angle;

/// Side the first sample is offset toward; later samples alternate.
pub const FIRST_SIDE: Side = Side::Right;

/// Inputs to a ribbon generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibbonParams {
    pub sample_count: usize,
    /// Offset of each edge from the centerline
    pub width: f64,
    /// Recorded on the ribbon; does not move any vertex
    pub thickness: f64,
}

impl RibbonParams {
    pub fn new(sample_count: usize, width: f64, thickness: f64) -> Self {
        Self {
            sample_count,
            width,
            thickness,
        }
    }
}

impl Validate for RibbonParams {
    fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(DriveError::InvalidSampleCount(self.sample_count));
        }
        if !self.width.is_finite() {
            return Err(DriveError::InvalidConfig(format!(
                "ribbon width must be finite, got {}",
                self.width
            )));
        }
        if !self.thickness.is_finite() {
            return Err(DriveError::InvalidConfig(format!(
                "ribbon thickness must be finite, got {}",
                self.thickness
            )));
        }
        Ok(())
    }
}

/// Zig-zag strip of vertices following a track centerline.
///
/// Sample `i` sits on the [`FIRST_SIDE`] edge when `i` is even and on the
/// opposite edge when odd, so consecutive vertices cross the road.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ribbon {
    points: Vec<Point3>,
    width: f64,
    thickness: f64,
    closed: bool,
}

impl Ribbon {
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Whether the centerline this ribbon follows is a closed loop.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Side of the centerline sample `index` was offset toward.
    pub fn side_of(&self, index: usize) -> Side {
        if index % 2 == 0 {
            FIRST_SIDE
        } else {
            FIRST_SIDE.flipped()
        }
    }

    /// Vertices on one edge of the road, in travel order.
    pub fn rail(&self, side: Side) -> Vec<Point3> {
        let first = if side == FIRST_SIDE { 0 } else { 1 };
        self.points.iter().skip(first).step_by(2).copied().collect()
    }

    /// Triangle list equivalent to drawing the vertices as a triangle strip.
    ///
    /// Winding is flipped on every other triangle so all faces agree. A closed
    /// ribbon with an even vertex count wraps back to its first two vertices;
    /// otherwise the edge parity would break at the seam and the strip stays open.
    pub fn strip_triangles(&self) -> Vec<[u32; 3]> {
        let n = self.points.len();
        if n < 3 {
            return Vec::new();
        }
        let wraps = self.closed && n % 2 == 0;
        let count = if wraps { n } else { n - 2 };

        let idx = |i: usize| -> u32 { (i % n) as u32 };
        (0..count)
            .map(|i| {
                if i % 2 == 0 {
                    [idx(i), idx(i + 1), idx(i + 2)]
                } else {
                    [idx(i + 1), idx(i), idx(i + 2)]
                }
            })
            .collect()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }
}

impl Validate for Ribbon {
    fn validate(&self) -> Result<()> {
        match self.points.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(DriveError::NonFiniteGeometry { index }),
            None => Ok(()),
        }
    }
}

/// Sample `curve` at `params.sample_count` evenly spaced parameters and offset
/// each sample by `params.width` along its normal, alternating sides.
///
/// Centerline coordinates are multiplied by `scale` before the offset is added.
/// `params.thickness` is carried on the result but leaves every `y` at `scale * y`.
pub fn generate_ribbon(
    curve: &dyn Curve,
    scale: f64,
    params: &RibbonParams,
    tolerance: Tolerance,
) -> Result<Ribbon> {
    params.validate()?;

    let (start, finish) = curve.domain();
    let n = params.sample_count;
    let dt = (finish - start) / n as f64;

    let mut points = Vec::with_capacity(n);
    let mut side = FIRST_SIDE;
    for i in 0..n {
        let t = start + dt * i as f64;
        let base = curve.point_at(t);
        let normal = normal_angle(curve, t, dt, side, tolerance)?;
        side = side.flipped();

        points.push(dvec3(
            scale * base.x + params.width * normal.cos(),
            scale * base.y,
            scale * base.z + params.width * normal.sin(),
        ));
    }

    let ribbon = Ribbon {
        points,
        width: params.width,
        thickness: params.thickness,
        closed: curve.is_closed(),
    };
    ribbon.validate()?;

    debug!(
        samples = n,
        dt,
        width = params.width,
        scale,
        closed = ribbon.closed,
        "Generated track ribbon"
    );
    Ok(ribbon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Circle, FigureEight, ParametricCurve};
    use approx::assert_relative_eq;

    fn circle_ribbon(n: usize) -> Ribbon {
        let params = RibbonParams::new(n, 0.5, 0.1);
        generate_ribbon(&Circle::new(10.0, 0.0), 1.0, &params, Tolerance::default()).unwrap()
    }

    #[test]
    fn test_sample_count_validated() {
        let circle = Circle::new(1.0, 0.0);
        for n in [0, 1] {
            let err = generate_ribbon(&circle, 1.0, &RibbonParams::new(n, 0.1, 0.1), Tolerance::default())
                .unwrap_err();
            assert!(matches!(err, DriveError::InvalidSampleCount(c) if c == n));
        }
    }

    #[test]
    fn test_non_finite_width_rejected() {
        let params = RibbonParams::new(10, f64::INFINITY, 0.1);
        assert!(matches!(params.validate(), Err(DriveError::InvalidConfig(_))));
    }

    #[test]
    fn test_exact_length() {
        for n in [3, 17, 100] {
            assert_eq!(circle_ribbon(n).len(), n);
        }
    }

    #[test]
    fn test_two_samples_on_closed_loop_degenerate() {
        // dt spans half the loop, so both difference samples land on the same point
        let params = RibbonParams::new(2, 0.5, 0.1);
        let err = generate_ribbon(&Circle::new(10.0, 0.0), 1.0, &params, Tolerance::default()).unwrap_err();
        assert!(matches!(err, DriveError::DegenerateTangent { .. }));
    }

    #[test]
    fn test_edges_alternate_around_circle() {
        let ribbon = circle_ribbon(64);
        for (i, p) in ribbon.points().iter().enumerate() {
            let r = p.x.hypot(p.z);
            // First side (right) is toward the center on this loop
            let expected = match ribbon.side_of(i) {
                Side::Right => 9.5,
                Side::Left => 10.5,
            };
            assert!((r - expected).abs() < 1e-9, "vertex {} at r={}, expected {}", i, r, expected);
        }
    }

    #[test]
    fn test_thickness_leaves_height_alone() {
        let params = RibbonParams::new(8, 0.5, 3.0);
        let ribbon = generate_ribbon(&Circle::new(1.0, 0.25), 4.0, &params, Tolerance::default()).unwrap();
        assert_relative_eq!(ribbon.thickness(), 3.0);
        for p in ribbon.points() {
            assert_relative_eq!(p.y, 1.0);
        }
    }

    #[test]
    fn test_scale_applies_to_centerline_only() {
        let params = RibbonParams::new(4, 1.0, 0.0);
        let ribbon = generate_ribbon(&Circle::new(1.0, 0.0), 13.0, &params, Tolerance::default()).unwrap();
        // Sample 0 at (13, 0, 0), pushed one unit inward
        assert!((ribbon.points()[0] - dvec3(12.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_rails_split_even_and_odd() {
        let ribbon = circle_ribbon(10);
        let right = ribbon.rail(Side::Right);
        let left = ribbon.rail(Side::Left);
        assert_eq!(right.len(), 5);
        assert_eq!(left.len(), 5);
        assert_eq!(right[1], ribbon.points()[2]);
        assert_eq!(left[1], ribbon.points()[3]);
    }

    #[test]
    fn test_closed_even_strip_wraps() {
        let ribbon = circle_ribbon(100);
        let tris = ribbon.strip_triangles();
        assert_eq!(tris.len(), 100);
        assert_eq!(tris[99], [0, 99, 1]);
        for tri in &tris {
            assert!(tri.iter().all(|&i| (i as usize) < ribbon.len()));
        }
    }

    #[test]
    fn test_odd_or_open_strip_does_not_wrap() {
        assert_eq!(circle_ribbon(5).strip_triangles().len(), 3);

        let open = ParametricCurve::new(|t| t, |_| 0.0, |t| t * t, 0.0, 1.0).unwrap();
        let pair = generate_ribbon(&open, 1.0, &RibbonParams::new(2, 0.1, 0.0), Tolerance::default())
            .unwrap();
        assert!(pair.strip_triangles().is_empty());

        let ribbon = generate_ribbon(&open, 1.0, &RibbonParams::new(6, 0.1, 0.0), Tolerance::default())
            .unwrap();
        assert!(!ribbon.is_closed());
        assert_eq!(ribbon.strip_triangles().len(), 4);
    }

    #[test]
    fn test_figure_eight_scenario() {
        let params = RibbonParams::new(100, 0.1, 0.1);
        let ribbon = generate_ribbon(&FigureEight::default(), 1.0, &params, Tolerance::default()).unwrap();
        assert_eq!(ribbon.len(), 100);
        assert!(ribbon.points().iter().all(|p| p.is_finite()));
        assert!(ribbon.validate().is_ok());
    }

    #[test]
    fn test_pole_in_height_reports_non_finite_vertex() {
        // x and z stay regular, y blows up at the second sample (t = 0.5)
        let curve = ParametricCurve::new(|t| t, |t| 1.0 / (t - 0.5), |t| t * t, 0.0, 1.0).unwrap();
        let params = RibbonParams::new(2, 0.1, 0.0);
        let err = generate_ribbon(&curve, 1.0, &params, Tolerance::default()).unwrap_err();
        assert!(matches!(err, DriveError::NonFiniteGeometry { index: 1 }));
    }

    #[test]
    fn test_bounds_cover_both_edges() {
        let ribbon = circle_ribbon(64);
        let bounds = ribbon.bounds().unwrap();
        assert!(bounds.max.x > 10.0 && bounds.min.x < -10.0);
        assert!(bounds.max.z > 10.0 && bounds.min.z < -10.0);
        assert_relative_eq!(bounds.extents().y, 0.0);
        assert!(ribbon.points().iter().all(|&p| bounds.contains_point(p)));
    }
}
