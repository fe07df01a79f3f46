//! Parametric curve tracers: Bezier, Hermite and cardinal splines.
//!
//! Control points stay in floating point; only the final pixel write rounds
//! with `floor(v + 0.5)`.

use log::{debug, trace};

use crate::config::CurveConfig;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::surface::Surface;

/// Check a control point list before handing it to a tracer.
///
/// The tracers themselves silently draw nothing on short input; hosts that
/// want to reject it call this first.
///
/// # Errors
///
/// Returns [`Error::DegenerateInput`] when `points` holds fewer than `required` entries.
pub fn validate_control_points(points: &[Point], required: usize) -> Result<()> {
    Error::check_points(required, points.len())
}

// ============================================================================
// Bezier
// ============================================================================

/// De Casteljau evaluation of the Bezier curve on `points[first..=last]` at `t`.
///
/// Plain recursion with no memoization: O(n²) interpolations for n control
/// points, which is fine for the handful of points a curve usually has.
///
/// # Panics
///
/// Panics if `first..=last` is out of bounds for `points`.
#[must_use]
pub fn de_casteljau(t: f64, points: &[Point], first: usize, last: usize) -> Point {
    if first == last {
        return points[first];
    }
    let p1 = de_casteljau(t, points, first, last - 1);
    let p2 = de_casteljau(t, points, first + 1, last);
    p1.lerp(p2, t)
}

/// Point on the Bezier curve through all of `points` at `t`, `None` if `points` is empty.
#[must_use]
pub fn bezier_point(t: f64, points: &[Point]) -> Option<Point> {
    let last = points.len().checked_sub(1)?;
    Some(de_casteljau(t, points, 0, last))
}

/// Draw a Bezier curve sampled at `steps + 1` uniform values of `t` in `[0, 1]`.
///
/// Fewer than two control points or zero steps draws nothing.
pub fn draw_bezier<S: Surface>(surface: &mut S, points: &[Point], steps: usize, color: S::Color) {
    if points.len() < 2 || steps < 1 {
        debug!(
            "bezier with {} control points and {steps} steps, nothing drawn",
            points.len()
        );
        return;
    }

    let last = points.len() - 1;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let p = de_casteljau(t, points, 0, last).to_grid();
        surface.set_pixel(p.x, p.y, color);
    }
}

// ============================================================================
// Hermite
// ============================================================================

/// Cubic coefficients `[a, b, c, d]` of `a t³ + b t² + c t + d` for one axis
/// of a Hermite segment from `p0` (tangent `t0`) to `p1` (tangent `t1`).
#[must_use]
pub fn hermite_coefficients(p0: f64, t0: f64, p1: f64, t1: f64) -> [f64; 4] {
    [
        2.0 * p0 - 2.0 * p1 + t0 + t1,
        -3.0 * p0 + 3.0 * p1 - 2.0 * t0 - t1,
        t0,
        p0,
    ]
}

/// Evaluate `a t³ + b t² + c t + d` (Horner form).
#[inline]
#[must_use]
pub fn evaluate_cubic(coeffs: &[f64; 4], t: f64) -> f64 {
    ((coeffs[0] * t + coeffs[1]) * t + coeffs[2]) * t + coeffs[3]
}

/// One cubic Hermite segment. `t0` and `t1` are tangent vectors, not positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    /// Start point.
    pub p0: Point,
    /// Tangent at the start.
    pub t0: Point,
    /// End point.
    pub p1: Point,
    /// Tangent at the end.
    pub t1: Point,
}

impl HermiteSegment {
    /// Create a segment.
    #[must_use]
    pub const fn new(p0: Point, t0: Point, p1: Point, t1: Point) -> Self {
        Self { p0, t0, p1, t1 }
    }

    /// Split a flattened `P0, T0, P1, T1, P0, T0, ...` list into segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] unless the list holds a positive
    /// multiple of four entries.
    pub fn from_flattened(points: &[Point]) -> Result<Vec<Self>> {
        Error::check_points(4, points.len())?;
        Error::check_points(points.len().next_multiple_of(4), points.len())?;
        Ok(points
            .chunks_exact(4)
            .map(|c| Self::new(c[0], c[1], c[2], c[3]))
            .collect())
    }

    /// Point on the segment at `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        let xc = hermite_coefficients(self.p0.x, self.t0.x, self.p1.x, self.t1.x);
        let yc = hermite_coefficients(self.p0.y, self.t0.y, self.p1.y, self.t1.y);
        Point::new(evaluate_cubic(&xc, t), evaluate_cubic(&yc, t))
    }

    /// Straight-line span between the endpoints.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        self.p0.distance(self.p1)
    }
}

/// Draw a Hermite segment with the default [`CurveConfig`].
///
/// See [`draw_hermite_with`].
pub fn draw_hermite<S: Surface>(surface: &mut S, segment: &HermiteSegment, points: usize, color: S::Color) {
    draw_hermite_with(surface, segment, points, &CurveConfig::default(), color);
}

/// Draw a Hermite segment.
///
/// The sample count is `max(points, min(cap, 2 * chord + 10))`, so long
/// segments get enough samples to stay gap-free. A request below two samples
/// draws nothing.
pub fn draw_hermite_with<S: Surface>(
    surface: &mut S,
    segment: &HermiteSegment,
    points: usize,
    config: &CurveConfig,
    color: S::Color,
) {
    if points < 2 {
        debug!("hermite with {points} requested points, nothing drawn");
        return;
    }

    let xc = hermite_coefficients(segment.p0.x, segment.t0.x, segment.p1.x, segment.t1.x);
    let yc = hermite_coefficients(segment.p0.y, segment.t0.y, segment.p1.y, segment.t1.y);

    let count = config.hermite_point_count(points, segment.chord_length());
    let dt = 1.0 / (count - 1) as f64;
    trace!("hermite segment sampled at {count} points");

    for i in 0..count {
        let t = i as f64 * dt;
        let p = Point::new(evaluate_cubic(&xc, t), evaluate_cubic(&yc, t)).to_grid();
        surface.set_pixel(p.x, p.y, color);
    }
}

/// Draw every segment of a flattened `P0, T0, P1, T1, ...` list.
///
/// Trailing entries that do not make a whole segment are ignored.
pub fn draw_hermite_path<S: Surface>(
    surface: &mut S,
    points: &[Point],
    samples: usize,
    config: &CurveConfig,
    color: S::Color,
) {
    for c in points.chunks_exact(4) {
        let segment = HermiteSegment::new(c[0], c[1], c[2], c[3]);
        draw_hermite_with(surface, &segment, samples, config, color);
    }
}

// ============================================================================
// Cardinal spline
// ============================================================================

/// Tangents of a cardinal spline with tension `c`.
///
/// Interior points use `(c / 2) * (p[i+1] - p[i-1])`; the two ends use the
/// one-sided difference to their only neighbour. Fewer than two points yields
/// zero tangents.
#[must_use]
pub fn cardinal_tangents(points: &[Point], c: f64) -> Vec<Point> {
    let n = points.len();
    if n < 2 {
        return vec![Point::ORIGIN; n];
    }

    let scale = c / 2.0;
    (0..n)
        .map(|i| {
            let next = points[(i + 1).min(n - 1)];
            let prev = points[i.saturating_sub(1)];
            (next - prev) * scale
        })
        .collect()
}

/// Draw a cardinal spline through `points`.
///
/// Each consecutive pair becomes a Hermite segment with the tangents from
/// [`cardinal_tangents`]. The per-segment request is
/// `max(cardinal_points, min(cap, 1.5 * chord + 20))`, after which the
/// Hermite density rule applies on top.
pub fn draw_cardinal_spline<S: Surface>(surface: &mut S, points: &[Point], config: &CurveConfig, color: S::Color) {
    if points.len() < 2 {
        debug!("cardinal spline with {} points, nothing drawn", points.len());
        return;
    }

    let tangents = cardinal_tangents(points, config.tension);
    for i in 0..points.len() - 1 {
        let segment = HermiteSegment::new(points[i], tangents[i], points[i + 1], tangents[i + 1]);
        let request = config.cardinal_point_count(segment.chord_length());
        draw_hermite_with(surface, &segment, request, config, color);
    }
}
