//! Axis-aligned ellipse tracers.
//!
//! Each variant walks the first quadrant from `(0, b)` to `(a, 0)` in two
//! regions and mirrors every point into the other three quadrants with
//! [`draw_ellipse_points`]. Region 1 is where the curve is flatter than 45°
//! and x drives the walk; region 2 is where it is steeper and y drives.
//! Switching at the wrong place leaves gaps around the 45° points.
//!
//! Zero radii degenerate to a straight segment; negative radii draw nothing.

use std::f64::consts::FRAC_PI_2;

use log::debug;

use crate::geometry::round_half_up;
use crate::surface::Surface;

/// Plot `(x, y)` relative to `(xc, yc)` in all four quadrants.
#[inline]
pub fn draw_ellipse_points<S: Surface>(surface: &mut S, xc: i32, yc: i32, x: i32, y: i32, color: S::Color) {
    surface.set_pixel(xc + x, yc + y, color);
    surface.set_pixel(xc - x, yc + y, color);
    surface.set_pixel(xc - x, yc - y, color);
    surface.set_pixel(xc + x, yc - y, color);
}

/// Handle radii the quadrant walkers cannot. Returns `true` if the caller is done.
fn degenerate_radii<S: Surface>(surface: &mut S, xc: i32, yc: i32, a: i32, b: i32, color: S::Color) -> bool {
    if a < 0 || b < 0 {
        debug!("ellipse at ({xc}, {yc}) has negative radii {a}x{b}, nothing drawn");
        return true;
    }
    if a == 0 {
        for y in (yc - b)..=(yc + b) {
            surface.set_pixel(xc, y, color);
        }
        return true;
    }
    if b == 0 {
        surface.draw_span(xc - a, xc + a, yc, color);
        return true;
    }
    false
}

/// Direct evaluation of `y = b sqrt(1 - x²/a²)` then `x = a sqrt(1 - y²/b²)`.
///
/// Region 1 steps x while the next column drops by at most one row, which is
/// the rasterised form of `|dy/dx| <= 1`. Region 2 takes over on the row below
/// the last region 1 pixel and steps y down to 0.
pub fn draw_ellipse_direct<S: Surface>(surface: &mut S, xc: i32, yc: i32, a: i32, b: i32, color: S::Color) {
    if degenerate_radii(surface, xc, yc, a, b, color) {
        return;
    }

    let (af, bf) = (f64::from(a), f64::from(b));
    let (a2, b2) = (af * af, bf * bf);
    let y_at = |x: i32| round_half_up(bf * (1.0 - f64::from(x) * f64::from(x) / a2).max(0.0).sqrt());
    let x_at = |y: i32| round_half_up(af * (1.0 - f64::from(y) * f64::from(y) / b2).max(0.0).sqrt());

    let (mut x, mut y) = (0, b);
    draw_ellipse_points(surface, xc, yc, x, y, color);
    while x < a {
        let next = y_at(x + 1);
        if y - next > 1 {
            break;
        }
        x += 1;
        y = next;
        draw_ellipse_points(surface, xc, yc, x, y, color);
    }

    for y in (0..y).rev() {
        draw_ellipse_points(surface, xc, yc, x_at(y), y, color);
    }
}

/// Polar evaluation of `(a cos θ, b sin θ)`, `θ` from π/2 down to 0.
///
/// Region 1 (near the top of the ellipse, `b²x <= a²y`) steps
/// `Δθ = 1/max(a, b)`. Region 2 starts at the first steep point and steps
/// `Δθ = 1/max(b, a sin θ)`, with `θ` taken at the switch; `a sin θ` only
/// shrinks from there on. Neither axis moves more than one pixel per step.
pub fn draw_ellipse_polar<S: Surface>(surface: &mut S, xc: i32, yc: i32, a: i32, b: i32, color: S::Color) {
    if degenerate_radii(surface, xc, yc, a, b, color) {
        return;
    }

    let (af, bf) = (f64::from(a), f64::from(b));
    let (a2, b2) = (i64::from(a) * i64::from(a), i64::from(b) * i64::from(b));
    let point_at = |theta: f64| (round_half_up(af * theta.cos()), round_half_up(bf * theta.sin()));

    let mut theta = FRAC_PI_2;
    draw_ellipse_points(surface, xc, yc, 0, b, color);

    let dtheta = 1.0 / af.max(bf);
    while theta > 0.0 {
        let (x, y) = point_at(theta);
        if b2 * i64::from(x) > a2 * i64::from(y) {
            break;
        }
        draw_ellipse_points(surface, xc, yc, x, y, color);
        theta -= dtheta;
    }

    let dtheta = 1.0 / bf.max(af * theta.sin());
    while theta > 0.0 {
        let (x, y) = point_at(theta);
        draw_ellipse_points(surface, xc, yc, x, y, color);
        theta -= dtheta;
    }
    draw_ellipse_points(surface, xc, yc, a, 0, color);
}

/// Midpoint (Bresenham) ellipse with integer decision variables.
///
/// Region 1 starts at `d = b² - a²b + a²/4` and runs while `b²x < a²y`,
/// adding `b²(2x + 3)` (east) or `b²(2x + 3) + a²(2 - 2y)` (south-east).
/// Region 2 restarts at `d = b²(x + ½)² + a²(y - 1)² - a²b²` and adds
/// `b²(2x + 2) + a²(3 - 2y)` (south-east) or `a²(3 - 2y)` (south) until y = 0.
/// When the walk lands on the axis before `x = a` the run along y = 0 is
/// finished out to the vertex.
pub fn draw_ellipse_midpoint<S: Surface>(surface: &mut S, xc: i32, yc: i32, a: i32, b: i32, color: S::Color) {
    if degenerate_radii(surface, xc, yc, a, b, color) {
        return;
    }

    let (a2, b2) = (i64::from(a) * i64::from(a), i64::from(b) * i64::from(b));
    let (mut x, mut y) = (0_i64, i64::from(b));

    let mut d = b2 - a2 * y + a2 / 4;
    draw_ellipse_points(surface, xc, yc, 0, b, color);
    while b2 * x < a2 * y {
        if d < 0 {
            d += b2 * (2 * x + 3);
        } else {
            d += b2 * (2 * x + 3) + a2 * (2 - 2 * y);
            y -= 1;
        }
        x += 1;
        draw_ellipse_points(surface, xc, yc, x as i32, y as i32, color);
    }

    let xh = x as f64 + 0.5;
    let ym = (y - 1) as f64;
    let mut d = (b2 as f64 * xh * xh + a2 as f64 * ym * ym - (a2 * b2) as f64) as i64;
    while y > 0 {
        if d < 0 {
            d += b2 * (2 * x + 2) + a2 * (3 - 2 * y);
            x += 1;
        } else {
            d += a2 * (3 - 2 * y);
        }
        y -= 1;
        draw_ellipse_points(surface, xc, yc, x as i32, y as i32, color);
    }

    // Flat ellipses reach y = 0 in region 1 short of the vertex.
    while x < i64::from(a) {
        x += 1;
        draw_ellipse_points(surface, xc, yc, x as i32, 0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPoint;
    use crate::surface::PixelRecorder;
    use std::collections::BTreeSet;

    type Tracer = fn(&mut PixelRecorder<u8>, i32, i32, i32, i32, u8);

    const TRACERS: [(&str, Tracer); 3] = [
        ("direct", draw_ellipse_direct),
        ("polar", draw_ellipse_polar),
        ("midpoint", draw_ellipse_midpoint),
    ];

    fn relative(f: Tracer, a: i32, b: i32) -> BTreeSet<GridPoint> {
        let mut rec = PixelRecorder::new(0);
        f(&mut rec, 40, 30, a, b, 1);
        rec.points()
            .into_iter()
            .map(|p| GridPoint::new(p.x - 40, p.y - 30))
            .collect()
    }

    /// True if the first-quadrant arc is a single 8-connected component.
    fn is_connected(pts: &BTreeSet<GridPoint>) -> bool {
        let quadrant: BTreeSet<_> = pts.iter().filter(|p| p.x >= 0 && p.y >= 0).copied().collect();
        let Some(&start) = quadrant.iter().next() else {
            return true;
        };

        let mut seen = BTreeSet::from([start]);
        let mut pending = vec![start];
        while let Some(p) = pending.pop() {
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let q = GridPoint::new(p.x + dx, p.y + dy);
                    if quadrant.contains(&q) && seen.insert(q) {
                        pending.push(q);
                    }
                }
            }
        }
        seen.len() == quadrant.len()
    }

    #[test]
    fn test_fourfold_symmetry() {
        for (name, f) in TRACERS {
            for (a, b) in [(10, 4), (3, 12), (25, 25), (1, 1)] {
                let pts = relative(f, a, b);
                for p in &pts {
                    for q in [(-p.x, p.y), (p.x, -p.y), (-p.x, -p.y)] {
                        assert!(pts.contains(&GridPoint::from(q)), "{name} {a}x{b} missing {q:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_axis_extremes_are_plotted() {
        for (name, f) in TRACERS {
            let pts = relative(f, 20, 8);
            assert!(pts.contains(&GridPoint::new(20, 0)), "{name}");
            assert!(pts.contains(&GridPoint::new(0, 8)), "{name}");
            assert!(pts.iter().all(|p| p.x.abs() <= 20 && p.y.abs() <= 8), "{name}");
        }
    }

    #[test]
    fn test_no_gaps_across_region_switch() {
        for (name, f) in TRACERS {
            for (a, b) in [(30, 10), (10, 30), (17, 23), (6, 3), (6, 2), (1, 4), (13, 1), (8, 7)] {
                assert!(is_connected(&relative(f, a, b)), "{name} {a}x{b}");
            }
        }
    }

    #[test]
    fn test_direct_steps_down_to_region_two() {
        let mut rec = PixelRecorder::new(0u8);
        draw_ellipse_direct(&mut rec, 0, 0, 6, 3, 1);
        let quadrant: Vec<GridPoint> = rec
            .writes()
            .iter()
            .map(|(p, _)| *p)
            .filter(|p| p.x >= 0 && p.y >= 0)
            .collect();
        assert!(quadrant.contains(&GridPoint::new(6, 1)));
        assert_eq!(quadrant.last(), Some(&GridPoint::new(6, 0)));
    }

    #[test]
    fn test_polar_narrow_ellipse_has_no_jump() {
        // A 1x4 ellipse used to jump from (0, 4) straight to (1, 2).
        let pts = relative(draw_ellipse_polar, 1, 4);
        assert!(is_connected(&pts));
        assert!(pts.contains(&GridPoint::new(1, 3)) || pts.contains(&GridPoint::new(0, 3)));
    }

    #[test]
    fn test_points_near_curve() {
        let (a, b) = (30.0_f64, 12.0_f64);
        for (name, f) in TRACERS {
            for p in relative(f, 30, 12) {
                let v = (f64::from(p.x) / a).powi(2) + (f64::from(p.y) / b).powi(2);
                assert!((v - 1.0).abs() < 0.2, "{name}: {p:?} gives {v}");
            }
        }
    }

    #[test]
    fn test_midpoint_never_crosses_axis() {
        let pts = relative(draw_ellipse_midpoint, 9, 5);
        assert!(pts.iter().all(|p| p.y.abs() <= 5 && p.x.abs() <= 9));
    }

    #[test]
    fn test_flat_midpoint_reaches_vertex() {
        for (a, b) in [(8, 1), (40, 2), (75, 3)] {
            let pts = relative(draw_ellipse_midpoint, a, b);
            assert!(pts.contains(&GridPoint::new(a, 0)), "{a}x{b}");
            assert!(pts.contains(&GridPoint::new(-a, 0)), "{a}x{b}");
            assert!(is_connected(&pts), "{a}x{b}");
        }
    }

    #[test]
    fn test_degenerate_radii() {
        for (_, f) in TRACERS {
            assert_eq!(relative(f, 0, 3).len(), 7);
            assert_eq!(relative(f, 4, 0).len(), 9);
            assert!(relative(f, -1, 3).is_empty());
        }
    }
}
