//! Line rasterizers.
//!
//! All three produce an 8-connected pixel path that includes both endpoints.
//! Only Bresenham is integer-only; DDA accumulates the minor axis in floating
//! point and the parametric tracer truncates, so its path may differ from the
//! other two by a pixel here and there.

use crate::geometry::round_half_up;
use crate::surface::Surface;

/// `(x2 - x1, y2 - y1)` widened to i64; endpoints at opposite ends of the
/// i32 range differ by more than `i32::MAX`.
fn deltas(x1: i32, y1: i32, x2: i32, y2: i32) -> (i64, i64) {
    (i64::from(x2) - i64::from(x1), i64::from(y2) - i64::from(y1))
}

/// Draw a line with the digital differential analyzer.
///
/// The axis with the larger delta is stepped one pixel at a time in
/// increasing order (endpoints are swapped if needed); the other axis
/// accumulates the slope and is rounded at every step.
pub fn draw_line_dda<S: Surface>(
    surface: &mut S,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: S::Color,
) {
    let (dx, dy) = deltas(x1, y1, x2, y2);

    if dx.abs() >= dy.abs() {
        let (x1, y1, x2, y2) = if x1 > x2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
        surface.set_pixel(x1, y1, color);
        if x1 == x2 {
            return;
        }

        let (dx, dy) = deltas(x1, y1, x2, y2);
        let m = dy as f64 / dx as f64;
        let mut y = f64::from(y1);
        for x in (x1 + 1)..=x2 {
            y += m;
            surface.set_pixel(x, round_half_up(y), color);
        }
    } else {
        let (x1, y1, x2, y2) = if y1 > y2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
        surface.set_pixel(x1, y1, color);

        let (dx, dy) = deltas(x1, y1, x2, y2);
        let mi = dx as f64 / dy as f64;
        let mut x = f64::from(x1);
        for y in (y1 + 1)..=y2 {
            x += mi;
            surface.set_pixel(round_half_up(x), y, color);
        }
    }
}

/// Draw a line with Bresenham's midpoint algorithm (integer arithmetic only).
///
/// The decision variable starts at `d = 2*minor - major`; each step adds
/// `d1 = 2*minor` when the minor axis stays put and `d2 = 2*(minor - major)`
/// when it advances. Endpoints are put in a canonical order first, so
/// `(p1, p2)` and `(p2, p1)` plot the same pixels. Every pixel is plotted once.
pub fn draw_line_bresenham<S: Surface>(
    surface: &mut S,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: S::Color,
) {
    let (dx, dy) = deltas(x1, y1, x2, y2);
    let (dx, dy) = (dx.abs(), dy.abs());

    if dx >= dy {
        let (x1, y1, x2, y2) = if x1 > x2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
        let sy = if y2 >= y1 { 1 } else { -1 };

        let mut d = 2 * dy - dx;
        let d1 = 2 * dy;
        let d2 = 2 * (dy - dx);

        let (mut x, mut y) = (x1, y1);
        surface.set_pixel(x, y, color);
        while x < x2 {
            if d < 0 {
                d += d1;
            } else {
                d += d2;
                y += sy;
            }
            x += 1;
            surface.set_pixel(x, y, color);
        }
    } else {
        let (x1, y1, x2, y2) = if y1 > y2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
        let sx = if x2 >= x1 { 1 } else { -1 };

        let mut d = 2 * dx - dy;
        let d1 = 2 * dx;
        let d2 = 2 * (dx - dy);

        let (mut x, mut y) = (x1, y1);
        surface.set_pixel(x, y, color);
        while y < y2 {
            if d < 0 {
                d += d1;
            } else {
                d += d2;
                x += sx;
            }
            y += 1;
            surface.set_pixel(x, y, color);
        }
    }
}

/// Draw a line by stepping the parameter `t` of `p1 + t * (p2 - p1)`.
///
/// `t` advances by `1 / max(|dx|, |dy|)` from 0 to 1 and each coordinate is
/// truncated toward zero, not rounded. The result is close to, but not
/// pixel-identical with, the Bresenham path for the same endpoints.
pub fn draw_line_parametric<S: Surface>(
    surface: &mut S,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: S::Color,
) {
    let (dx, dy) = deltas(x1, y1, x2, y2);
    let (alpha_x, alpha_y) = (dx as f64, dy as f64);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        surface.set_pixel(x1, y1, color);
        return;
    }

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        // Truncated offsets never pass the far endpoint, so the sums fit in i32.
        let x = i64::from(x1) + (alpha_x * t) as i64;
        let y = i64::from(y1) + (alpha_y * t) as i64;
        surface.set_pixel(x as i32, y as i32, color);
    }
}

/// Draw the inclusive horizontal run `x1..=x2` on row `y` (either order).
pub fn draw_horizontal_line<S: Surface>(surface: &mut S, x1: i32, x2: i32, y: i32, color: S::Color) {
    surface.draw_span(x1, x2, y, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPoint;
    use crate::surface::PixelRecorder;

    fn trace(f: fn(&mut PixelRecorder<u8>, i32, i32, i32, i32, u8), a: (i32, i32), b: (i32, i32)) -> Vec<GridPoint> {
        let mut rec = PixelRecorder::new(0);
        f(&mut rec, a.0, a.1, b.0, b.1, 1);
        rec.writes().iter().map(|(p, _)| *p).collect()
    }

    fn pts(v: &[(i32, i32)]) -> Vec<GridPoint> {
        v.iter().copied().map(GridPoint::from).collect()
    }

    #[test]
    fn test_bresenham_shallow_staircase() {
        let path = trace(draw_line_bresenham, (0, 0), (5, 2));
        assert_eq!(path, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]));
    }

    #[test]
    fn test_bresenham_steep_negative() {
        let path = trace(draw_line_bresenham, (0, 0), (-2, -5));
        assert_eq!(path.len(), 6);
        assert_eq!(path.first(), Some(&GridPoint::new(-2, -5)));
        assert_eq!(path.last(), Some(&GridPoint::new(0, 0)));
        // One pixel per row, no repeats.
        let rows: Vec<i32> = path.iter().map(|p| p.y).collect();
        assert_eq!(rows, vec![-5, -4, -3, -2, -1, 0]);
    }

    #[test]
    fn test_bresenham_single_point() {
        let path = trace(draw_line_bresenham, (3, 4), (3, 4));
        assert_eq!(path, pts(&[(3, 4)]));
    }

    #[test]
    fn test_bresenham_direction_independent() {
        let mut fwd = PixelRecorder::new(0u8);
        let mut back = PixelRecorder::new(0u8);
        draw_line_bresenham(&mut fwd, -3, 7, 11, -2, 1);
        draw_line_bresenham(&mut back, 11, -2, -3, 7, 1);
        assert_eq!(fwd.points(), back.points());
    }

    #[test]
    fn test_dda_includes_both_endpoints_when_reversed() {
        let path = trace(draw_line_dda, (10, 3), (0, 0));
        assert_eq!(path.len(), 11);
        assert!(path.contains(&GridPoint::new(10, 3)));
        assert!(path.contains(&GridPoint::new(0, 0)));
    }

    #[test]
    fn test_dda_steep() {
        let path = trace(draw_line_dda, (0, 0), (2, 4));
        assert_eq!(path, pts(&[(0, 0), (1, 1), (1, 2), (2, 3), (2, 4)]));
    }

    #[test]
    fn test_parametric_truncates() {
        let path = trace(draw_line_parametric, (0, 0), (4, 1));
        // y = trunc(t) stays 0 until t reaches 1.
        assert_eq!(path, pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 1)]));
    }

    #[test]
    fn test_parametric_zero_length() {
        let path = trace(draw_line_parametric, (2, 2), (2, 2));
        assert_eq!(path, pts(&[(2, 2)]));
    }

    #[test]
    fn test_deltas_span_full_i32_range() {
        let full = i64::from(u32::MAX);
        assert_eq!(deltas(i32::MIN, i32::MAX, i32::MAX, i32::MIN), (full, -full));
        assert_eq!(deltas(i32::MAX, 0, i32::MIN, 0), (-full, 0));
    }

    #[test]
    fn test_short_lines_at_coordinate_extremes() {
        let tracers: [fn(&mut PixelRecorder<u8>, i32, i32, i32, i32, u8); 3] =
            [draw_line_dda, draw_line_bresenham, draw_line_parametric];
        let start = (i32::MAX - 4, i32::MIN);
        let end = (i32::MAX, i32::MIN + 2);
        for f in tracers {
            let path = trace(f, start, end);
            assert_eq!(path.len(), 5);
            assert_eq!(path.first(), Some(&GridPoint::from(start)));
            assert_eq!(path.last(), Some(&GridPoint::from(end)));
        }
    }

    #[test]
    fn test_horizontal_line() {
        let mut rec = PixelRecorder::new(0u8);
        draw_horizontal_line(&mut rec, 4, 1, 7, 1);
        assert_eq!(rec.points().len(), 4);
        assert!(rec.points().iter().all(|p| p.y == 7));
    }
}
