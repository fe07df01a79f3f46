//! Rectangle fills made of parallel curves.
//!
//! Both fills draw one curve per pixel column (or row) whose control points
//! lie on a straight line, so the result is a solid block. They exist to
//! exercise the curve tracers as fillers.

use crate::config::CurveConfig;
use crate::geometry::{GridPoint, Point};
use crate::render::{draw_bezier, draw_hermite_with, HermiteSegment};
use crate::surface::Surface;

/// Fill a square with one vertical Hermite curve per column.
///
/// Each column runs from `(x, top)` to `(x, bottom)` with both tangents
/// `(0, height)`, sampled at `max(2, height + 1)` points before the Hermite
/// density rule.
pub fn fill_square_with_hermite<S: Surface>(surface: &mut S, center: GridPoint, half_size: i32, color: S::Color) {
    let h = half_size.abs();
    let (left, right) = (center.x - h, center.x + h);
    let (top, bottom) = (center.y - h, center.y + h);

    let height = bottom - top;
    let points = (height + 1).max(2) as usize;
    let tangent = Point::new(0.0, f64::from(height));
    let config = CurveConfig::default();

    for x in left..=right {
        let xf = f64::from(x);
        let segment = HermiteSegment::new(
            Point::new(xf, f64::from(top)),
            tangent,
            Point::new(xf, f64::from(bottom)),
            tangent,
        );
        draw_hermite_with(surface, &segment, points, &config, color);
    }
}

/// Fill the rectangle centred on `center` with `vertex` on a corner, one
/// horizontal cubic Bezier per row.
///
/// Inner control points sit at a third and two thirds of the width; each row
/// is sampled at `max(2, width + 1)` steps.
pub fn fill_rectangle_with_bezier<S: Surface>(surface: &mut S, center: GridPoint, vertex: GridPoint, color: S::Color) {
    let hw = (vertex.x - center.x).abs();
    let hh = (vertex.y - center.y).abs();
    let (left, right) = (center.x - hw, center.x + hw);
    let (top, bottom) = (center.y - hh, center.y + hh);

    let width = f64::from(right - left);
    let steps = (right - left + 1).max(2) as usize;
    let lf = f64::from(left);

    for y in top..=bottom {
        let yf = f64::from(y);
        let controls = [
            Point::new(lf, yf),
            Point::new(lf + width / 3.0, yf),
            Point::new(lf + 2.0 * width / 3.0, yf),
            Point::new(f64::from(right), yf),
        ];
        draw_bezier(surface, &controls, steps, color);
    }
}
