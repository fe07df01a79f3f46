//! Clipping against a circular window.

use crate::geometry::{round_half_up, GridPoint};

/// True if `p` lies inside or on the circle of radius `r` around `center`.
///
/// Compares squared distances, so no square root is taken.
#[must_use]
pub fn clip_point_circle(p: GridPoint, center: GridPoint, r: i32) -> bool {
    let dx = i64::from(p.x) - i64::from(center.x);
    let dy = i64::from(p.y) - i64::from(center.y);
    dx * dx + dy * dy <= i64::from(r) * i64::from(r)
}

/// Clip the segment `p1 -> p2` to the disc of radius `r` around `center`.
///
/// Solves `|P0 + t D|² = r²` for the segment relative to the center, clamps the
/// root interval to `[0, 1]` and rounds the resulting endpoints, truncating
/// towards the center where rounding would leave the disc. Returned endpoints
/// always pass [`clip_point_circle`]. A segment with both endpoints inside is
/// returned unchanged; `None` means no part of the segment is inside.
#[must_use]
pub fn clip_line_circle(p1: GridPoint, p2: GridPoint, center: GridPoint, r: i32) -> Option<(GridPoint, GridPoint)> {
    if clip_point_circle(p1, center, r) && clip_point_circle(p2, center, r) {
        return Some((p1, p2));
    }

    let (x0, y0) = (f64::from(p1.x - center.x), f64::from(p1.y - center.y));
    let (dx, dy) = (f64::from(p2.x - p1.x), f64::from(p2.y - p1.y));
    let rf = f64::from(r);

    let a = dx * dx + dy * dy;
    if a == 0.0 {
        // Coincident endpoints outside the circle.
        return None;
    }
    let b = 2.0 * (x0 * dx + y0 * dy);
    let c = x0 * x0 + y0 * y0 - rf * rf;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    let root = disc.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    let t_min = t1.min(t2).max(0.0);
    let t_max = t1.max(t2).min(1.0);
    if t_min > t_max {
        return None;
    }

    let at = |t: f64| {
        let (x, y) = (x0 + t * dx, y0 + t * dy);
        let nearest = GridPoint::new(round_half_up(x) + center.x, round_half_up(y) + center.y);
        if clip_point_circle(nearest, center, r) {
            return nearest;
        }
        // Rounding pushed the boundary point out; truncate towards the center instead.
        GridPoint::new(x.trunc() as i32 + center.x, y.trunc() as i32 + center.y)
    };
    Some((at(t_min), at(t_max)))
}
