//! Circle tracers.
//!
//! Every variant walks one octant, from `(0, R)` towards the 45° diagonal, and
//! mirrors each point into the other seven with [`draw_circle_points`], so the
//! plotted set is always closed under the eight sign/swap reflections.
//!
//! A zero radius plots the center; a negative radius plots nothing.

use log::debug;

use crate::geometry::round_half_up;
use crate::surface::Surface;

/// Plot `(x, y)` relative to `(xc, yc)` in all eight octants.
#[inline]
pub fn draw_circle_points<S: Surface>(surface: &mut S, xc: i32, yc: i32, x: i32, y: i32, color: S::Color) {
    surface.set_pixel(xc + x, yc + y, color);
    surface.set_pixel(xc - x, yc + y, color);
    surface.set_pixel(xc - x, yc - y, color);
    surface.set_pixel(xc + x, yc - y, color);
    surface.set_pixel(xc + y, yc + x, color);
    surface.set_pixel(xc - y, yc + x, color);
    surface.set_pixel(xc - y, yc - x, color);
    surface.set_pixel(xc + y, yc - x, color);
}

/// Handle the radii the octant walkers cannot. Returns `true` if the caller is done.
fn trivial_radius<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) -> bool {
    if r < 0 {
        debug!("circle at ({xc}, {yc}) has negative radius {r}, nothing drawn");
        return true;
    }
    if r == 0 {
        surface.set_pixel(xc, yc, color);
        return true;
    }
    false
}

/// Direct evaluation: `y = round(sqrt(R² - x²))` at every x step.
pub fn draw_circle_direct<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) {
    if trivial_radius(surface, xc, yc, r, color) {
        return;
    }

    let r2 = f64::from(r) * f64::from(r);
    let (mut x, mut y) = (0, r);
    draw_circle_points(surface, xc, yc, x, y, color);
    while x < y {
        x += 1;
        y = round_half_up((r2 - f64::from(x) * f64::from(x)).sqrt());
        draw_circle_points(surface, xc, yc, x, y, color);
    }
}

/// Polar evaluation: `(R cos θ, R sin θ)` with `Δθ = 1/R`.
pub fn draw_circle_polar<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) {
    if trivial_radius(surface, xc, yc, r, color) {
        return;
    }

    let rf = f64::from(r);
    let dtheta = 1.0 / rf;
    let (mut x, mut y) = (r, 0);
    let mut theta = 0.0_f64;
    draw_circle_points(surface, xc, yc, x, y, color);
    while x > y {
        theta += dtheta;
        x = round_half_up(rf * theta.cos());
        y = round_half_up(rf * theta.sin());
        draw_circle_points(surface, xc, yc, x, y, color);
    }
}

/// Iterative polar: rotate the running vector by a fixed `Δθ = 1/R`.
///
/// `cos Δθ` and `sin Δθ` are computed once; each step applies
/// `x' = x cos Δθ - y sin Δθ`, `y' = x sin Δθ + y cos Δθ` until `x <= y`.
pub fn draw_circle_iterative_polar<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) {
    if trivial_radius(surface, xc, yc, r, color) {
        return;
    }

    let dtheta = 1.0 / f64::from(r);
    let (st, ct) = dtheta.sin_cos();
    let (mut x, mut y) = (f64::from(r), 0.0_f64);
    draw_circle_points(surface, xc, yc, r, 0, color);
    while x > y {
        let x1 = x * ct - y * st;
        y = x * st + y * ct;
        x = x1;
        draw_circle_points(surface, xc, yc, round_half_up(x), round_half_up(y), color);
    }
}

/// Walk the midpoint octant of radius `r` and hand every `(x, y)` to `visit`,
/// starting at `(0, r)`.
pub(crate) fn midpoint_walk(r: i32, mut visit: impl FnMut(i32, i32)) {
    let (mut x, mut y, mut d) = (0, r, 1 - r);
    visit(x, y);
    while x < y {
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
        visit(x, y);
    }
}

/// Midpoint (Bresenham) circle with decision variable `d = 1 - R`.
pub fn draw_circle_midpoint<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) {
    if trivial_radius(surface, xc, yc, r, color) {
        return;
    }
    midpoint_walk(r, |x, y| draw_circle_points(surface, xc, yc, x, y, color));
}

/// Midpoint circle with second-order differences.
///
/// `d1 = 2x + 3` and `d2 = 2(x - y) + 5` are carried along and bumped by
/// constants instead of being recomputed, leaving only additions in the loop.
/// Plots exactly the pixels of [`draw_circle_midpoint`].
pub fn draw_circle_modified_midpoint<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) {
    if trivial_radius(surface, xc, yc, r, color) {
        return;
    }

    let (mut x, mut y, mut d) = (0, r, 1 - r);
    let (mut d1, mut d2) = (3, 5 - 2 * r);
    draw_circle_points(surface, xc, yc, x, y, color);
    while x < y {
        if d < 0 {
            d += d1;
            d2 += 2;
        } else {
            d += d2;
            d2 += 4;
            y -= 1;
        }
        d1 += 2;
        x += 1;
        draw_circle_points(surface, xc, yc, x, y, color);
    }
}
