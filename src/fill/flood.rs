//! 4-connected flood fill.
//!
//! A pixel is filled iff it currently reads `original` and `original != fill`.
//! The second condition is what stops the walk from revisiting pixels it has
//! already filled when the two colors coincide.

use log::{debug, trace};

use crate::config::FloodStrategy;
use crate::geometry::GridPoint;
use crate::surface::Surface;

#[inline]
fn should_fill<S: Surface>(surface: &S, x: i32, y: i32, fill: S::Color, original: S::Color) -> bool {
    matches!(surface.get_pixel(x, y), Some(c) if c == original && c != fill)
}

/// Flood fill by direct recursion on the four neighbours.
///
/// Recursion depth grows with the size of the region and a large region will
/// overflow the thread stack. Prefer [`flood_fill`].
pub fn flood_fill_recursive<S: Surface>(surface: &mut S, x: i32, y: i32, fill: S::Color, original: S::Color) {
    if !should_fill(surface, x, y, fill, original) {
        return;
    }
    surface.set_pixel(x, y, fill);

    flood_fill_recursive(surface, x + 1, y, fill, original);
    flood_fill_recursive(surface, x - 1, y, fill, original);
    flood_fill_recursive(surface, x, y + 1, fill, original);
    flood_fill_recursive(surface, x, y - 1, fill, original);
}

/// Flood fill with an explicit stack of pending pixels.
///
/// Fills the same pixels as [`flood_fill_recursive`] without growing the call
/// stack. Returns the number of pixels written.
pub fn flood_fill_iterative<S: Surface>(
    surface: &mut S,
    x: i32,
    y: i32,
    fill: S::Color,
    original: S::Color,
) -> usize {
    let mut stack = vec![GridPoint::new(x, y)];
    let mut filled = 0;

    while let Some(p) = stack.pop() {
        if !should_fill(surface, p.x, p.y, fill, original) {
            continue;
        }
        surface.set_pixel(p.x, p.y, fill);
        filled += 1;

        stack.push(GridPoint::new(p.x + 1, p.y));
        stack.push(GridPoint::new(p.x - 1, p.y));
        stack.push(GridPoint::new(p.x, p.y + 1));
        stack.push(GridPoint::new(p.x, p.y - 1));
    }

    trace!("flood fill from ({x}, {y}) wrote {filled} pixels");
    filled
}

/// Flood fill from `seed` with the iterative implementation.
pub fn flood_fill<S: Surface>(surface: &mut S, seed: GridPoint, fill: S::Color, original: S::Color) {
    flood_fill_iterative(surface, seed.x, seed.y, fill, original);
}

/// Flood fill from `seed`, replacing whatever color the seed currently holds.
///
/// Does nothing if the seed lies off the surface.
pub fn flood_fill_with<S: Surface>(surface: &mut S, seed: GridPoint, fill: S::Color, strategy: FloodStrategy) {
    let Some(original) = surface.get_pixel(seed.x, seed.y) else {
        debug!("flood fill seed {seed:?} is off the surface");
        return;
    };

    match strategy {
        FloodStrategy::Recursive => flood_fill_recursive(surface, seed.x, seed.y, fill, original),
        FloodStrategy::Iterative => {
            flood_fill_iterative(surface, seed.x, seed.y, fill, original);
        }
    }
}
