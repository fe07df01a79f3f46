//! Disc fills built on the midpoint circle walk.

use log::debug;

use crate::render::{draw_circle_midpoint, midpoint_walk};
use crate::surface::Surface;

/// One quadrant of the screen around a center. Screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    /// x right, y up.
    #[default]
    TopRight,
    /// x left, y up.
    TopLeft,
    /// x left, y down.
    BottomLeft,
    /// x right, y down.
    BottomRight,
}

impl Quadrant {
    /// Sign of x and y offsets inside this quadrant.
    #[must_use]
    pub const fn signs(self) -> (i32, i32) {
        match self {
            Self::TopRight => (1, -1),
            Self::TopLeft => (-1, -1),
            Self::BottomLeft => (-1, 1),
            Self::BottomRight => (1, 1),
        }
    }
}

/// Fill a disc with horizontal spans.
///
/// Each octant point `(x, y)` yields the spans `±x` on rows `yc ± y` and
/// `±y` on rows `yc ± x`, which together cover the whole disc.
pub fn fill_circle_lines<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) {
    if r < 0 {
        debug!("circle fill with negative radius {r}, nothing drawn");
        return;
    }

    midpoint_walk(r, |x, y| {
        surface.draw_span(xc - x, xc + x, yc + y, color);
        surface.draw_span(xc - x, xc + x, yc - y, color);
        surface.draw_span(xc - y, xc + y, yc + x, color);
        surface.draw_span(xc - y, xc + y, yc - x, color);
    });
}

/// Fill one quadrant of a disc, center row and column included.
pub fn fill_quarter_circle<S: Surface>(
    surface: &mut S,
    xc: i32,
    yc: i32,
    r: i32,
    quadrant: Quadrant,
    color: S::Color,
) {
    if r < 0 {
        debug!("quarter circle fill with negative radius {r}, nothing drawn");
        return;
    }

    let (sx, sy) = quadrant.signs();
    midpoint_walk(r, |x, y| {
        surface.draw_span(xc, xc + sx * x, yc + sy * y, color);
        surface.draw_span(xc, xc + sx * y, yc + sy * x, color);
    });
}

/// Fill a disc by tracing midpoint circles of every radius from 1 to `r`.
///
/// Touches O(r²) pixels and, since neighbouring midpoint circles do not tile
/// the plane, leaves scattered holes and the center pixel unset. Use
/// [`fill_circle_lines`] for a solid disc.
pub fn fill_circle_concentric<S: Surface>(surface: &mut S, xc: i32, yc: i32, r: i32, color: S::Color) {
    for radius in 1..=r {
        draw_circle_midpoint(surface, xc, yc, radius, color);
    }
}
