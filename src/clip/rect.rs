//! Clipping against axis-aligned windows.

use bitflags::bitflags;
use log::trace;

use crate::geometry::{round_half_up, ClipRect, GridPoint, Point};

/// Cohen-Sutherland converges in one pass per window edge; anything past
/// that means non-converging input.
const MAX_CLIP_PASSES: usize = 8;

bitflags! {
    /// Which half-planes of a [`ClipRect`] a point lies outside of.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Outcode: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl Outcode {
    /// Outcode of `p` against `rect`. Edges count as inside.
    #[must_use]
    pub fn of(p: GridPoint, rect: &ClipRect) -> Self {
        let mut code = Self::empty();
        if p.x < rect.left {
            code |= Self::LEFT;
        } else if p.x > rect.right {
            code |= Self::RIGHT;
        }
        if p.y < rect.top {
            code |= Self::TOP;
        } else if p.y > rect.bottom {
            code |= Self::BOTTOM;
        }
        code
    }
}

/// True if `p` lies inside `rect`, edges included.
#[must_use]
pub fn clip_point_rect(p: GridPoint, rect: &ClipRect) -> bool {
    rect.contains(p)
}

/// True if `p` lies inside the square with top-left corner `(left, top)` and side `size`.
#[must_use]
pub fn clip_point_square(p: GridPoint, left: i32, top: i32, size: i32) -> bool {
    clip_point_rect(p, &ClipRect::square(left, top, size))
}

/// Where the segment `p1 -> p2` crosses the vertical line `x = edge`.
fn vertical_intersect(p1: GridPoint, p2: GridPoint, edge: i32) -> Option<GridPoint> {
    let dx = p2.x - p1.x;
    if dx == 0 {
        return None;
    }
    let t = f64::from(edge - p1.x) / f64::from(dx);
    let y = f64::from(p1.y) + t * f64::from(p2.y - p1.y);
    Some(GridPoint::new(edge, round_half_up(y)))
}

/// Where the segment `p1 -> p2` crosses the horizontal line `y = edge`.
fn horizontal_intersect(p1: GridPoint, p2: GridPoint, edge: i32) -> Option<GridPoint> {
    let dy = p2.y - p1.y;
    if dy == 0 {
        return None;
    }
    let t = f64::from(edge - p1.y) / f64::from(dy);
    let x = f64::from(p1.x) + t * f64::from(p2.x - p1.x);
    Some(GridPoint::new(round_half_up(x), edge))
}

/// Cohen-Sutherland line clipping.
///
/// Returns the visible part of `p1 -> p2`, or `None` when nothing of the
/// segment lies inside `rect`. A segment already inside comes back unchanged.
#[must_use]
pub fn cohen_sutherland(p1: GridPoint, p2: GridPoint, rect: &ClipRect) -> Option<(GridPoint, GridPoint)> {
    let (mut p1, mut p2) = (p1, p2);
    let mut code1 = Outcode::of(p1, rect);
    let mut code2 = Outcode::of(p2, rect);

    for _ in 0..MAX_CLIP_PASSES {
        if code1.is_empty() && code2.is_empty() {
            return Some((p1, p2));
        }
        if code1.intersects(code2) {
            return None;
        }

        let outside = if code1.is_empty() { code2 } else { code1 };
        let clipped = if outside.contains(Outcode::LEFT) {
            vertical_intersect(p1, p2, rect.left)
        } else if outside.contains(Outcode::RIGHT) {
            vertical_intersect(p1, p2, rect.right)
        } else if outside.contains(Outcode::TOP) {
            horizontal_intersect(p1, p2, rect.top)
        } else {
            horizontal_intersect(p1, p2, rect.bottom)
        }?;

        if code1.is_empty() {
            p2 = clipped;
            code2 = Outcode::of(p2, rect);
        } else {
            p1 = clipped;
            code1 = Outcode::of(p1, rect);
        }
    }

    trace!("line clip did not converge, rejecting");
    None
}

/// Cohen-Sutherland against the square with top-left corner `(left, top)` and side `size`.
#[must_use]
pub fn clip_line_square(
    p1: GridPoint,
    p2: GridPoint,
    left: i32,
    top: i32,
    size: i32,
) -> Option<(GridPoint, GridPoint)> {
    cohen_sutherland(p1, p2, &ClipRect::square(left, top, size))
}

/// One window edge as seen by Sutherland-Hodgman.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Boundary {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl Boundary {
    fn inside(self, p: Point) -> bool {
        match self {
            Self::Left(x) => p.x >= x,
            Self::Right(x) => p.x <= x,
            Self::Bottom(y) => p.y <= y,
            Self::Top(y) => p.y >= y,
        }
    }

    /// Crossing of `v1 -> v2` with this edge. Only called when exactly one of
    /// the two is inside, so the edge is never parallel to the boundary.
    fn intersect(self, v1: Point, v2: Point) -> Point {
        match self {
            Self::Left(x) | Self::Right(x) => {
                let y = v1.y + (x - v1.x) * (v2.y - v1.y) / (v2.x - v1.x);
                Point::new(x, y)
            }
            Self::Bottom(y) | Self::Top(y) => {
                let x = v1.x + (y - v1.y) * (v2.x - v1.x) / (v2.y - v1.y);
                Point::new(x, y)
            }
        }
    }

    /// Clip a closed vertex loop against this edge.
    fn clip(self, polygon: &[Point]) -> Vec<Point> {
        let Some(&last) = polygon.last() else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(polygon.len() + 2);
        let mut v1 = last;
        let mut in1 = self.inside(v1);
        for &v2 in polygon {
            let in2 = self.inside(v2);
            match (in1, in2) {
                (true, true) => out.push(v2),
                (true, false) => out.push(self.intersect(v1, v2)),
                (false, true) => {
                    out.push(self.intersect(v1, v2));
                    out.push(v2);
                }
                (false, false) => {}
            }
            v1 = v2;
            in1 = in2;
        }
        out
    }
}

/// Sutherland-Hodgman polygon clipping.
///
/// Clips the closed loop `polygon` against the left, right, bottom and top
/// edges of `rect` in that order, each stage feeding the next. Returns the
/// clipped vertex loop, empty when nothing remains.
#[must_use]
pub fn sutherland_hodgman(polygon: &[Point], rect: &ClipRect) -> Vec<Point> {
    let stages = [
        Boundary::Left(f64::from(rect.left)),
        Boundary::Right(f64::from(rect.right)),
        Boundary::Bottom(f64::from(rect.bottom)),
        Boundary::Top(f64::from(rect.top)),
    ];

    let clipped = stages
        .iter()
        .fold(polygon.to_vec(), |vertices, stage| stage.clip(&vertices));
    trace!(
        "polygon clip: {} vertices in, {} out",
        polygon.len(),
        clipped.len()
    );
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn g(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    const WINDOW: ClipRect = ClipRect::new(10, 10, 50, 40);

    #[test]
    fn test_outcodes() {
        assert_eq!(Outcode::of(g(20, 20), &WINDOW), Outcode::empty());
        assert_eq!(Outcode::of(g(5, 20), &WINDOW), Outcode::LEFT);
        assert_eq!(Outcode::of(g(60, 5), &WINDOW), Outcode::RIGHT | Outcode::TOP);
        assert_eq!(Outcode::of(g(0, 45), &WINDOW), Outcode::LEFT | Outcode::BOTTOM);
        assert_eq!(Outcode::of(g(50, 40), &WINDOW), Outcode::empty());
    }

    #[test]
    fn test_point_clips() {
        assert!(clip_point_rect(g(10, 40), &WINDOW));
        assert!(!clip_point_rect(g(9, 40), &WINDOW));
        assert!(clip_point_square(g(3, 7), 0, 5, 5));
        assert!(!clip_point_square(g(3, 4), 0, 5, 5));
    }

    #[test]
    fn test_inside_line_unchanged() {
        assert_eq!(cohen_sutherland(g(12, 15), g(48, 39), &WINDOW), Some((g(12, 15), g(48, 39))));
    }

    #[test]
    fn test_outside_line_rejected() {
        // Both endpoints above the window.
        assert_eq!(cohen_sutherland(g(0, 0), g(60, 5), &WINDOW), None);
        // Both to the right.
        assert_eq!(cohen_sutherland(g(55, 0), g(70, 60), &WINDOW), None);
    }

    #[test]
    fn test_crossing_line_clipped_to_edges() {
        let (a, b) = cohen_sutherland(g(0, 20), g(60, 20), &WINDOW).unwrap();
        assert_eq!((a, b), (g(10, 20), g(50, 20)));

        let (a, b) = cohen_sutherland(g(30, 0), g(30, 100), &WINDOW).unwrap();
        assert_eq!((a, b), (g(30, 10), g(30, 40)));
    }

    #[test]
    fn test_diagonal_clip_lands_on_boundary() {
        let (a, b) = cohen_sutherland(g(0, 0), g(60, 60), &WINDOW).unwrap();
        assert_eq!(a, g(10, 10));
        assert_eq!(b, g(40, 40));
    }

    #[test]
    fn test_line_missing_corner_rejected() {
        // Outcodes share no bit but the segment passes outside the top-left corner.
        assert_eq!(cohen_sutherland(g(0, 15), g(15, 0), &WINDOW), None);
    }

    #[test]
    fn test_clip_line_square() {
        let clipped = clip_line_square(g(-5, 5), g(20, 5), 0, 0, 10);
        assert_eq!(clipped, Some((g(0, 5), g(10, 5))));
    }

    #[test]
    fn test_sutherland_hodgman_inside_unchanged() {
        let tri = vec![Point::new(20.0, 20.0), Point::new(40.0, 20.0), Point::new(30.0, 35.0)];
        assert_eq!(sutherland_hodgman(&tri, &WINDOW), tri);
    }

    #[test]
    fn test_sutherland_hodgman_clips_square_overhang() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(0.0, 30.0),
        ];
        let out = sutherland_hodgman(&square, &WINDOW);

        assert_eq!(out.len(), 4);
        for p in &out {
            assert!(p.x >= 10.0 && p.x <= 30.0 && p.y >= 10.0 && p.y <= 30.0, "{p:?}");
        }
        let area: f64 = out
            .iter()
            .zip(out.iter().cycle().skip(1))
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0;
        assert_relative_eq!(area.abs(), 400.0);
    }

    #[test]
    fn test_sutherland_hodgman_fully_outside() {
        let tri = [Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(0.0, 5.0)];
        assert!(sutherland_hodgman(&tri, &WINDOW).is_empty());
        assert!(sutherland_hodgman(&[], &WINDOW).is_empty());
    }

    #[test]
    fn test_boundary_holds_fractional_edges() {
        let edge = Boundary::Left(10.5);
        assert_eq!(edge, Boundary::Left(10.5));
        assert_ne!(edge, Boundary::Right(10.5));
        assert_ne!(Boundary::Top(f64::NAN), Boundary::Top(f64::NAN));

        assert!(edge.inside(Point::new(10.5, 0.0)));
        assert!(!edge.inside(Point::new(10.25, 0.0)));
        let hit = edge.intersect(Point::new(0.0, 0.0), Point::new(21.0, 42.0));
        assert_relative_eq!(hit.x, 10.5);
        assert_relative_eq!(hit.y, 21.0);
    }
}
