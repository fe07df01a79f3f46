//! Geometric primitives shared by the tracers, fillers and clippers.
//!
//! Pixel-grid primitives (lines, circles, ellipses) use [`GridPoint`].
//! Curves, polygons and clip geometry keep sub-pixel precision in [`Point`]
//! until the final write, where [`round_half_up`] picks the pixel.

use std::ops::{Add, Mul, Sub};

use crate::error::{Error, Result};

/// Round to the nearest integer with halves going up: `floor(v + 0.5)`.
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl GridPoint {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        Point::from(self).distance(Point::from(other))
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point (or vector) with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            (1.0 - t) * self.x + t * other.x,
            (1.0 - t) * self.y + t * other.y,
        )
    }

    /// The pixel this point lands on.
    #[must_use]
    pub fn to_grid(self) -> GridPoint {
        GridPoint::new(round_half_up(self.x), round_half_up(self.y))
    }
}

impl From<GridPoint> for Point {
    fn from(p: GridPoint) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned clip window with inclusive integer edges.
///
/// `top` is the smaller y value (screen coordinates grow downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipRect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl ClipRect {
    /// Create a clip window from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A square window whose top-left corner is `(left, top)`.
    #[must_use]
    pub const fn square(left: i32, top: i32, size: i32) -> Self {
        Self::new(left, top, left + size, top + size)
    }

    /// Check if a pixel lies inside the window (edges included).
    #[must_use]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// A closed polygon with at least three vertices.
///
/// Convexity is never computed; pick the filler that matches the shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Point>", into = "Vec<Point>"))]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from its vertices (the closing edge is implicit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] with fewer than three vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        Error::check_points(3, vertices.len())?;
        Ok(Self { vertices })
    }

    /// Build a polygon from integer vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] with fewer than three vertices.
    pub fn from_grid(vertices: &[GridPoint]) -> Result<Self> {
        Self::new(vertices.iter().copied().map(Point::from).collect())
    }

    /// The vertex list.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edges as `(from, to)` pairs, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        polygon_edges(&self.vertices)
    }

    /// Smallest and largest y coordinate.
    #[must_use]
    pub fn y_extent(&self) -> (f64, f64) {
        y_extent(&self.vertices).unwrap_or((0.0, 0.0))
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(vertices: Vec<Point>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// Edges of a closed vertex loop, starting with the closing edge `last -> first`.
pub(crate) fn polygon_edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let closing = vertices.last().copied();
    closing
        .into_iter()
        .chain(vertices.iter().copied())
        .zip(vertices.iter().copied())
}

/// Smallest and largest y over a vertex list, `None` when empty.
pub(crate) fn y_extent(vertices: &[Point]) -> Option<(f64, f64)> {
    vertices.iter().fold(None, |acc, p| match acc {
        None => Some((p.y, p.y)),
        Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
    })
}
