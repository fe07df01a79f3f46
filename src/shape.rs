//! Shape records and the draw dispatcher.
//!
//! A host that keeps a list of shapes (say, an editor replaying its document)
//! hands each [`Shape`] to [`Shape::draw`], which runs the outline tracer for
//! the shape's [`ShapeKind`] and then its [`FillStyle`]. Encoding the records
//! for storage is left to the host.

use log::debug;

use crate::config::{CurveConfig, FloodStrategy};
use crate::error::{Error, Result};
use crate::fill::{
    fill_circle_concentric, fill_circle_lines, fill_quarter_circle, fill_rectangle_with_bezier,
    fill_square_with_hermite, flood_fill_with, Quadrant,
};
use crate::geometry::{GridPoint, Point, Polygon};
use crate::render::{
    draw_bezier, draw_cardinal_spline, draw_circle_direct, draw_circle_iterative_polar,
    draw_circle_midpoint, draw_circle_modified_midpoint, draw_circle_polar, draw_ellipse_direct,
    draw_ellipse_midpoint, draw_ellipse_polar, draw_hermite_with, draw_line_bresenham,
    draw_line_dda, draw_line_parametric, draw_polygon, draw_rectangle, draw_square,
    HermiteSegment,
};
use crate::surface::Surface;

/// Which tracer draws a shape's outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// DDA line between two points.
    LineDda,
    /// Bresenham line between two points.
    LineBresenham,
    /// Parametric line between two points.
    LineParametric,
    /// Direct circle: center, then a point on the circle.
    CircleDirect,
    /// Polar circle.
    CirclePolar,
    /// Iterative polar circle.
    CircleIterativePolar,
    /// Midpoint circle.
    CircleMidpoint,
    /// Modified midpoint circle.
    CircleModifiedMidpoint,
    /// Direct ellipse: center, then a point giving `|dx|, |dy|` as radii.
    EllipseDirect,
    /// Polar ellipse.
    EllipsePolar,
    /// Midpoint ellipse.
    EllipseMidpoint,
    /// Closed polygon through all points.
    Polygon,
    /// Square: center, then a point whose distance is the half size.
    Square,
    /// Rectangle: center, then a corner.
    Rectangle,
    /// Cardinal spline through all points.
    CardinalSpline,
    /// Bezier curve with all points as control points.
    Bezier,
    /// Hermite segments from a flattened `P0, T0, P1, T1, ...` list.
    Hermite,
}

impl ShapeKind {
    /// Fewest points a shape of this kind needs.
    #[must_use]
    pub const fn min_points(self) -> usize {
        match self {
            Self::Polygon => 3,
            Self::Hermite => 4,
            _ => 2,
        }
    }

    /// True for kinds that enclose a region a flood fill can start inside.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(
            self,
            Self::CircleDirect
                | Self::CirclePolar
                | Self::CircleIterativePolar
                | Self::CircleMidpoint
                | Self::CircleModifiedMidpoint
                | Self::EllipseDirect
                | Self::EllipsePolar
                | Self::EllipseMidpoint
                | Self::Polygon
                | Self::Square
                | Self::Rectangle
        )
    }

    /// True for the five circle tracers.
    #[must_use]
    pub const fn is_circle(self) -> bool {
        matches!(
            self,
            Self::CircleDirect
                | Self::CirclePolar
                | Self::CircleIterativePolar
                | Self::CircleMidpoint
                | Self::CircleModifiedMidpoint
        )
    }
}

/// How a shape's interior is filled after its outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    /// Outline only.
    #[default]
    None,
    /// Circles: horizontal spans.
    CircleLines,
    /// Circles: one quadrant of horizontal spans.
    CircleQuarter(Quadrant),
    /// Circles: concentric outlines.
    CircleConcentric,
    /// Polygons: edge-table fill.
    Convex,
    /// Polygons: active-edge-list fill.
    NonConvex,
    /// Closed shapes: flood fill from the center (vertex centroid for polygons).
    Flood(FloodStrategy),
    /// Squares: vertical Hermite curves.
    SquareHermite,
    /// Rectangles: horizontal Bezier curves.
    RectangleBezier,
}

/// One drawable shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape<C> {
    /// Outline tracer.
    pub kind: ShapeKind,
    /// Outline and fill color.
    pub color: C,
    /// Interior fill.
    pub fill: FillStyle,
    /// Defining points; their meaning depends on `kind`.
    pub points: Vec<GridPoint>,
}

impl<C: Copy + PartialEq> Shape<C> {
    /// Create an unfilled shape.
    #[must_use]
    pub fn new(kind: ShapeKind, color: C, points: Vec<GridPoint>) -> Self {
        Self {
            kind,
            color,
            fill: FillStyle::None,
            points,
        }
    }

    /// Set the fill style.
    #[must_use]
    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    /// Distance from the first point to the second, truncated.
    fn radius(&self) -> i32 {
        self.points[0].distance(self.points[1]) as i32
    }

    fn float_points(&self) -> Vec<Point> {
        self.points.iter().copied().map(Point::from).collect()
    }

    /// Draw the outline, then the fill.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if the shape has too few points for
    /// its kind (or a Hermite list that is not a multiple of four), and
    /// [`Error::ZeroStep`] for a curve `config` that would take no steps.
    /// Nothing is drawn in either case.
    pub fn draw<S: Surface<Color = C>>(&self, surface: &mut S, config: &CurveConfig) -> Result<()> {
        Error::check_points(self.kind.min_points(), self.points.len())?;
        self.draw_outline(surface, config)?;
        self.draw_fill(surface)
    }

    fn draw_outline<S: Surface<Color = C>>(&self, surface: &mut S, config: &CurveConfig) -> Result<()> {
        let (p0, p1) = (self.points[0], self.points[1]);
        let color = self.color;

        match self.kind {
            ShapeKind::LineDda => draw_line_dda(surface, p0.x, p0.y, p1.x, p1.y, color),
            ShapeKind::LineBresenham => draw_line_bresenham(surface, p0.x, p0.y, p1.x, p1.y, color),
            ShapeKind::LineParametric => draw_line_parametric(surface, p0.x, p0.y, p1.x, p1.y, color),
            ShapeKind::CircleDirect => draw_circle_direct(surface, p0.x, p0.y, self.radius(), color),
            ShapeKind::CirclePolar => draw_circle_polar(surface, p0.x, p0.y, self.radius(), color),
            ShapeKind::CircleIterativePolar => {
                draw_circle_iterative_polar(surface, p0.x, p0.y, self.radius(), color);
            }
            ShapeKind::CircleMidpoint => draw_circle_midpoint(surface, p0.x, p0.y, self.radius(), color),
            ShapeKind::CircleModifiedMidpoint => {
                draw_circle_modified_midpoint(surface, p0.x, p0.y, self.radius(), color);
            }
            ShapeKind::EllipseDirect => {
                let (a, b) = ellipse_radii(p0, p1);
                draw_ellipse_direct(surface, p0.x, p0.y, a, b, color);
            }
            ShapeKind::EllipsePolar => {
                let (a, b) = ellipse_radii(p0, p1);
                draw_ellipse_polar(surface, p0.x, p0.y, a, b, color);
            }
            ShapeKind::EllipseMidpoint => {
                let (a, b) = ellipse_radii(p0, p1);
                draw_ellipse_midpoint(surface, p0.x, p0.y, a, b, color);
            }
            ShapeKind::Polygon => draw_polygon(surface, &self.points, color),
            ShapeKind::Square => draw_square(surface, p0, self.radius(), color),
            ShapeKind::Rectangle => draw_rectangle(surface, p0, p1, color),
            ShapeKind::CardinalSpline => {
                config.validate()?;
                draw_cardinal_spline(surface, &self.float_points(), config, color);
            }
            ShapeKind::Bezier => {
                config.validate()?;
                draw_bezier(surface, &self.float_points(), config.bezier_steps, color);
            }
            ShapeKind::Hermite => {
                config.validate()?;
                for segment in HermiteSegment::from_flattened(&self.float_points())? {
                    draw_hermite_with(surface, &segment, config.hermite_points, config, color);
                }
            }
        }
        Ok(())
    }

    fn draw_fill<S: Surface<Color = C>>(&self, surface: &mut S) -> Result<()> {
        let center = self.points[0];
        let color = self.color;

        match (self.fill, self.kind) {
            (FillStyle::None, _) => {}
            (FillStyle::CircleLines, k) if k.is_circle() => {
                fill_circle_lines(surface, center.x, center.y, self.radius(), color);
            }
            (FillStyle::CircleQuarter(q), k) if k.is_circle() => {
                fill_quarter_circle(surface, center.x, center.y, self.radius(), q, color);
            }
            (FillStyle::CircleConcentric, k) if k.is_circle() => {
                fill_circle_concentric(surface, center.x, center.y, self.radius(), color);
            }
            (FillStyle::Convex, ShapeKind::Polygon) => {
                Polygon::from_grid(&self.points)?.fill_convex(surface, color);
            }
            (FillStyle::NonConvex, ShapeKind::Polygon) => {
                Polygon::from_grid(&self.points)?.fill_non_convex(surface, color);
            }
            (FillStyle::Flood(strategy), k) if k.is_closed() => {
                flood_fill_with(surface, self.seed(), color, strategy);
            }
            (FillStyle::SquareHermite, ShapeKind::Square) => {
                fill_square_with_hermite(surface, center, self.radius(), color);
            }
            (FillStyle::RectangleBezier, ShapeKind::Rectangle) => {
                fill_rectangle_with_bezier(surface, center, self.points[1], color);
            }
            (fill, kind) => debug!("{fill:?} does not apply to {kind:?}, outline only"),
        }
        Ok(())
    }

    /// Flood seed: the vertex centroid for polygons, the first point otherwise.
    fn seed(&self) -> GridPoint {
        if self.kind != ShapeKind::Polygon {
            return self.points[0];
        }
        let n = self.points.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(Point::ORIGIN, |acc, p| acc + Point::from(*p));
        Point::new(sum.x / n, sum.y / n).to_grid()
    }
}

fn ellipse_radii(center: GridPoint, p: GridPoint) -> (i32, i32) {
    ((p.x - center.x).abs(), (p.y - center.y).abs())
}

/// Shorthand for `Shape::new(ShapeKind::Polygon, ..)` with a fill.
#[must_use]
pub fn filled_polygon<C: Copy + PartialEq>(color: C, vertices: Vec<GridPoint>, fill: FillStyle) -> Shape<C> {
    Shape::new(ShapeKind::Polygon, color, vertices).with_fill(fill)
}
