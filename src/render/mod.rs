//! Outline rasterization.
//!
//! Converts lines, circles, ellipses and parametric curves into pixel writes
//! on any [`Surface`](crate::surface::Surface).
//!
//! # Algorithms
//!
//! - **Lines**: DDA, Bresenham (midpoint) and parametric
//! - **Circles**: direct, polar, iterative polar, midpoint and modified midpoint
//! - **Ellipses**: direct, polar and two-region midpoint
//! - **Curves**: de Casteljau Bezier, cubic Hermite, cardinal spline
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

mod circle;
mod curve;
mod ellipse;
mod line;
mod outline;

pub use circle::{
    draw_circle_direct, draw_circle_iterative_polar, draw_circle_midpoint,
    draw_circle_modified_midpoint, draw_circle_points, draw_circle_polar,
};
pub(crate) use circle::midpoint_walk;
pub use curve::{
    bezier_point, cardinal_tangents, de_casteljau, draw_bezier, draw_cardinal_spline,
    draw_hermite, draw_hermite_path, draw_hermite_with, evaluate_cubic, hermite_coefficients,
    validate_control_points, HermiteSegment,
};
pub use ellipse::{draw_ellipse_direct, draw_ellipse_midpoint, draw_ellipse_points, draw_ellipse_polar};
pub use line::{draw_horizontal_line, draw_line_bresenham, draw_line_dda, draw_line_parametric};
pub use outline::{draw_polygon, draw_rectangle, draw_square};
