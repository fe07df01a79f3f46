//! Closed outlines assembled from Bresenham lines.

use log::debug;

use crate::geometry::GridPoint;
use crate::surface::Surface;

use super::line::draw_line_bresenham;

/// Draw the closed outline through `vertices`, wrapping from the last vertex to the first.
///
/// Fewer than three vertices draws nothing.
pub fn draw_polygon<S: Surface>(surface: &mut S, vertices: &[GridPoint], color: S::Color) {
    if vertices.len() < 3 {
        debug!("polygon outline with {} vertices, nothing drawn", vertices.len());
        return;
    }

    for pair in vertices.windows(2) {
        draw_line_bresenham(surface, pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
    }
    if let (Some(last), Some(first)) = (vertices.last(), vertices.first()) {
        draw_line_bresenham(surface, last.x, last.y, first.x, first.y, color);
    }
}

fn draw_box<S: Surface>(surface: &mut S, left: i32, top: i32, right: i32, bottom: i32, color: S::Color) {
    draw_line_bresenham(surface, left, top, right, top, color);
    draw_line_bresenham(surface, right, top, right, bottom, color);
    draw_line_bresenham(surface, right, bottom, left, bottom, color);
    draw_line_bresenham(surface, left, bottom, left, top, color);
}

/// Draw an axis-aligned square of side `2 * half_size` centred on `center`.
pub fn draw_square<S: Surface>(surface: &mut S, center: GridPoint, half_size: i32, color: S::Color) {
    let h = half_size.abs();
    draw_box(surface, center.x - h, center.y - h, center.x + h, center.y + h, color);
}

/// Draw an axis-aligned rectangle centred on `center` with `vertex` on one corner.
///
/// The half extents are `|vertex - center|` on each axis, so any of the four
/// corners describes the same rectangle.
pub fn draw_rectangle<S: Surface>(surface: &mut S, center: GridPoint, vertex: GridPoint, color: S::Color) {
    let hw = (vertex.x - center.x).abs();
    let hh = (vertex.y - center.y).abs();
    draw_box(surface, center.x - hw, center.y - hh, center.x + hw, center.y + hh, color);
}
