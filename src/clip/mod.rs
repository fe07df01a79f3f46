//! Point, line and polygon clipping.
//!
//! Rectangular windows use Cohen-Sutherland for lines and Sutherland-Hodgman
//! for polygons; circular windows use squared-distance tests and a quadratic
//! solve. Clippers return new geometry and never touch a surface.

mod circle;
mod rect;

pub use circle::{clip_line_circle, clip_point_circle};
pub use rect::{
    clip_line_square, clip_point_rect, clip_point_square, cohen_sutherland, sutherland_hodgman, Outcode,
};
