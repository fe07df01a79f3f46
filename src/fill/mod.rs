//! Region fillers.
//!
//! - **Circle fills**: line sweep, single quadrant, concentric outlines
//! - **Polygon fills**: convex edge table, non-convex active edge list
//! - **Flood fill**: recursive and explicit-stack, 4-connected
//! - **Curve pattern fills**: squares of Hermite curves, rectangles of Bezier curves

mod circle;
mod flood;
mod pattern;
mod polygon;

pub use circle::{fill_circle_concentric, fill_circle_lines, fill_quarter_circle, Quadrant};
pub use flood::{flood_fill, flood_fill_iterative, flood_fill_recursive, flood_fill_with};
pub use pattern::{fill_rectangle_with_bezier, fill_square_with_hermite};
pub use polygon::{
    convex_fill, non_convex_fill, ActiveEdgeList, EdgeNode, EdgeTable, NonConvexEdgeTable, RowSpan,
};
