//! # scanline-raster
//!
//! Scan conversion, region fill and clipping for 2D pixel surfaces.
//!
//! Every algorithm takes a `&mut impl Surface` and writes pixels through it,
//! so the same code draws into the bundled RGBA [`Framebuffer`](framebuffer::Framebuffer),
//! into a [`PixelRecorder`](surface::PixelRecorder) for inspection, or into a
//! host's own canvas.
//!
//! ## Features
//!
//! - **Lines**: DDA, Bresenham, parametric
//! - **Circles and ellipses**: direct, polar, iterative polar, midpoint, modified midpoint
//! - **Curves**: de Casteljau Bezier, adaptive Hermite, cardinal splines
//! - **Fills**: circle sweeps, convex edge table, non-convex active edge list, flood fill
//! - **Clipping**: Cohen-Sutherland, Sutherland-Hodgman, circle windows
//!
//! ## Quick Start
//!
//! ```rust
//! use scanline_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! fb.clear(Rgba::WHITE);
//!
//! draw_circle_midpoint(&mut fb, 32, 32, 20, Rgba::BLACK);
//! flood_fill(&mut fb, GridPoint::new(32, 32), Rgba::BLUE, Rgba::WHITE);
//!
//! assert_eq!(fb.get_pixel(32, 32), Some(Rgba::BLUE));
//! # Ok::<(), scanline_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for configs, geometry and shape records
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Sutherland, I. E., & Hodgman, G. W. (1974). "Reentrant Polygon Clipping." CACM.
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Pixel math converts between i32, usize and f64 constantly
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA color type.
pub mod color;

/// Tracer and filler settings.
pub mod config;

/// RGBA framebuffer surface.
pub mod framebuffer;

/// Points, clip windows and polygons.
pub mod geometry;

/// The pixel surface abstraction.
pub mod surface;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Outline rasterization (lines, circles, ellipses, curves).
pub mod render;

/// Region fillers.
pub mod fill;

/// Point, line and polygon clipping.
pub mod clip;

/// Shape records and draw dispatch.
pub mod shape;

// ============================================================================
// Output
// ============================================================================

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for scanline-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use scanline_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip_line_circle, clip_point_circle, cohen_sutherland, sutherland_hodgman};
    pub use crate::color::Rgba;
    pub use crate::config::{CurveConfig, FloodStrategy};
    pub use crate::error::{Error, Result};
    pub use crate::fill::{
        convex_fill, fill_circle_concentric, fill_circle_lines, fill_quarter_circle, flood_fill,
        flood_fill_with, non_convex_fill, Quadrant,
    };
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipRect, GridPoint, Point, Polygon};
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        draw_bezier, draw_cardinal_spline, draw_circle_midpoint, draw_ellipse_midpoint, draw_hermite,
        draw_line_bresenham, draw_line_dda, draw_polygon, HermiteSegment,
    };
    pub use crate::shape::{FillStyle, Shape, ShapeKind};
    pub use crate::surface::{PixelRecorder, Surface};
}
