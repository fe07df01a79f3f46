//! Error types for scanline-raster operations.
//!
//! The rasterizers themselves never fail: degenerate input produces no pixels.
//! These errors come from the validating constructors and the checked
//! edge-table API, for callers that want to reject bad geometry up front.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scanline-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Fewer points than the primitive needs.
    #[error("Degenerate input: need at least {required} points, got {actual}")]
    DegenerateInput {
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// A computation would divide by a zero delta.
    #[error("Zero step: {0}")]
    ZeroStep(&'static str),

    /// A scanline row falls outside the edge table.
    #[error("Row {row} outside edge table rows {first}..={last}")]
    OutOfRangeRow {
        /// Offending row.
        row: i32,
        /// First row held by the table.
        first: i32,
        /// Last row held by the table.
        last: i32,
    },
}

impl Error {
    /// Build a [`Error::DegenerateInput`] if `actual < required`.
    pub(crate) fn check_points(required: usize, actual: usize) -> Result<()> {
        if actual < required {
            return Err(Error::DegenerateInput { required, actual });
        }
        Ok(())
    }
}
