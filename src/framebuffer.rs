//! RGBA framebuffer, the default pixel surface.
//!
//! Rows are padded to a 64-byte stride; use [`Framebuffer::to_compact_pixels`]
//! when a tightly-packed buffer is needed.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::surface::Surface;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use scanline_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.fill_rect(0, 0, self.width, self.height, color);
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let [r, g, b, a] = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk[0] = r;
                chunk[1] = g;
                chunk[2] = b;
                chunk[3] = a;
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Count the pixels currently holding `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let target = color.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|chunk| *chunk == target)
            .count()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is useful for encoding to formats like PNG that expect
    /// tightly-packed pixel data.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }
}

impl Surface for Framebuffer {
    type Color = Rgba;

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x >= 0 && y >= 0 {
            Framebuffer::set_pixel(self, x as u32, y as u32, color);
        }
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 {
            return None;
        }
        Framebuffer::get_pixel(self, x as u32, y as u32)
    }

    fn draw_span(&mut self, x1: i32, x2: i32, y: i32, color: Rgba) {
        if y < 0 || y >= self.height as i32 {
            return;
        }

        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let x_start = lo.max(0) as u32;
        let x_end = hi.saturating_add(1).clamp(0, self.width as i32) as u32;

        if x_start < x_end {
            self.fill_rect(x_start, y as u32, x_end - x_start, 1, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert!(fb.stride() >= 400);
        assert_eq!(fb.stride() % ROW_ALIGNMENT, 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
        assert_eq!(fb.count_pixels(Rgba::RED), 100);
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(15, 15, 100, 100, Rgba::RED);

        assert_eq!(fb.count_pixels(Rgba::RED), 25);
        assert_eq!(fb.get_pixel(14, 14), Some(Rgba::WHITE));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_surface_negative_coordinates_ignored() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        Surface::set_pixel(&mut fb, -1, 3, Rgba::RED);
        assert_eq!(Surface::get_pixel(&fb, -1, 3), None);
        assert_eq!(fb.count_pixels(Rgba::RED), 0);
    }

    #[test]
    fn test_draw_span_clipped_to_width() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        fb.draw_span(12, -5, 4, Rgba::GREEN);
        assert_eq!(fb.count_pixels(Rgba::GREEN), 10);

        fb.draw_span(0, 9, 10, Rgba::RED);
        fb.draw_span(0, 9, -1, Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 0);
    }

    #[test]
    fn test_compact_pixels_drop_padding() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::BLACK);

        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert!(compact.chunks_exact(4).all(|c| c == [0, 0, 0, 255]));
    }
}
