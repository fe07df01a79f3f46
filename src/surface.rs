//! The pixel surface every algorithm draws onto.
//!
//! The core never owns a canvas. Each `draw_*`/`fill_*` function takes a
//! `&mut impl Surface` and writes pixels through it; only flood fill reads
//! back. [`Framebuffer`](crate::framebuffer::Framebuffer) is the RGBA
//! implementation, [`PixelRecorder`] captures the exact write sequence.

use std::collections::{BTreeSet, HashMap};

use crate::geometry::GridPoint;

/// An addressable 2D canvas.
///
/// Coordinates are signed: tracers happily produce pixels left of or above the
/// origin, and it is up to the surface to ignore writes it cannot hold.
pub trait Surface {
    /// Pixel value type. Only equality is required.
    type Color: Copy + PartialEq;

    /// Write one pixel. Writes outside the drawable area are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Self::Color);

    /// Read one pixel, `None` outside the drawable area.
    fn get_pixel(&self, x: i32, y: i32) -> Option<Self::Color>;

    /// Write the inclusive horizontal run between `x1` and `x2` on row `y`.
    ///
    /// Endpoint order does not matter.
    fn draw_span(&mut self, x1: i32, x2: i32, y: i32, color: Self::Color) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for x in lo..=hi {
            self.set_pixel(x, y, color);
        }
    }
}

/// A [`Surface`] that remembers every write.
///
/// Reads return the last color written to a pixel, or the background color.
/// An unbounded recorder answers every read, so give it bounds with
/// [`PixelRecorder::bounded`] before flood filling it.
#[derive(Debug, Clone)]
pub struct PixelRecorder<C> {
    writes: Vec<(GridPoint, C)>,
    pixels: HashMap<GridPoint, C>,
    background: C,
    bounds: Option<(i32, i32)>,
}

impl<C: Copy + PartialEq> PixelRecorder<C> {
    /// Create an unbounded recorder reading `background` where nothing was written.
    #[must_use]
    pub fn new(background: C) -> Self {
        Self {
            writes: Vec::new(),
            pixels: HashMap::new(),
            background,
            bounds: None,
        }
    }

    /// Restrict the recorder to `0..width` x `0..height`.
    #[must_use]
    pub fn bounded(mut self, width: i32, height: i32) -> Self {
        self.bounds = Some((width, height));
        self
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        match self.bounds {
            Some((w, h)) => x >= 0 && y >= 0 && x < w && y < h,
            None => true,
        }
    }

    /// Every accepted write, in order, duplicates included.
    #[must_use]
    pub fn writes(&self) -> &[(GridPoint, C)] {
        &self.writes
    }

    /// The distinct pixels written so far.
    #[must_use]
    pub fn points(&self) -> BTreeSet<GridPoint> {
        self.pixels.keys().copied().collect()
    }

    /// The distinct pixels currently holding `color`.
    #[must_use]
    pub fn points_with(&self, color: C) -> BTreeSet<GridPoint> {
        self.pixels
            .iter()
            .filter(|(_, c)| **c == color)
            .map(|(p, _)| *p)
            .collect()
    }

    /// Number of accepted writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// True if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Forget all writes.
    pub fn clear(&mut self) {
        self.writes.clear();
        self.pixels.clear();
    }
}

impl<C: Copy + PartialEq> Surface for PixelRecorder<C> {
    type Color = C;

    fn set_pixel(&mut self, x: i32, y: i32, color: C) {
        if !self.in_bounds(x, y) {
            return;
        }
        let p = GridPoint::new(x, y);
        self.writes.push((p, color));
        self.pixels.insert(p, color);
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<C> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(
            self.pixels
                .get(&GridPoint::new(x, y))
                .copied()
                .unwrap_or(self.background),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order_and_duplicates() {
        let mut rec = PixelRecorder::new(0u8);
        rec.set_pixel(1, 1, 5);
        rec.set_pixel(2, 1, 5);
        rec.set_pixel(1, 1, 7);

        assert_eq!(rec.len(), 3);
        assert_eq!(rec.points().len(), 2);
        assert_eq!(rec.get_pixel(1, 1), Some(7));
        assert_eq!(rec.get_pixel(9, 9), Some(0));
    }

    #[test]
    fn test_recorder_bounds() {
        let mut rec = PixelRecorder::new(0u8).bounded(4, 4);
        rec.set_pixel(-1, 0, 1);
        rec.set_pixel(4, 0, 1);
        rec.set_pixel(3, 3, 1);

        assert_eq!(rec.len(), 1);
        assert_eq!(rec.get_pixel(-1, 0), None);
        assert_eq!(rec.get_pixel(3, 3), Some(1));
    }

    #[test]
    fn test_default_span_either_order() {
        let mut rec = PixelRecorder::new(false);
        rec.draw_span(5, 2, 0, true);

        let xs: Vec<i32> = rec.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_points_with_color() {
        let mut rec = PixelRecorder::new('.');
        rec.set_pixel(0, 0, 'a');
        rec.set_pixel(1, 0, 'b');
        rec.set_pixel(0, 0, 'b');

        assert_eq!(rec.points_with('b').len(), 2);
        assert!(rec.points_with('a').is_empty());
    }
}
