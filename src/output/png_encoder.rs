//! PNG output for framebuffers.
//!
//! Pure Rust encoding through the `png` crate, RGBA8 with no stride padding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// Writes a [`Framebuffer`] as a PNG image.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode into any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or the underlying write fails.
    pub fn write_to<W: Write>(fb: &Framebuffer, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }

    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::write_to(fb, BufWriter::new(file))?;
        debug!("wrote {}x{} PNG to {}", fb.width(), fb.height(), path.display());
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write_to(fb, &mut buffer)?;
        Ok(buffer)
    }
}
