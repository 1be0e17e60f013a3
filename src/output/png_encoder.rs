//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use super::write_atomic;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::path::Path;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or the file write fails. The target
    /// path is left untouched on failure.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let bytes = Self::to_bytes(fb)?;
        write_atomic(path.as_ref(), &bytes)
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, fb.width(), fb.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            // Use compact pixels to handle stride padding
            writer.write_image_data(&fb.to_compact_pixels())?;
        }

        Ok(buffer)
    }
}
