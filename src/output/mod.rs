//! Output encoders (PNG, SVG) and atomic file replacement.

mod png_encoder;
mod svg;

pub use png_encoder::PngEncoder;
pub use svg::{SvgElement, SvgEncoder, TextAnchor};

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;

/// Image format, chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster PNG.
    Png,
    /// Vector SVG.
    Svg,
}

impl OutputFormat {
    /// Infer the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Replace `path` with `bytes` via a temporary file in the same directory.
///
/// Readers never observe a partially written file, and a failed write leaves
/// any existing file untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
