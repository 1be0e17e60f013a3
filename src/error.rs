//! Error types for scene generation and series plotting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scene-tools operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (stdout writes, temp file handling, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A series input file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Scale domain error (e.g., non-finite extent).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// A token in a series file is not a decimal number.
    #[error("parse error: {token:?} at line {line} of {}", file.display())]
    Parse {
        /// The offending token, trimmed.
        token: String,
        /// 1-based line number.
        line: usize,
        /// Input file path.
        file: PathBuf,
    },

    /// A row in a series file has a different column count than the first row.
    #[error(
        "row length mismatch: line {line} of {} has {found} columns, expected {expected}",
        file.display()
    )]
    RaggedRows {
        /// Input file path.
        file: PathBuf,
        /// 1-based line number of the offending row.
        line: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// Output file extension does not map to a known encoder.
    #[error("unsupported output format: {0:?} (expected .png or .svg)")]
    UnsupportedFormat(String),

    /// Scene preset configuration could not be parsed.
    #[error("config error at line {line}: {message}")]
    Config {
        /// Line number reported by the YAML parser (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// No built-in scene preset with this name.
    #[error("unknown scene preset: {0}")]
    UnknownPreset(String),
}
