//! # scene-tools
//!
//! Two small utilities around a TOML-driven renderer:
//!
//! - **Scene generation**: a fixed preamble (camera, sensor, lights, ground
//!   slab) followed by one mesh instance or sphere per cell of a regular 2D or
//!   3D lattice. See [`scene`].
//! - **Series plotting**: columns of numbers read from text files, overlaid as
//!   line series and written to PNG or SVG. See [`plotter`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_tools::prelude::*;
//! use std::path::Path;
//!
//! // Generate the 7x7x7 sphere scene
//! let preset = ScenePreset::spheres();
//! let mut out = std::io::stdout().lock();
//! SceneGenerator::new(&preset).write_to(&mut out)?;
//!
//! // Plot two measurement files
//! plot_files(Path::new("plot.png"), &["a.txt", "b.txt"], &PlotOptions::default())?;
//! # Ok::<(), scene_tools::Error>(())
//! ```
//!
//! ## References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Douglas, D. H., & Peucker, T. K. (1973). Line simplification algorithm.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Scene Generation
// ============================================================================

/// Procedural lattice scene generation.
pub mod scene;

// ============================================================================
// Series Plotting
// ============================================================================

/// Color types and the series palette.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Scale functions for data-to-visual mappings.
pub mod scale;

/// High-level plot types.
pub mod plots;

/// Rasterization of primitives.
pub mod render;

/// Output encoders (PNG, SVG) and atomic writes.
pub mod output;

/// Reading numeric column files.
pub mod series;

/// Multi-file line plotting.
pub mod plotter;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for scene-tools operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use scene_tools::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Palette, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::output::OutputFormat;
    pub use crate::plots::{LineChart, LineSeries};
    pub use crate::plotter::{plot_files, PlotOptions, PlotSummary};
    pub use crate::scene::{Dimensionality, Lattice, ObjectTemplate, SceneGenerator, ScenePreset};
    pub use crate::series::{RaggedPolicy, SeriesTable};
}
