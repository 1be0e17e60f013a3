//! Procedural scene generation.
//!
//! A [`SceneGenerator`] writes a renderer scene document in two parts: the
//! fixed [`Preamble`] followed by one record per [`Lattice`] cell. Output is
//! a pure function of the [`ScenePreset`]; running twice yields identical
//! bytes.
//!
//! ```
//! use scene_tools::scene::{SceneGenerator, ScenePreset};
//!
//! let preset = ScenePreset::spheres().with_dim(2);
//! let text = SceneGenerator::new(&preset).render_to_string().unwrap();
//! assert_eq!(text.matches("[[spheres]]").count(), 8);
//! ```

mod format;
mod lattice;
mod object;
mod preamble;
mod preset;

pub use format::{quote, FloatFormat};
pub use lattice::{Dimensionality, Lattice, LatticePoint};
pub use object::{ObjectTemplate, PlacedObject};
pub use preamble::{Camera, EnvMap, Material, PointLight, Preamble, Sensor, Slab};
pub use preset::{ScenePreset, BUILTIN_PRESETS, MITSUBA_MESH};

use crate::error::Result;
use std::io::Write;

/// Writes a scene document for a preset.
#[derive(Debug, Clone, Copy)]
pub struct SceneGenerator<'a> {
    preset: &'a ScenePreset,
    format: FloatFormat,
}

impl<'a> SceneGenerator<'a> {
    /// Create a generator using the preset's float format.
    #[must_use]
    pub fn new(preset: &'a ScenePreset) -> Self {
        Self { preset, format: preset.float_format() }
    }

    /// Override the float format.
    #[must_use]
    pub fn float_format(mut self, format: FloatFormat) -> Self {
        self.format = format;
        self
    }

    /// Number of object records the document will contain.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.preset.lattice.len()
    }

    /// Write the whole document. Returns the number of objects emitted.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<usize> {
        self.preset.preamble.write_to(w, self.format)?;

        let template = &self.preset.object;
        let mut count = 0;
        for point in self.preset.lattice.points() {
            template.place(point.position).write_to(w, self.format)?;
            count += 1;
        }

        tracing::debug!(
            preset = %self.preset.name,
            objects = count,
            table = template.table_name(),
            "generated scene"
        );
        Ok(count)
    }

    /// Render the document into a string.
    pub fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        // every writer in this module emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
