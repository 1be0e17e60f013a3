//! Objects placed at lattice cells.

use super::format::{quote, FloatFormat};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// What gets placed at every lattice cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ObjectTemplate {
    /// Instance of a mesh file, translated to the cell and uniformly scaled.
    Mesh {
        /// Mesh path as the renderer resolves it.
        file: String,
        /// Uniform scale factor.
        scale: f64,
    },
    /// Analytic sphere centred on the cell.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
}

impl ObjectTemplate {
    /// Place this template at a world position.
    #[must_use]
    pub fn place(&self, position: [f64; 3]) -> PlacedObject<'_> {
        PlacedObject { template: self, position }
    }

    /// Array-of-tables name this template is emitted under.
    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::Mesh { .. } => "meshes",
            Self::Sphere { .. } => "spheres",
        }
    }
}

/// A template at a concrete position, written straight to the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject<'a> {
    /// Shared template.
    pub template: &'a ObjectTemplate,
    /// World position.
    pub position: [f64; 3],
}

impl PlacedObject<'_> {
    /// Write this object as one self-contained record.
    pub fn write_to<W: Write>(&self, w: &mut W, fmt: FloatFormat) -> io::Result<()> {
        match self.template {
            ObjectTemplate::Mesh { file, scale } => {
                writeln!(w, "[[meshes]]")?;
                writeln!(w, "file = {}", quote(file))?;
                writeln!(w, "[[meshes.transform]]")?;
                writeln!(w, "translate = {}", fmt.array(&self.position))?;
                writeln!(w, "[[meshes.transform]]")?;
                writeln!(w, "scale = {}", fmt.array(&[*scale; 3]))
            }
            ObjectTemplate::Sphere { radius } => {
                writeln!(w, "[[spheres]]")?;
                writeln!(w, "radius = {}", fmt.float(*radius))?;
                writeln!(w, "position = {}", fmt.array(&self.position))
            }
        }
    }
}
