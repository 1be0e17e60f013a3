//! Fixed scene preamble: camera, sensor, lighting and ground slabs.
//!
//! The preamble is written once ahead of the generated objects. Sections are
//! separated by a blank line, and the document both opens and closes the
//! preamble with a blank line.

use super::format::{quote, FloatFormat};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Indentation used for nested sub-tables.
const NESTED_INDENT: &str = "    ";

/// Pinhole camera pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Camera model.
    #[serde(rename = "type", default = "default_camera_type")]
    pub kind: String,
    /// Horizontal field of view in degrees.
    pub hfov: u32,
    /// Eye position.
    pub position: [f64; 3],
    /// Look-at target.
    pub lookat: [f64; 3],
    /// Up vector.
    #[serde(default = "default_up")]
    pub up: [f64; 3],
}

fn default_camera_type() -> String {
    "pinhole".to_string()
}
fn default_up() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}

/// Sensor resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Width in pixels.
    pub pixelwidth: u32,
    /// Height in pixels.
    pub pixelheight: u32,
}

/// Environment lighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvMap {
    /// Environment map kind (`gradient`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Color at the low end of the gradient.
    pub low: [f64; 3],
    /// Color at the high end of the gradient.
    pub high: [f64; 3],
    /// Gradient direction.
    pub direction: [f64; 3],
}

/// Point light source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Light position.
    pub position: [f64; 3],
    /// RGB intensity.
    pub intensity: [f64; 3],
}

/// Surface material of a slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material model.
    #[serde(rename = "type", default = "default_material_type")]
    pub kind: String,
    /// Diffuse albedo.
    pub diffuse: [f64; 3],
}

fn default_material_type() -> String {
    "diffuse".to_string()
}

/// Axis-aligned box, used as a ground plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slab {
    /// Comment line written above the slab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Minimum corner.
    pub min: [f64; 3],
    /// Maximum corner.
    pub max: [f64; 3],
    /// Surface material.
    pub material: Material,
}

/// Everything written before the generated objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preamble {
    /// Camera.
    pub camera: Camera,
    /// Sensor.
    pub sensor: Sensor,
    /// Optional environment map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envmap: Option<EnvMap>,
    /// Point lights, in emission order.
    #[serde(default)]
    pub pointlights: Vec<PointLight>,
    /// Ground slabs, in emission order.
    #[serde(default)]
    pub slabs: Vec<Slab>,
}

impl Preamble {
    /// Write the preamble, including its leading and trailing blank lines.
    pub fn write_to<W: Write>(&self, w: &mut W, fmt: FloatFormat) -> io::Result<()> {
        writeln!(w)?;

        let c = &self.camera;
        writeln!(w, "[camera]")?;
        writeln!(w, "type = {}", quote(&c.kind))?;
        writeln!(w, "hfov = {}", c.hfov)?;
        writeln!(w)?;
        writeln!(w, "position = {}", fmt.array(&c.position))?;
        writeln!(w, "lookat = {}", fmt.array(&c.lookat))?;
        writeln!(w, "up = {}", fmt.array(&c.up))?;

        writeln!(w)?;
        writeln!(w, "[sensor]")?;
        writeln!(w, "pixelwidth = {}", self.sensor.pixelwidth)?;
        writeln!(w, "pixelheight = {}", self.sensor.pixelheight)?;

        if let Some(env) = &self.envmap {
            writeln!(w)?;
            writeln!(w, "[envmap]")?;
            writeln!(w, "type = {}", quote(&env.kind))?;
            writeln!(w, "low = {}", fmt.array(&env.low))?;
            writeln!(w, "high = {}", fmt.array(&env.high))?;
            writeln!(w, "direction = {}", fmt.array(&env.direction))?;
        }

        for light in &self.pointlights {
            writeln!(w)?;
            writeln!(w, "[[pointlights]]")?;
            writeln!(w, "position = {}", fmt.array(&light.position))?;
            writeln!(w, "intensity = {}", fmt.array(&light.intensity))?;
        }

        for slab in &self.slabs {
            writeln!(w)?;
            if let Some(label) = &slab.label {
                // comments end at the newline, so keep the label on one line
                writeln!(w, "# {}", label.replace(['\n', '\r'], " "))?;
            }
            writeln!(w, "[[slabs]]")?;
            writeln!(w, "min = {}", fmt.array(&slab.min))?;
            writeln!(w, "max = {}", fmt.array(&slab.max))?;
            writeln!(w)?;
            writeln!(w, "{NESTED_INDENT}[slabs.material]")?;
            writeln!(w, "{NESTED_INDENT}type = {}", quote(&slab.material.kind))?;
            writeln!(w, "{NESTED_INDENT}diffuse = {}", fmt.array(&slab.material.diffuse))?;
        }

        writeln!(w)
    }
}
