//! Scene presets: built-in variants and YAML-loaded configurations.
//!
//! Precedence when building the effective preset: CLI overrides > config file
//! > built-in defaults.

use super::format::FloatFormat;
use super::lattice::{Dimensionality, Lattice};
use super::object::ObjectTemplate;
use super::preamble::{Camera, EnvMap, Material, PointLight, Preamble, Sensor, Slab};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names accepted by [`ScenePreset::builtin`].
pub const BUILTIN_PRESETS: &[&str] = &["mitsuba", "spheres", "sphere-plane"];

/// Mesh instanced by the `mitsuba` preset.
pub const MITSUBA_MESH: &str = "casual-effects.com/mitsuba/mitsuba-sphere.obj";

/// Full description of one generated scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePreset {
    /// Preset name, informational only.
    #[serde(default)]
    pub name: String,
    /// Fixed preamble.
    pub preamble: Preamble,
    /// Grid parameters.
    pub lattice: Lattice,
    /// Object placed at every cell.
    pub object: ObjectTemplate,
    /// Digits after the decimal point; shortest round-trip form when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl ScenePreset {
    /// Look up a built-in preset by name.
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "mitsuba" => Ok(Self::mitsuba()),
            "spheres" => Ok(Self::spheres()),
            "sphere-plane" => Ok(Self::sphere_plane()),
            other => Err(Error::UnknownPreset(other.to_string())),
        }
    }

    /// 5×5×5 mitsuba mesh instances under a gradient sky.
    #[must_use]
    pub fn mitsuba() -> Self {
        Self {
            name: "mitsuba".to_string(),
            preamble: Preamble {
                camera: camera([40.0, 25.0, 40.0], [5.0, 4.0, 5.0]),
                sensor: Sensor { pixelwidth: 1200, pixelheight: 800 },
                envmap: Some(EnvMap {
                    kind: "gradient".to_string(),
                    low: [0.0, 0.0, 0.0],
                    high: [1.0, 1.0, 1.0],
                    direction: [1.0, 0.2, 0.0],
                }),
                pointlights: vec![PointLight {
                    position: [45.0, 45.0, 31.0],
                    intensity: [3000.0, 3000.0, 3000.0],
                }],
                slabs: vec![floor()],
            },
            lattice: Lattice::new(5, 2.5).y_offset(0.5),
            object: ObjectTemplate::Mesh { file: MITSUBA_MESH.to_string(), scale: 2.0 },
            precision: None,
        }
    }

    /// 7×7×7 unit spheres lit by a single point light.
    #[must_use]
    pub fn spheres() -> Self {
        Self {
            name: "spheres".to_string(),
            preamble: Preamble {
                camera: camera([30.0, 16.0, 30.0], [5.0, 4.0, 5.0]),
                sensor: Sensor { pixelwidth: 1200, pixelheight: 800 },
                envmap: None,
                pointlights: vec![PointLight {
                    position: [25.0, 25.0, 21.0],
                    intensity: [100.0, 100.0, 100.0],
                }],
                slabs: vec![floor()],
            },
            lattice: Lattice::new(7, 2.2).y_offset(2.5),
            object: ObjectTemplate::Sphere { radius: 1.0 },
            precision: None,
        }
    }

    /// Single 10×10 layer of unit spheres resting above the floor.
    #[must_use]
    pub fn sphere_plane() -> Self {
        let mut preset = Self::spheres();
        preset.name = "sphere-plane".to_string();
        preset.preamble.camera = camera([30.0, 20.0, 30.0], [10.0, 1.0, 10.0]);
        preset.lattice = Lattice::new(10, 2.2).y_offset(1.0).dimensionality(Dimensionality::Plane);
        preset
    }

    /// Load a preset from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::FileRead { path: path.to_path_buf(), source })?;
        Self::parse(&content)
    }

    /// Parse a preset from YAML text.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::Config { line, message: e.to_string() }
        })
    }

    /// Serialize to YAML, e.g. as a starting point for a custom config.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| Error::Config { line: 0, message: e.to_string() })
    }

    /// Override the grid size.
    #[must_use]
    pub fn with_dim(mut self, dim: u32) -> Self {
        self.lattice.dim = dim;
        self
    }

    /// Override the grid spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.lattice.spacing = spacing;
        self
    }

    /// Override the float precision.
    #[must_use]
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Float format selected by [`ScenePreset::precision`].
    #[must_use]
    pub fn float_format(&self) -> FloatFormat {
        FloatFormat::from_precision(self.precision)
    }
}

fn camera(position: [f64; 3], lookat: [f64; 3]) -> Camera {
    Camera {
        kind: "pinhole".to_string(),
        hfov: 60,
        position,
        lookat,
        up: [0.0, 1.0, 0.0],
    }
}

fn floor() -> Slab {
    Slab {
        label: Some("Floor".to_string()),
        min: [-100.0, -0.5, -100.0],
        max: [100.0, -0.04, 100.0],
        material: Material { kind: "diffuse".to_string(), diffuse: [0.5, 0.5, 0.5] },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_resolves() {
        for name in BUILTIN_PRESETS {
            let preset = ScenePreset::builtin(name).unwrap();
            assert_eq!(preset.name, *name);
        }
    }

    #[test]
    fn test_unknown_preset() {
        let err = ScenePreset::builtin("teapots").unwrap_err();
        assert!(matches!(err, Error::UnknownPreset(ref n) if n == "teapots"));
    }

    #[test]
    fn test_builtin_object_counts() {
        assert_eq!(ScenePreset::mitsuba().lattice.len(), 125);
        assert_eq!(ScenePreset::spheres().lattice.len(), 343);
        assert_eq!(ScenePreset::sphere_plane().lattice.len(), 100);
    }

    #[test]
    fn test_yaml_round_trip() {
        let preset = ScenePreset::mitsuba().with_precision(Some(3));
        let yaml = preset.to_yaml().unwrap();
        let back = ScenePreset::parse(&yaml).unwrap();
        assert_eq!(back, preset);
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r"
preamble:
  camera:
    hfov: 50
    position: [10.0, 10.0, 10.0]
    lookat: [0.0, 0.0, 0.0]
  sensor:
    pixelwidth: 320
    pixelheight: 240
lattice:
  dim: 2
  spacing: 3.0
object:
  kind: sphere
  radius: 0.5
";
        let preset = ScenePreset::parse(yaml).unwrap();
        assert_eq!(preset.lattice.len(), 8);
        assert!(preset.preamble.envmap.is_none());
        assert!(preset.preamble.slabs.is_empty());
        assert_eq!(preset.float_format(), FloatFormat::Shortest);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = ScenePreset::parse("preamble:\n  camera: [\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScenePreset::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_overrides() {
        let preset = ScenePreset::spheres().with_dim(2).with_spacing(4.0).with_precision(Some(2));
        assert_eq!(preset.lattice.dim, 2);
        assert_eq!(preset.lattice.spacing, 4.0);
        assert_eq!(preset.float_format(), FloatFormat::Fixed(2));
        // y offset survives the override
        assert_eq!(preset.lattice.y_offset, 2.5);
    }
}
