//! Scene generation tests against a real TOML parser.
//!
//! Run: cargo test --test scene_generation_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use proptest::prelude::*;
use scene_tools::scene::{Dimensionality, FloatFormat, Lattice, SceneGenerator, ScenePreset};
use std::process::Command;
use toml::{Table, Value};

fn parse(preset: &ScenePreset) -> Table {
    let text = SceneGenerator::new(preset).render_to_string().unwrap();
    text.parse::<Table>().unwrap_or_else(|e| panic!("generated scene is not TOML: {e}\n{text}"))
}

fn floats(value: &Value) -> Vec<f64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)).unwrap())
        .collect()
}

// ============================================================================
// Document structure
// ============================================================================

#[test]
fn mitsuba_parses_as_toml() {
    let doc = parse(&ScenePreset::mitsuba());

    let camera = doc["camera"].as_table().unwrap();
    assert_eq!(camera["type"].as_str(), Some("pinhole"));
    assert_eq!(camera["hfov"].as_integer(), Some(60));
    assert_eq!(floats(&camera["position"]), vec![40.0, 25.0, 40.0]);
    assert_eq!(floats(&camera["lookat"]), vec![5.0, 4.0, 5.0]);

    assert_eq!(doc["sensor"]["pixelwidth"].as_integer(), Some(1200));
    assert_eq!(doc["envmap"]["type"].as_str(), Some("gradient"));

    let slabs = doc["slabs"].as_array().unwrap();
    assert_eq!(slabs.len(), 1);
    assert_eq!(floats(&slabs[0]["max"]), vec![100.0, -0.04, 100.0]);
    assert_eq!(slabs[0]["material"]["type"].as_str(), Some("diffuse"));

    let meshes = doc["meshes"].as_array().unwrap();
    assert_eq!(meshes.len(), 125);
    for mesh in meshes {
        assert_eq!(mesh["file"].as_str(), Some("casual-effects.com/mitsuba/mitsuba-sphere.obj"));
        let transform = mesh["transform"].as_array().unwrap();
        assert_eq!(transform.len(), 2);
        assert_eq!(floats(&transform[1]["scale"]), vec![2.0, 2.0, 2.0]);
    }

    let last = meshes.last().unwrap()["transform"][0]["translate"].clone();
    assert_eq!(floats(&last), vec![10.0, 10.5, 10.0]);
    assert!(doc.get("spheres").is_none());
}

#[test]
fn spheres_parse_as_toml() {
    let doc = parse(&ScenePreset::spheres());

    assert!(doc.get("envmap").is_none());
    assert_eq!(floats(&doc["pointlights"][0]["intensity"]), vec![100.0, 100.0, 100.0]);

    let spheres = doc["spheres"].as_array().unwrap();
    assert_eq!(spheres.len(), 343);
    assert_eq!(floats(&spheres[0]["position"]), vec![0.0, 2.5, 0.0]);
    // z varies fastest
    assert_eq!(floats(&spheres[1]["position"]), vec![0.0, 2.5, 2.2]);
    assert!(spheres.iter().all(|s| s["radius"].as_float() == Some(1.0)));
}

#[test]
fn sphere_plane_is_one_layer() {
    let doc = parse(&ScenePreset::sphere_plane());
    let spheres = doc["spheres"].as_array().unwrap();
    assert_eq!(spheres.len(), 100);
    assert!(spheres.iter().all(|s| floats(&s["position"])[1] == 1.0));
}

#[test]
fn fixed_precision_still_parses() {
    let preset = ScenePreset::mitsuba().with_dim(2).with_precision(Some(3));
    let doc = parse(&preset);
    let translate = &doc["meshes"][1]["transform"][0]["translate"];
    assert_eq!(floats(translate), vec![0.0, 0.5, 2.5]);
}

#[test]
fn zero_dim_emits_preamble_only() {
    let doc = parse(&ScenePreset::mitsuba().with_dim(0));
    assert!(doc.contains_key("camera"));
    assert!(doc.get("meshes").is_none());
}

#[test]
fn output_is_deterministic() {
    let preset = ScenePreset::spheres();
    let a = SceneGenerator::new(&preset).render_to_string().unwrap();
    let b = SceneGenerator::new(&preset).render_to_string().unwrap();
    assert_eq!(a, b);
}

#[test]
fn yaml_preset_matches_builtin() {
    let preset = ScenePreset::spheres();
    let reloaded = ScenePreset::parse(&preset.to_yaml().unwrap()).unwrap();
    let a = SceneGenerator::new(&preset).render_to_string().unwrap();
    let b = SceneGenerator::new(&reloaded).render_to_string().unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Lattice properties
// ============================================================================

proptest! {
    #[test]
    fn lattice_count_matches_dimensionality(dim in 0u32..8, plane in any::<bool>()) {
        let dimensionality = if plane { Dimensionality::Plane } else { Dimensionality::Volume };
        let lattice = Lattice::new(dim, 1.0).dimensionality(dimensionality);
        let expected = (if plane { dim.pow(2) } else { dim.pow(3) }) as usize;
        prop_assert_eq!(lattice.len(), expected);
        prop_assert_eq!(lattice.points().count(), expected);
    }

    #[test]
    fn lattice_positions_follow_indices(
        dim in 1u32..6,
        spacing in 0.1f64..10.0,
        y_offset in -5.0f64..5.0,
    ) {
        let lattice = Lattice::new(dim, spacing).y_offset(y_offset);
        for point in lattice.points() {
            let [xi, yi, zi] = point.index;
            prop_assert!(xi < dim && yi < dim && zi < dim);
            prop_assert_eq!(point.position[0], spacing * f64::from(xi));
            prop_assert_eq!(point.position[1], spacing * f64::from(yi) + y_offset);
            prop_assert_eq!(point.position[2], spacing * f64::from(zi));
        }
    }

    #[test]
    fn generated_scene_has_one_record_per_cell(dim in 0u32..5) {
        let preset = ScenePreset::spheres().with_dim(dim);
        let text = SceneGenerator::new(&preset)
            .float_format(FloatFormat::Fixed(2))
            .render_to_string()
            .unwrap();
        prop_assert_eq!(text.matches("[[spheres]]").count(), (dim * dim * dim) as usize);
    }
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn scenegen_binary_writes_scene_to_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_scenegen"))
        .args(["--preset", "spheres", "--dim", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let doc = text.parse::<Table>().unwrap();
    assert_eq!(doc["spheres"].as_array().unwrap().len(), 8);
}

#[test]
fn scenegen_binary_rejects_unknown_preset() {
    let output = Command::new(env!("CARGO_BIN_EXE_scenegen"))
        .args(["--preset", "teapots"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn scenegen_binary_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("spheres.yaml");

    let dumped = Command::new(env!("CARGO_BIN_EXE_scenegen"))
        .args(["--preset", "spheres", "--dim", "3", "--dump-preset"])
        .output()
        .unwrap();
    assert!(dumped.status.success());
    std::fs::write(&config, &dumped.stdout).unwrap();

    let from_flags = Command::new(env!("CARGO_BIN_EXE_scenegen"))
        .args(["--preset", "spheres", "--dim", "3"])
        .output()
        .unwrap();
    let from_config = Command::new(env!("CARGO_BIN_EXE_scenegen"))
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(from_flags.status.success());
    assert!(from_config.status.success());
    assert!(!from_config.stdout.is_empty());
    assert_eq!(from_flags.stdout, from_config.stdout);
}

#[test]
fn scenegen_binary_lists_presets() {
    let output = Command::new(env!("CARGO_BIN_EXE_scenegen")).arg("--list").output().unwrap();
    assert!(output.status.success());
    let names: Vec<String> =
        String::from_utf8(output.stdout).unwrap().lines().map(str::to_string).collect();
    assert_eq!(names, vec!["mitsuba", "spheres", "sphere-plane"]);
}
