#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for lattice scene generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scene_tools::scene::{FloatFormat, SceneGenerator, ScenePreset};

fn scene_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_generation");

    for dim in [5, 10, 20] {
        let preset = ScenePreset::mitsuba().with_dim(dim);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &preset, |b, preset| {
            b.iter(|| {
                let mut out = Vec::with_capacity(1 << 20);
                SceneGenerator::new(black_box(preset))
                    .write_to(&mut out)
                    .expect("scene generation should succeed");
                out
            });
        });
    }

    group.finish();
}

fn float_format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_float_format");
    let preset = ScenePreset::spheres().with_dim(10);

    let formats = [("shortest", FloatFormat::Shortest), ("fixed_3", FloatFormat::Fixed(3))];
    for (label, format) in formats {
        group.bench_function(label, |b| {
            b.iter(|| {
                SceneGenerator::new(&preset)
                    .float_format(black_box(format))
                    .render_to_string()
                    .expect("scene generation should succeed")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, scene_benchmark, float_format_benchmark);
criterion_main!(benches);
