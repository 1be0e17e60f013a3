//! scenegen - emit a procedural lattice scene on standard output.
//!
//! Run: `scenegen --preset spheres > spheres.toml`

use anyhow::{Context, Result};
use clap::Parser;
use scene_tools::scene::{SceneGenerator, ScenePreset, BUILTIN_PRESETS};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a renderer scene with one object per lattice cell
#[derive(Parser, Debug)]
#[command(name = "scenegen")]
#[command(version)]
#[command(about = "Generate a lattice scene description on stdout", long_about = None)]
struct Cli {
    /// Built-in preset (mitsuba, spheres, sphere-plane)
    #[arg(short, long, default_value = "mitsuba", conflicts_with = "config")]
    preset: String,

    /// YAML preset file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cells per axis
    #[arg(long)]
    dim: Option<u32>,

    /// Distance between cells
    #[arg(long)]
    spacing: Option<f64>,

    /// Digits after the decimal point (default: shortest round-trip form)
    #[arg(long)]
    precision: Option<usize>,

    /// Print the effective preset as YAML instead of the scene
    #[arg(long)]
    dump_preset: bool,

    /// List built-in presets and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list {
        for name in BUILTIN_PRESETS {
            println!("{name}");
        }
        return Ok(());
    }

    let mut preset = match &cli.config {
        Some(path) => ScenePreset::load(path)
            .with_context(|| format!("loading preset {}", path.display()))?,
        None => ScenePreset::builtin(&cli.preset)?,
    };
    if let Some(dim) = cli.dim {
        preset = preset.with_dim(dim);
    }
    if let Some(spacing) = cli.spacing {
        preset = preset.with_spacing(spacing);
    }
    if cli.precision.is_some() {
        preset = preset.with_precision(cli.precision);
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.dump_preset {
        out.write_all(preset.to_yaml()?.as_bytes())?;
    } else {
        let count = SceneGenerator::new(&preset).write_to(&mut out).context("writing scene")?;
        tracing::info!(preset = %preset.name, objects = count, "scene written");
    }
    out.flush().context("flushing stdout")?;

    Ok(())
}
