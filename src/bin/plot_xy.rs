//! plot-xy - overlay column series from text files on one line chart.
//!
//! Run: `plot-xy out.png run1.txt run2.txt`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use scene_tools::plotter::{plot_files, PlotOptions};
use scene_tools::series::RaggedPolicy;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Plot whitespace-separated numeric columns as line series
#[derive(Parser, Debug)]
#[command(name = "plot-xy")]
#[command(version)]
#[command(about = "Plot columns of numbers from text files", long_about = None)]
struct Cli {
    /// Output image (.png or .svg)
    outfile: PathBuf,

    /// Input files, one row of numbers per line
    #[arg(required = true)]
    infiles: Vec<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Rows with different column counts
    #[arg(long, value_enum, default_value = "truncate")]
    ragged: Ragged,

    /// Draw a marker at each data point
    #[arg(long)]
    markers: bool,

    /// Douglas-Peucker simplification tolerance in pixels
    #[arg(long, default_value = "0")]
    simplify: f32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Ragged {
    /// Keep columns present in every row
    Truncate,
    /// Fail on the first mismatching row
    Reject,
}

impl From<Ragged> for RaggedPolicy {
    fn from(r: Ragged) -> Self {
        match r {
            Ragged::Truncate => Self::Truncate,
            Ragged::Reject => Self::Reject,
        }
    }
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

    let options = PlotOptions {
        width: cli.width,
        height: cli.height,
        ragged: cli.ragged.into(),
        markers: cli.markers,
        simplify: cli.simplify,
    };

    plot_files(&cli.outfile, &cli.infiles, &options)
        .with_context(|| format!("plotting {}", cli.outfile.display()))?;

    Ok(())
}
