//! Overlay the series of several input files on one chart.

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::plots::LineChart;
use crate::series::{RaggedPolicy, SeriesTable};
use std::path::Path;

/// Rendering options for [`plot_files`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Handling of rows with differing column counts.
    pub ragged: RaggedPolicy,
    /// Draw a marker at every data point.
    pub markers: bool,
    /// Douglas-Peucker epsilon in pixels, 0 disables simplification.
    pub simplify: f32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            ragged: RaggedPolicy::default(),
            markers: false,
            simplify: 0.0,
        }
    }
}

/// What [`plot_files`] drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSummary {
    /// Input files read.
    pub files: usize,
    /// Line series drawn.
    pub series: usize,
    /// Data points across all series.
    pub points: usize,
}

/// Read every input, then render one chart to `outfile`.
///
/// All inputs are parsed before anything is written, so any read or parse
/// failure leaves `outfile` untouched. The file is replaced atomically.
pub fn plot_files<P: AsRef<Path>>(
    outfile: &Path,
    infiles: &[P],
    options: &PlotOptions,
) -> Result<PlotSummary> {
    if infiles.is_empty() {
        return Err(Error::EmptyData);
    }
    // fail on a bad extension before doing any work
    OutputFormat::from_path(outfile)?;

    let tables = infiles
        .iter()
        .map(|p| SeriesTable::read(p, options.ragged))
        .collect::<Result<Vec<_>>>()?;

    let mut chart = LineChart::new()
        .dimensions(options.width, options.height)
        .markers(options.markers)
        .simplify(options.simplify);
    for table in &tables {
        for series in table.line_series() {
            chart = chart.add_series(series);
        }
    }
    let chart = chart.build()?;

    chart.render_to_file(outfile)?;

    let summary = PlotSummary {
        files: tables.len(),
        series: chart.series_count(),
        points: chart.total_points(),
    };
    tracing::info!(
        outfile = %outfile.display(),
        files = summary.files,
        series = summary.series,
        points = summary.points,
        "plot written"
    );
    Ok(summary)
}
