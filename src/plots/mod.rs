//! High-level plot types.

mod line;

pub use line::{douglas_peucker, LineChart, LineSeries};
