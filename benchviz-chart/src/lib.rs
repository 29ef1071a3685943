#![forbid(unsafe_code)]

//! Benchviz chart: draws built reports as 2x2 SVG figures.
//!
//! [`FigureLayout::plan`] turns a report into panels; [`render()`] draws and
//! writes them.

pub mod error;
pub mod layout;
pub mod render;
pub mod style;

use benchviz_core::{ReportResult, ReportSpec};
use std::path::{Path, PathBuf};

pub use error::{ChartError, Result};
pub use layout::{Bar, BarPanel, FigureLayout, LinePanel, Panel, Series};
pub use render::{render, render_to_string};

/// Plan and render `result` into `output_dir`, returning the written path.
pub fn draw_report(spec: &ReportSpec, result: &ReportResult, output_dir: &Path) -> Result<PathBuf> {
	let layout = FigureLayout::plan(spec, result)?;
	render(&layout, output_dir)
}
