//! Renderer-independent plan of a report figure.
//!
//! [`FigureLayout::plan`] resolves every panel of a [`ReportSpec`] against a
//! built [`ReportResult`]: which values, in which order, with which label and
//! color. Line panels list their series in reverse roster order so the first
//! declared implementation is drawn last (on top); bar panels keep roster order.

use crate::error::{ChartError, Result};
use benchviz_core::{PanelSource, PanelSpec, ReportResult, ReportSpec, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
	pub file_name: String,
	/// Row-major 2x2 grid.
	pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
	Line(LinePanel),
	Bar(BarPanel),
}

/// Log-log line chart over the size sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePanel {
	pub title: String,
	pub x_label: Option<String>,
	pub y_label: String,
	/// Exact x tick positions.
	pub x_ticks: Vec<u64>,
	/// In draw order.
	pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
	/// Drawn as an inline annotation after the last point.
	pub label: String,
	pub color: Rgb,
	pub points: Vec<(f64, f64)>,
}

/// Categorical bar chart, one bar per implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPanel {
	pub title: String,
	pub y_label: String,
	/// In draw order, left to right.
	pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
	pub label: String,
	pub color: Rgb,
	pub value: f64,
}

impl Panel {
	pub fn title(&self) -> &str {
		match self {
			Panel::Line(p) => &p.title,
			Panel::Bar(p) => &p.title,
		}
	}
}

impl FigureLayout {
	pub fn plan(spec: &ReportSpec, result: &ReportResult) -> Result<Self> {
		if result.report() != spec.name {
			return Err(ChartError::layout(format!("result of `{}` cannot be drawn as `{}`", result.report(), spec.name)));
		}
		let panels = spec.panels.iter().map(|p| plan_panel(spec, result, p)).collect::<Result<Vec<_>>>()?;
		Ok(Self { file_name: spec.output_file.to_string(), panels })
	}
}

fn plan_panel(spec: &ReportSpec, result: &ReportResult, panel: &PanelSpec) -> Result<Panel> {
	match panel.source {
		PanelSource::Sweep => {
			let series = spec
				.implementations
				.iter()
				.enumerate()
				.rev()
				.map(|(i, imp)| -> Result<Series> {
					let row = result.sweep().row(i).filter(|r| r.len() == spec.sweep.len()).ok_or_else(|| missing(panel, imp.name))?;
					Ok(Series {
						label: imp.label.to_string(),
						color: imp.color,
						points: spec.sweep.iter().zip(row).map(|(&size, m)| (size as f64, panel.metric.of(m))).collect(),
					})
				})
				.collect::<Result<Vec<_>>>()?;
			Ok(Panel::Line(LinePanel {
				title: panel.title.to_string(),
				x_label: panel.x_label.map(str::to_string),
				y_label: panel.y_label.to_string(),
				x_ticks: spec.sweep.clone(),
				series,
			}))
		}
		PanelSource::Case(case) => {
			let bars = spec
				.implementations
				.iter()
				.enumerate()
				.map(|(i, imp)| -> Result<Bar> {
					let m = result.cases().get(i, case).ok_or_else(|| missing(panel, imp.name))?;
					Ok(Bar { label: imp.label.to_string(), color: imp.color, value: panel.metric.of(m) })
				})
				.collect::<Result<Vec<_>>>()?;
			Ok(Panel::Bar(BarPanel { title: panel.title.to_string(), y_label: panel.y_label.to_string(), bars }))
		}
	}
}

fn missing(panel: &PanelSpec, implementation: &str) -> ChartError {
	ChartError::layout(format!("panel `{}` has no data for `{implementation}`", panel.title))
}
