//! Draws a [`FigureLayout`] with plotters' SVG backend.
//!
//! The whole figure is rendered into memory first. Only a complete SVG is
//! written, through a temporary file renamed over the target.

use crate::error::{ChartError, Result};
use crate::layout::{BarPanel, FigureLayout, LinePanel, Panel};
use crate::style::*;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Render `layout` and write it to `output_dir/<file_name>`, replacing any previous file.
pub fn render(layout: &FigureLayout, output_dir: &Path) -> Result<PathBuf> {
	let svg = render_to_string(layout)?;
	fs::create_dir_all(output_dir).map_err(|e| ChartError::io(output_dir, e))?;
	let path = output_dir.join(&layout.file_name);

	let mut tmp = tempfile::Builder::new()
		.prefix(".benchviz")
		.suffix(".svg.tmp")
		.tempfile_in(output_dir)
		.map_err(|e| ChartError::io(output_dir, e))?;
	tmp.write_all(svg.as_bytes()).map_err(|e| ChartError::io(&path, e))?;
	#[cfg(unix)]
	{
		use std::os::unix::fs::PermissionsExt;
		tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644)).map_err(|e| ChartError::io(&path, e))?;
	}
	tmp.persist(&path).map_err(|e| ChartError::io(&path, e.error))?;

	info!(path = %path.display(), bytes = svg.len(), "chart written");
	Ok(path)
}

/// Render `layout` to an SVG document.
pub fn render_to_string(layout: &FigureLayout) -> Result<String> {
	if layout.panels.len() != 4 {
		return Err(ChartError::layout(format!("expected 4 panels, got {}", layout.panels.len())));
	}
	let mut svg = String::new();
	{
		let root = SVGBackend::with_string(&mut svg, canvas_size()).into_drawing_area();
		root.fill(&WHITE)?;
		for (area, panel) in root.split_evenly((2, 2)).iter().zip(&layout.panels) {
			debug!(panel = panel.title(), "drawing panel");
			match panel {
				Panel::Line(p) => draw_line_panel(area, p)?,
				Panel::Bar(p) => draw_bar_panel(area, p)?,
			}
		}
		root.present()?;
	}
	Ok(svg)
}

fn draw_line_panel(area: &Area<'_>, panel: &LinePanel) -> Result<()> {
	let ticks: Vec<f64> = panel.x_ticks.iter().map(|&t| t as f64).collect();
	let (x_lo, x_hi) = log_bounds(ticks.iter().copied());
	let (y_lo, y_hi) = log_bounds(panel.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));
	let annotation_room = panel.series.iter().map(|s| text_width(&s.label, ANNOTATION_PX)).max().unwrap_or(0) + ANNOTATION_OFFSET_PX;

	let mut chart = ChartBuilder::on(area)
		.caption(&panel.title, (FONT, TITLE_PX))
		.margin(MARGIN_PX as i32)
		.margin_right((MARGIN_PX + annotation_room) as i32)
		.x_label_area_size((TICK_PX + PAD_PX + if panel.x_label.is_some() { LABEL_PX + PAD_PX } else { 0 }) as i32)
		.y_label_area_size(y_label_area(&[y_lo, y_hi]) as i32)
		.build_cartesian_2d((x_lo..x_hi).log_scale().with_key_points(ticks), (y_lo..y_hi).log_scale())?;

	let fmt_x = |v: &f64| format!("{v:.0}");
	let fmt_y = |v: &f64| format_tick(*v);
	chart
		.configure_mesh()
		.disable_mesh()
		.x_label_formatter(&fmt_x)
		.y_label_formatter(&fmt_y)
		.x_desc(panel.x_label.as_deref().unwrap_or_default())
		.y_desc(panel.y_label.as_str())
		.label_style((FONT, TICK_PX))
		.axis_desc_style((FONT, LABEL_PX))
		.draw()?;

	for series in &panel.series {
		let color = rgb(series.color);
		let points: Vec<(f64, f64)> = series.points.iter().copied().filter(|p| p.1 > 0.0).collect();
		chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(LINE_PX)))?;

		// Inline label replaces a legend.
		if let Some(&last) = points.last() {
			let style = (FONT, ANNOTATION_PX).into_font().color(&color).pos(Pos::new(HPos::Left, VPos::Center));
			chart.draw_series(std::iter::once(
				EmptyElement::at(last) + Text::new(series.label.clone(), (ANNOTATION_OFFSET_PX as i32, 0), style),
			))?;
		}
	}
	Ok(())
}

fn draw_bar_panel(area: &Area<'_>, panel: &BarPanel) -> Result<()> {
	let n = panel.bars.len();
	let tallest = panel.bars.iter().map(|b| b.value).filter(|v| v.is_finite()).fold(0.0, f64::max);
	let y_hi = if tallest > 0.0 { tallest * BAR_HEADROOM } else { 1.0 };
	let longest = panel.bars.iter().map(|b| text_width(&b.label, TICK_PX)).max().unwrap_or(0);

	let mut chart = ChartBuilder::on(area)
		.caption(&panel.title, (FONT, TITLE_PX))
		.margin(MARGIN_PX as i32)
		.x_label_area_size((longest + 2 * PAD_PX) as i32)
		.y_label_area_size(y_label_area(&[0.0, y_hi]) as i32)
		.build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..y_hi)?;

	// Grid first so the bars cover it. Category labels are drawn below.
	let fmt_x = |_: &f64| String::new();
	let fmt_y = |v: &f64| format_tick(*v);
	chart
		.configure_mesh()
		.x_labels(n)
		.bold_line_style(GRID.stroke_width(GRID_PX))
		.light_line_style(WHITE)
		.x_label_formatter(&fmt_x)
		.y_label_formatter(&fmt_y)
		.y_desc(panel.y_label.as_str())
		.label_style((FONT, TICK_PX))
		.axis_desc_style((FONT, LABEL_PX))
		.draw()?;

	chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
		let x = i as f64;
		Rectangle::new([(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, bar.value)], rgb(bar.color).filled())
	}))?;

	// Rotated labels hang down from the axis, starting at each bar center.
	let style = (FONT, TICK_PX).into_font().transform(FontTransform::Rotate90).color(&BLACK).pos(Pos::new(HPos::Left, VPos::Center));
	chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
		EmptyElement::at((i as f64, 0.0)) + Text::new(bar.label.clone(), (0, PAD_PX as i32), style.clone())
	}))?;
	Ok(())
}

/// Padded log-scale bounds over the positive values.
fn log_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
	let (lo, hi) = values
		.filter(|v| v.is_finite() && *v > 0.0)
		.fold((f64::INFINITY, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
	if hi > 0.0 { (lo / LOG_PAD, hi * LOG_PAD) } else { (0.1, 10.0) }
}

/// Width needed by y tick labels and the rotated axis title.
fn y_label_area(extremes: &[f64]) -> u32 {
	let widest = extremes.iter().map(|&v| text_width(&format_tick(v), TICK_PX)).max().unwrap_or(0);
	widest + LABEL_PX + 2 * PAD_PX
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_bounds_ignore_non_positive() {
		let (lo, hi) = log_bounds([0.0, 2.0, -1.0, 8.0].into_iter());
		assert!(lo < 2.0 && lo > 0.0);
		assert!(hi > 8.0);
		assert_eq!(log_bounds(std::iter::empty()), (0.1, 10.0));
	}
}
