//! Figure geometry and palette.
//!
//! Pixel sizes are typographic point sizes converted for a 12x8 inch
//! figure at 300 DPI.

use benchviz_core::Rgb;
use plotters::style::RGBColor;

pub const FIGURE_INCHES: (f64, f64) = (12.0, 8.0);
pub const DPI: f64 = 300.0;

pub const FONT: &str = "sans-serif";
// Point sizes at 300 DPI (1 pt = 300/72 px).
pub const TITLE_PX: u32 = 50; // 12 pt
pub const LABEL_PX: u32 = 41; // 10 pt
pub const TICK_PX: u32 = 41;
pub const ANNOTATION_PX: u32 = 41;
pub const LINE_PX: u32 = 6; // 1.5 pt
pub const GRID_PX: u32 = 3;
/// Gap between the last point of a line and its label (25 pt).
pub const ANNOTATION_OFFSET_PX: u32 = 104;
pub const MARGIN_PX: u32 = 25;
pub const PAD_PX: u32 = 16;

/// Bar width in category units.
pub const BAR_WIDTH: f64 = 0.8;
/// Head room above the tallest bar.
pub const BAR_HEADROOM: f64 = 1.05;
/// Multiplicative padding around log-scaled data.
pub const LOG_PAD: f64 = 1.3;
/// Rough advance of one glyph relative to the font size.
pub const GLYPH_ASPECT: f64 = 0.6;

/// CSS `gainsboro`.
pub const GRID: RGBColor = RGBColor(220, 220, 220);

pub fn canvas_size() -> (u32, u32) { ((FIGURE_INCHES.0 * DPI) as u32, (FIGURE_INCHES.1 * DPI) as u32) }

pub fn rgb(c: Rgb) -> RGBColor { RGBColor(c.0, c.1, c.2) }

/// Estimated rendered width of `text`.
pub fn text_width(text: &str, font_px: u32) -> u32 { (text.chars().count() as f64 * font_px as f64 * GLYPH_ASPECT).ceil() as u32 }

pub fn format_tick(v: f64) -> String {
	let a = v.abs();
	if a >= 10.0 || a == 0.0 {
		format!("{v:.0}")
	} else if a >= 1.0 {
		format!("{v:.1}")
	} else {
		format!("{v:.2}")
	}
}
