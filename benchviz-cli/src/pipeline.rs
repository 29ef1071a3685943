//! Builds and draws every report in order. The first failure stops the run,
//! so reports drawn before it keep their fresh output and later ones are untouched.

use anyhow::Context;
use benchviz_core::{all_reports, build, ArtifactLocator, ReportConfig};
use std::path::PathBuf;
use tracing::info;

pub fn run(cfg: &ReportConfig) -> anyhow::Result<Vec<PathBuf>> {
	let locator = ArtifactLocator::from_config(cfg);
	info!(root = %locator.root().display(), selection = ?cfg.selection, "reading criterion data");

	let mut written = Vec::new();
	for spec in all_reports() {
		let result = build(&spec, &locator).with_context(|| format!("building {} report", spec.name))?;
		let path = benchviz_chart::draw_report(&spec, &result, &cfg.output_dir).with_context(|| format!("drawing {}", spec.output_file))?;
		written.push(path);
	}
	Ok(written)
}
