//! Report definitions and the matrix builder.
//!
//! A report is built all-or-nothing: every (implementation, case) cell is
//! located and decoded in roster order, and the first failure aborts the
//! build. A [`ReportResult`] therefore only exists fully populated.

use crate::error::{Error, Result};
use crate::locator::ArtifactLocator;
use crate::metric::{self, DerivedMetric};
use crate::roster::{Implementation, Workload};
use tracing::{debug, info, info_span};

/// Which half of a derived metric a panel plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
	Latency,
	Throughput,
}

impl Metric {
	pub fn of(self, m: &DerivedMetric) -> f64 {
		match self {
			Self::Latency => m.latency_ns,
			Self::Throughput => m.throughput,
		}
	}
}

/// Data feeding a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSource {
	/// The size sweep, one line per implementation.
	Sweep,
	/// One fixed case (index into [`ReportSpec::cases`]), one bar per implementation.
	Case(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
	pub title: &'static str,
	pub x_label: Option<&'static str>,
	pub y_label: &'static str,
	pub metric: Metric,
	pub source: PanelSource,
}

/// Everything needed to build and draw one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSpec {
	pub name: &'static str,
	/// Criterion group prefix of the artifact directories.
	pub group: &'static str,
	pub output_file: &'static str,
	pub implementations: Vec<Implementation>,
	/// Byte sizes benchmarked as `str_<size>` cases; may be empty.
	pub sweep: Vec<u64>,
	pub cases: Vec<Workload>,
	pub fallback_elements: u64,
	/// Panels of the 2x2 grid, row-major.
	pub panels: [PanelSpec; 4],
}

impl ReportSpec {
	/// Case key of one sweep point.
	pub fn sweep_case(size: u64) -> String { format!("str_{size}") }

	pub fn validate(&self) -> Result<()> {
		if self.implementations.is_empty() {
			return Err(Error::config(format!("report `{}` has no implementations", self.name)));
		}
		for panel in &self.panels {
			match panel.source {
				PanelSource::Sweep if self.sweep.is_empty() => {
					return Err(Error::config(format!("panel `{}` plots an empty sweep", panel.title)));
				}
				PanelSource::Case(i) if i >= self.cases.len() => {
					return Err(Error::config(format!("panel `{}` refers to missing case {i}", panel.title)));
				}
				_ => {}
			}
		}
		Ok(())
	}

	/// Case keys of one row, sweep points first.
	pub fn case_keys(&self) -> Vec<String> {
		self.sweep.iter().map(|&s| Self::sweep_case(s)).chain(self.cases.iter().map(|c| c.key.to_string())).collect()
	}
}

/// Row-major matrix: one row per implementation in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricMatrix {
	rows: Vec<Vec<DerivedMetric>>,
}

impl MetricMatrix {
	pub fn rows(&self) -> &[Vec<DerivedMetric>] { &self.rows }
	pub fn row(&self, implementation: usize) -> Option<&[DerivedMetric]> { self.rows.get(implementation).map(Vec::as_slice) }
	pub fn get(&self, implementation: usize, column: usize) -> Option<&DerivedMetric> { self.rows.get(implementation)?.get(column) }
	pub fn column(&self, column: usize) -> impl Iterator<Item = Option<&DerivedMetric>> + '_ { self.rows.iter().map(move |r| r.get(column)) }
}

/// Fully populated matrices of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResult {
	report: &'static str,
	sweep: MetricMatrix,
	cases: MetricMatrix,
}

impl ReportResult {
	pub fn report(&self) -> &'static str { self.report }
	/// Columns follow [`ReportSpec::sweep`].
	pub fn sweep(&self) -> &MetricMatrix { &self.sweep }
	/// Columns follow [`ReportSpec::cases`].
	pub fn cases(&self) -> &MetricMatrix { &self.cases }
}

/// Locate and derive every cell of `spec`.
pub fn build(spec: &ReportSpec, locator: &ArtifactLocator) -> Result<ReportResult> {
	spec.validate()?;
	let span = info_span!("build_report", report = spec.name, group = spec.group);
	let _enter = span.enter();

	let mut sweep = Vec::with_capacity(spec.implementations.len());
	let mut cases = Vec::with_capacity(spec.implementations.len());
	for imp in &spec.implementations {
		let sweep_row = spec.sweep.iter().map(|&size| cell(spec, locator, imp, &ReportSpec::sweep_case(size))).collect::<Result<Vec<_>>>()?;
		let case_row = spec.cases.iter().map(|w| cell(spec, locator, imp, w.key)).collect::<Result<Vec<_>>>()?;
		sweep.push(sweep_row);
		cases.push(case_row);
	}

	for (imp, row) in spec.implementations.iter().zip(&cases) {
		for (w, m) in spec.cases.iter().zip(row) {
			info!(implementation = imp.label, case = w.label, latency_ns = m.latency_ns, throughput = m.throughput, unit = %m.unit, "case result");
		}
	}
	info!(cells = spec.implementations.len() * (spec.sweep.len() + spec.cases.len()), "report built");

	Ok(ReportResult { report: spec.name, sweep: MetricMatrix { rows: sweep }, cases: MetricMatrix { rows: cases } })
}

fn cell(spec: &ReportSpec, locator: &ArtifactLocator, imp: &Implementation, case: &str) -> Result<DerivedMetric> {
	let path = locator.find_latest(spec.group, imp.name, case)?;
	let m = metric::extract(&path, spec.fallback_elements)?;
	debug!(implementation = imp.name, case, latency_ns = m.latency_ns, throughput = m.throughput, unit = %m.unit, "derived");
	Ok(m)
}
