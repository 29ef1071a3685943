//! The two fixed comparison reports, declared as data.
//!
//! Declaration order is meaningful: bar panels draw in this order and line
//! panels draw in reverse so the first entry ends up on top.

use crate::report::{Metric, PanelSource, PanelSpec, ReportSpec};

/// Element count assumed when an artifact records `Elements` without a number.
pub const DEFAULT_FALLBACK_ELEMENTS: u64 = 450_000;

/// Input sizes (bytes) swept by the hash benchmarks.
pub const HASH_SWEEP_SIZES: [u64; 7] = [2, 8, 16, 64, 256, 1024, 4096];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const BLUE: Self = Self(0, 0, 255);
	pub const BLACK: Self = Self(0, 0, 0);
	pub const RED: Self = Self(255, 0, 0);
	pub const MAGENTA: Self = Self(191, 0, 191);
	pub const CYAN: Self = Self(0, 191, 191);
	/// De-emphasised competitors.
	pub const GREY: Self = Self(204, 204, 204);
}

/// One benchmarked implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Implementation {
	/// Key used in artifact directory names.
	pub name: &'static str,
	/// Name drawn on charts.
	pub label: &'static str,
	pub color: Rgb,
}

impl Implementation {
	pub const fn new(name: &'static str, color: Rgb) -> Self { Self { name, label: name, color } }
	pub const fn labelled(name: &'static str, label: &'static str, color: Rgb) -> Self { Self { name, label, color } }
}

/// One benchmark case and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
	pub key: &'static str,
	pub label: &'static str,
}

impl Workload {
	pub const fn new(key: &'static str, label: &'static str) -> Self { Self { key, label } }
}

/// Hash function comparison: byte-stream sweep plus the u64 fast path.
pub fn hash_report() -> ReportSpec {
	ReportSpec {
		name: "hash comparison",
		group: "hash",
		output_file: "bench_hash.svg",
		implementations: vec![
			Implementation::new("rapidhash", Rgb::BLUE),
			Implementation::new("default", Rgb::BLACK),
			Implementation::new("fxhash", Rgb::RED),
			Implementation::new("gxhash", Rgb::MAGENTA),
			Implementation::new("wyhash", Rgb::CYAN),
			Implementation::new("ahash", Rgb::GREY),
			Implementation::new("t1ha", Rgb::GREY),
			Implementation::new("metrohash", Rgb::GREY),
			Implementation::new("seahash", Rgb::GREY),
			Implementation::new("xxhash", Rgb::GREY),
		],
		sweep: HASH_SWEEP_SIZES.to_vec(),
		cases: vec![Workload::new("u64", "u64")],
		fallback_elements: DEFAULT_FALLBACK_ELEMENTS,
		panels: [
			PanelSpec {
				title: "Latency (byte stream)",
				x_label: Some("Input size (bytes)"),
				y_label: "Latency (ns)",
				metric: Metric::Latency,
				source: PanelSource::Sweep,
			},
			PanelSpec {
				title: "Throughput (byte stream)",
				x_label: Some("Input size (bytes)"),
				y_label: "Throughput (GB/s)",
				metric: Metric::Throughput,
				source: PanelSource::Sweep,
			},
			PanelSpec {
				title: "Latency (u64 optimised)",
				x_label: None,
				y_label: "Latency (ns)",
				metric: Metric::Latency,
				source: PanelSource::Case(0),
			},
			PanelSpec {
				title: "Throughput (u64 optimised)",
				x_label: None,
				y_label: "Throughput (M Items/s)",
				metric: Metric::Throughput,
				source: PanelSource::Case(0),
			},
		],
	}
}

/// Hash map insertion comparison across four datasets.
pub fn map_report() -> ReportSpec {
	let throughput = |title: &'static str, case: usize| PanelSpec {
		title,
		x_label: None,
		y_label: "Throughput (M Items/s)",
		metric: Metric::Throughput,
		source: PanelSource::Case(case),
	};
	ReportSpec {
		name: "map-insertion comparison",
		group: "map",
		output_file: "bench_insert.svg",
		implementations: vec![
			Implementation::labelled("rapidhash_inline", "rapidhash", Rgb::BLUE),
			Implementation::new("default", Rgb::BLACK),
			Implementation::new("fxhash", Rgb::RED),
			Implementation::new("gxhash", Rgb::MAGENTA),
			Implementation::new("wyhash", Rgb::CYAN),
		],
		sweep: Vec::new(),
		cases: vec![
			Workload::new("10000_emails", "emails"),
			Workload::new("450000_words", "words"),
			Workload::new("100000_u64", "u64"),
			Workload::new("10000_struct", "structs"),
		],
		fallback_elements: DEFAULT_FALLBACK_ELEMENTS,
		panels: [
			throughput("Throughput (emails)", 0),
			throughput("Throughput (words)", 1),
			throughput("Throughput (u64)", 2),
			throughput("Throughput (structs)", 3),
		],
	}
}

/// Every report, in the order they are produced.
pub fn all_reports() -> Vec<ReportSpec> { vec![hash_report(), map_report()] }
