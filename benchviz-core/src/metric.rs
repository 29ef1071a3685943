//! Latency and throughput derived from one measurement.

use crate::error::Result;
use crate::measurement::{Measurement, SizeKind};
use std::fmt;
use std::path::Path;

const NANOS_PER_SECOND: f64 = 1e9;
const BYTES_PER_GIGABYTE: f64 = 1e9;
const ITEMS_PER_MILLION: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThroughputUnit {
	GigabytesPerSecond,
	MillionItemsPerSecond,
}

impl fmt::Display for ThroughputUnit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::GigabytesPerSecond => "GB/s",
			Self::MillionItemsPerSecond => "M items/s",
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetric {
	pub latency_ns: f64,
	pub throughput: f64,
	pub unit: ThroughputUnit,
}

impl DerivedMetric {
	/// Derive the metric pair. `fallback_elements` replaces a missing element count.
	pub fn derive(m: &Measurement, fallback_elements: u64) -> Self {
		let latency_ns = m.mean_latency_ns;
		let iterations_per_second = NANOS_PER_SECOND / latency_ns;
		let (throughput, unit) = match m.size {
			SizeKind::Bytes(size) => (iterations_per_second * size as f64 / BYTES_PER_GIGABYTE, ThroughputUnit::GigabytesPerSecond),
			SizeKind::Elements(count) => {
				let count = count.unwrap_or(fallback_elements);
				(iterations_per_second * count as f64 / ITEMS_PER_MILLION, ThroughputUnit::MillionItemsPerSecond)
			}
		};
		Self { latency_ns, throughput, unit }
	}
}

/// Decode the artifact at `path` and derive its metric pair.
pub fn extract(path: &Path, fallback_elements: u64) -> Result<DerivedMetric> {
	let m = Measurement::read(path)?;
	Ok(DerivedMetric::derive(&m, fallback_elements))
}
