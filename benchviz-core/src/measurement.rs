//! Decoding of criterion measurement artifacts.
//!
//! An artifact is a CBOR map. Only two paths are read from it:
//! `estimates.mean.point_estimate` (mean latency in nanoseconds) and
//! `throughput`, an externally tagged value `{"Bytes": n}` or
//! `{"Elements": n | null}`. Every other field criterion writes is ignored.

use crate::error::{Error, Result};
use ciborium::value::Value;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Work done by one benchmark iteration, as declared by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
	Bytes(u64),
	/// `None` when the harness recorded no element count.
	Elements(Option<u64>),
}

/// The fields of one artifact that metric derivation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
	/// Always finite and strictly positive.
	pub mean_latency_ns: f64,
	pub size: SizeKind,
}

#[derive(Debug, Deserialize)]
struct RawMeasurement {
	estimates: RawEstimates,
	#[serde(default)]
	throughput: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawEstimates {
	mean: RawEstimate,
}

#[derive(Debug, Deserialize)]
struct RawEstimate {
	point_estimate: f64,
}

impl Measurement {
	/// Read and decode the artifact at `path`.
	pub fn read(path: &Path) -> Result<Self> {
		let file = File::open(path).map_err(|e| Error::io(path, e))?;
		Self::from_reader(BufReader::new(file), path)
	}

	/// Decode an artifact from any reader; `origin` only labels errors.
	pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
		let raw: RawMeasurement = ciborium::from_reader(reader).map_err(|e| Error::decode(origin, e.to_string()))?;

		let mean_latency_ns = raw.estimates.mean.point_estimate;
		if !mean_latency_ns.is_finite() || mean_latency_ns <= 0.0 {
			return Err(Error::decode(origin, format!("mean latency must be positive, got {mean_latency_ns}")));
		}

		let throughput = raw.throughput.ok_or_else(|| Error::malformed_size(origin, "missing throughput"))?;
		let size = SizeKind::from_value(&throughput).map_err(|reason| Error::malformed_size(origin, reason))?;
		Ok(Self { mean_latency_ns, size })
	}
}

impl SizeKind {
	fn from_value(value: &Value) -> core::result::Result<Self, String> {
		let entries = value.as_map().ok_or_else(|| "throughput is not a tagged value".to_string())?;
		let [(tag, count)] = entries.as_slice() else {
			return Err(format!("expected exactly one throughput tag, found {}", entries.len()));
		};
		match tag.as_text() {
			Some("Bytes") => match count_of(count)? {
				Some(n) => Ok(Self::Bytes(n)),
				None => Err("`Bytes` carries no byte count".to_string()),
			},
			Some("Elements") => Ok(Self::Elements(count_of(count)?)),
			Some(other) => Err(format!("unsupported throughput tag `{other}`")),
			None => Err("throughput tag is not a string".to_string()),
		}
	}
}

fn count_of(value: &Value) -> core::result::Result<Option<u64>, String> {
	match value {
		Value::Null => Ok(None),
		Value::Integer(i) => u64::try_from(*i).map(Some).map_err(|_| "negative throughput count".to_string()),
		_ => Err("throughput count is not an integer".to_string()),
	}
}
