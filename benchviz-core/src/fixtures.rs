//! Writers for synthetic criterion artifact trees, shared by the workspace tests.

use crate::locator::ArtifactLocator;
use crate::report::ReportSpec;
use crate::roster::Implementation;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name used for artifacts written by [`ArtifactTree::populate`].
pub const ARTIFACT_NAME: &str = "measurement_240501120000.cbor";

/// Mirror of criterion's throughput enum as it appears on disk.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Throughput {
	Bytes(u64),
	Elements(Option<u64>),
}

#[derive(Serialize)]
struct Estimate {
	point_estimate: f64,
	standard_error: f64,
}

#[derive(Serialize)]
struct Estimates {
	mean: Estimate,
	median: Estimate,
}

#[derive(Serialize)]
struct SavedMeasurement<'a> {
	datetime: &'a str,
	iterations: Vec<f64>,
	values: Vec<f64>,
	estimates: Estimates,
	throughput: Option<Throughput>,
}

/// Root of a `<group>_<implementation>/<case>/measurement*` tree.
#[derive(Debug, Clone)]
pub struct ArtifactTree {
	root: PathBuf,
}

impl ArtifactTree {
	pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

	pub fn root(&self) -> &Path { &self.root }

	/// Write one artifact and return its path.
	pub fn write(&self, group: &str, implementation: &str, case: &str, file: &str, mean_ns: f64, throughput: Option<Throughput>) -> io::Result<PathBuf> {
		let record = SavedMeasurement {
			datetime: "2024-05-01T12:00:00Z",
			iterations: vec![1.0, 2.0, 3.0],
			values: vec![mean_ns, mean_ns * 2.0, mean_ns * 3.0],
			estimates: Estimates {
				mean: Estimate { point_estimate: mean_ns, standard_error: 0.0 },
				median: Estimate { point_estimate: mean_ns, standard_error: 0.0 },
			},
			throughput,
		};
		let mut buf = Vec::new();
		ciborium::into_writer(&record, &mut buf).map_err(|e| io::Error::other(e.to_string()))?;
		self.write_bytes(group, implementation, case, file, &buf)
	}

	/// Write arbitrary bytes as an artifact.
	pub fn write_bytes(&self, group: &str, implementation: &str, case: &str, file: &str, bytes: &[u8]) -> io::Result<PathBuf> {
		let dir = ArtifactLocator::new(&self.root, Default::default()).case_dir(group, implementation, case);
		fs::create_dir_all(&dir)?;
		let path = dir.join(file);
		fs::write(&path, bytes)?;
		Ok(path)
	}

	/// Write one artifact for every cell of `spec`.
	///
	/// Sweep cells declare `Bytes(size)`, fixed cases declare `Elements`
	/// without a count. `latency` picks the mean for each cell.
	pub fn populate(&self, spec: &ReportSpec, latency: impl Fn(&Implementation, &str) -> f64) -> io::Result<()> {
		for imp in &spec.implementations {
			for &size in &spec.sweep {
				let case = ReportSpec::sweep_case(size);
				self.write(spec.group, imp.name, &case, ARTIFACT_NAME, latency(imp, &case), Some(Throughput::Bytes(size)))?;
			}
			for w in &spec.cases {
				self.write(spec.group, imp.name, w.key, ARTIFACT_NAME, latency(imp, w.key), Some(Throughput::Elements(None)))?;
			}
		}
		Ok(())
	}
}
