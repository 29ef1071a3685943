//! Finds the latest measurement artifact criterion left for a benchmark.
//!
//! Artifacts live under `<root>/<group>_<implementation>/<case>/measurement*`.
//! The harness names them with a zero-padded timestamp, so the
//! lexicographically greatest name is the most recent run.

use crate::config::ReportConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// File name prefix of every measurement artifact.
pub const MEASUREMENT_PREFIX: &str = "measurement";

/// How "latest" is decided among several candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
	/// Greatest file name wins.
	#[default]
	Lexicographic,
	/// Newest modification time wins, ties broken by file name.
	Modified,
}

#[derive(Debug, Clone)]
pub struct ArtifactLocator {
	root: PathBuf,
	selection: Selection,
}

struct Candidate {
	name: String,
	path: PathBuf,
	modified: Option<SystemTime>,
}

impl ArtifactLocator {
	pub fn new(root: impl Into<PathBuf>, selection: Selection) -> Self {
		Self { root: root.into(), selection }
	}

	pub fn from_config(cfg: &ReportConfig) -> Self { Self::new(&cfg.artifacts_root, cfg.selection) }

	pub fn root(&self) -> &Path { &self.root }

	/// Directory holding every run of one (group, implementation, case) triple.
	pub fn case_dir(&self, group: &str, implementation: &str, case: &str) -> PathBuf {
		self.root.join(format!("{group}_{implementation}")).join(case)
	}

	/// Path of the latest artifact for the triple.
	///
	/// # Errors
	/// `NotFound` when the case directory is missing or holds no
	/// `measurement*` file; `Io` for any other listing failure.
	pub fn find_latest(&self, group: &str, implementation: &str, case: &str) -> Result<PathBuf> {
		let dir = self.case_dir(group, implementation, case);
		let not_found = || Error::NotFound {
			group: group.to_string(),
			implementation: implementation.to_string(),
			case: case.to_string(),
			dir: dir.clone(),
		};

		let entries = match fs::read_dir(&dir) {
			Ok(entries) => entries,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
			Err(e) => return Err(Error::io(&dir, e)),
		};

		let mut candidates = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|e| Error::io(&dir, e))?;
			let Ok(name) = entry.file_name().into_string() else { continue };
			if !name.starts_with(MEASUREMENT_PREFIX) { continue; }
			let path = entry.path();
			let meta = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
			if !meta.is_file() {
				warn!(path = %path.display(), "skipping non-file measurement candidate");
				continue;
			}
			let modified = match self.selection {
				Selection::Lexicographic => None,
				Selection::Modified => Some(meta.modified().map_err(|e| Error::io(&path, e))?),
			};
			candidates.push(Candidate { name, path, modified });
		}

		let latest = candidates
			.into_iter()
			.max_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.name.cmp(&b.name)))
			.ok_or_else(not_found)?;
		debug!(group, implementation, case, artifact = %latest.path.display(), "selected artifact");
		Ok(latest.path)
	}
}
