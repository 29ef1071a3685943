//! Report settings. Not read by the `benchviz` binary, which uses the defaults.

use crate::error::{Error, Result};
use crate::locator::Selection;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

/// Where criterion keeps its raw measurement data, relative to the working directory.
pub const DEFAULT_ARTIFACTS_ROOT: &str = "target/criterion/data/main";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
	pub artifacts_root: PathBuf,
	pub output_dir: PathBuf,
	pub selection: Selection,
	pub log_level: String,
}

impl Default for ReportConfig {
	fn default() -> Self {
		Self {
			artifacts_root: PathBuf::from(DEFAULT_ARTIFACTS_ROOT),
			output_dir: PathBuf::from("."),
			selection: Selection::Lexicographic,
			log_level: "info".into(),
		}
	}
}

impl ReportConfig {
	pub fn builder() -> ReportConfigBuilder { ReportConfigBuilder { cfg: Self::default() } }

	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
		let cfg: Self = toml::from_str(&data).map_err(|e| Error::config(format!("toml parse error: {e}")))?;
		cfg.validate()?;
		Ok(cfg)
	}

	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let data = toml::to_string_pretty(self).map_err(|e| Error::config(format!("toml encode error: {e}")))?;
		fs::write(path, data).map_err(|e| Error::io(path, e))
	}

	pub fn validate(&self) -> Result<()> {
		let allowed = ["trace", "debug", "info", "warn", "error"];
		if !allowed.contains(&self.log_level.as_str()) {
			return Err(Error::config(format!("invalid log_level: {}", self.log_level)));
		}
		if self.artifacts_root.as_os_str().is_empty() {
			return Err(Error::config("artifacts_root must not be empty"));
		}
		if self.output_dir.as_os_str().is_empty() {
			return Err(Error::config("output_dir must not be empty"));
		}
		Ok(())
	}
}

#[derive(Debug, Clone)]
pub struct ReportConfigBuilder {
	cfg: ReportConfig,
}

impl ReportConfigBuilder {
	pub fn artifacts_root(mut self, root: impl Into<PathBuf>) -> Self { self.cfg.artifacts_root = root.into(); self }
	pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self { self.cfg.output_dir = dir.into(); self }
	pub fn selection(mut self, selection: Selection) -> Self { self.cfg.selection = selection; self }
	pub fn log_level(mut self, level: impl Into<String>) -> Self { self.cfg.log_level = level.into(); self }

	pub fn build(self) -> Result<ReportConfig> {
		self.cfg.validate()?;
		Ok(self.cfg)
	}
}
