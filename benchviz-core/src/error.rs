use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
	/// No `measurement*` file exists for a required triple.
	#[error("no measurement artifact for group `{group}`, implementation `{implementation}`, case `{case}` in {}", dir.display())]
	NotFound { group: String, implementation: String, case: String, dir: PathBuf },
	#[error("cannot decode {}: {reason}", path.display())]
	Decode { path: PathBuf, reason: String },
	/// The `throughput` field is missing or carries neither a `Bytes` nor an `Elements` tag.
	#[error("malformed throughput in {}: {reason}", path.display())]
	MalformedSize { path: PathBuf, reason: String },
	#[error("io: {}: {source}", path.display())]
	Io { path: PathBuf, #[source] source: std::io::Error },
	#[error("config: {0}")]
	Config(String),
}

impl Error {
	pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }
	pub fn decode(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self { Self::Decode { path: path.into(), reason: reason.into() } }
	pub fn malformed_size(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self { Self::MalformedSize { path: path.into(), reason: reason.into() } }
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self { Self::Io { path: path.into(), source } }
}
