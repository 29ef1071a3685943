use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
	/// The report result does not match the panels that should show it.
	#[error("layout: {0}")]
	Layout(String),
	#[error("drawing failed: {0}")]
	Draw(String),
	#[error("io: {}: {source}", path.display())]
	Io { path: PathBuf, #[source] source: std::io::Error },
}

impl ChartError {
	pub fn layout(msg: impl Into<String>) -> Self { Self::Layout(msg.into()) }
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self { Self::Io { path: path.into(), source } }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
	fn from(e: DrawingAreaErrorKind<E>) -> Self { Self::Draw(e.to_string()) }
}
