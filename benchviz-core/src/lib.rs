#![forbid(unsafe_code)]

//! Benchviz core: turns criterion measurement artifacts into comparison matrices.
//!
//! Pipeline: [`locator::ArtifactLocator`] finds the latest artifact of a
//! (group, implementation, case) triple, [`metric::extract`] decodes it and
//! derives latency/throughput, and [`report::build`] fills the matrices of a
//! [`report::ReportSpec`] declared in [`roster`].
//!
//! The `benchviz` binary always runs with [`ReportConfig::default`]. Loading
//! a [`ReportConfig`] from TOML and [`Selection::Modified`] are library API
//! for callers that keep criterion data elsewhere or copy artifacts around.

pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fixtures;
pub mod locator;
pub mod measurement;
pub mod metric;
pub mod report;
pub mod roster;

pub use config::ReportConfig;
pub use error::{Error, Result};
pub use locator::{ArtifactLocator, Selection};
pub use measurement::{Measurement, SizeKind};
pub use metric::{extract, DerivedMetric, ThroughputUnit};
pub use report::{build, Metric, MetricMatrix, PanelSource, PanelSpec, ReportResult, ReportSpec};
pub use roster::{all_reports, hash_report, map_report, Implementation, Rgb, Workload};
