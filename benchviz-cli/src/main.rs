#![forbid(unsafe_code)]

//! `benchviz`: reads the latest criterion measurements under
//! `target/criterion/data/main` and writes `bench_hash.svg` and
//! `bench_insert.svg` to the working directory.

mod pipeline;

use benchviz_core::ReportConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "benchviz", version, about = "Render hash and map benchmark charts from criterion data")]
struct Cli {}

fn main() -> anyhow::Result<()> {
	let _cli = Cli::parse();
	let cfg = ReportConfig::default();
	cfg.validate()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	pipeline::run(&cfg)?;
	Ok(())
}
