use clap::Parser;
use std::path::PathBuf;

use lockstate::application::dto::OutputFormat;

/// Pretty-print the version constraints recorded for locked dependencies
#[derive(Parser, Debug)]
#[command(name = "lockstate")]
#[command(version)]
#[command(
    about = "Pretty-print the version constraints recorded for locked dependencies",
    long_about = None
)]
pub struct Args {
    /// Dependents report to render
    #[arg(short, long, value_name = "FILE", default_value = "dependents.toml")]
    pub report: PathBuf,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show constraints that differ only by exact-version brackets once
    #[arg(long)]
    pub collapse_duplicates: bool,

    /// Compare the rendered lines against an expected lock-state file
    /// and exit with status 1 when they differ
    #[arg(long, value_name = "FILE")]
    pub verify: Option<PathBuf>,

    /// Config file (defaults to lockstate.config.yml next to the report)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
