//! gcpa — the Global Critical Path delay Analyzer.
//!
//! Scans one static timing analysis report per design block, resolves each
//! block's critical path, and reports the block with the largest critical
//! path across the whole design.

#![warn(missing_docs)]

mod analyze;
mod render;
mod validate;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// gcpa — find the dominant critical path across per-block timing reports.
#[derive(Parser, Debug)]
#[command(name = "gcpa", version, about = "Global Critical Path delay Analyzer")]
pub struct Cli {
    /// Suppress all output except errors and the summary.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a custom `gcpa.toml` configuration file.
    #[arg(long)]
    pub config: Option<String>,

    /// Output format for the summary (overrides the configuration).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Trust each report's headline delay and skip its slack blocks.
    #[arg(long)]
    pub headline_only: bool,

    /// Timing report files (`.txt`), analyzed in the given order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Summary output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

impl From<OutputFormat> for gcpa_config::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => gcpa_config::ReportFormat::Text,
            OutputFormat::Json => gcpa_config::ReportFormat::Json,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress progress output.
    pub quiet: bool,
    /// Number of `-v` flags given.
    pub verbose: u8,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config.clone(),
    };
    init_logging(&global);

    match analyze::run(&cli, &global) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(global.quiet, global.verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
