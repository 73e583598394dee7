//! The analysis run: validate, scan, resolve and print.
//!
//! Reports are handled strictly one at a time in command-line order:
//!
//! 1. Load `gcpa.toml` (from `--config` or the working directory) if present
//! 2. Validate the report path
//! 3. Read the report and resolve its critical path
//! 4. Add the module to the global summary
//! 5. Select the global critical path and print the summary
//!
//! Any failure aborts the run before anything is printed to stdout.

use std::path::PathBuf;

use gcpa_config::{GcpaConfig, ReportFormat};
use gcpa_timing::{analyze_file, AnalysisSummary, GlobalSummary, ResolveOptions};

use crate::render::{render_json, render_text};
use crate::validate::validate_report_path;
use crate::{Cli, GlobalArgs};

/// Settings for one run, after merging the config file with CLI flags.
#[derive(Debug, PartialEq, Eq)]
pub struct RunSettings {
    /// Resolution options passed to every report.
    pub resolve: ResolveOptions,
    /// Output format.
    pub format: ReportFormat,
    /// Divider width for text output.
    pub divider_width: usize,
}

/// Runs the analysis and prints the summary.
///
/// Returns exit code 0 on success; every failure is returned as an error.
pub fn run(cli: &Cli, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings_file(global)?;
    let settings = merge_settings(&config, cli);
    tracing::debug!(?settings, "resolved run settings");

    let summary = analyze_reports(&cli.files, settings.resolve, global)?;

    let output = match settings.format {
        ReportFormat::Text => render_text(&summary, settings.divider_width),
        ReportFormat::Json => render_json(&summary)?,
    };
    print!("{output}");

    Ok(0)
}

/// Validates and analyzes every report, in order, stopping at the first failure.
pub fn analyze_reports(
    files: &[PathBuf],
    options: ResolveOptions,
    global: &GlobalArgs,
) -> Result<AnalysisSummary, Box<dyn std::error::Error>> {
    let mut summary = GlobalSummary::new();
    for path in files {
        validate_report_path(path)?;
        if !global.quiet {
            eprintln!("       Found {}", path.display());
        }

        let record = analyze_file(path, options)?;
        tracing::info!(
            path = %path.display(),
            design = record.display_name(),
            slacks = record.slacks.len(),
            "analyzed report"
        );
        summary.insert(record);
    }
    Ok(summary.finish()?)
}

/// Loads the config file named by `--config`, or `./gcpa.toml` if present.
fn load_settings_file(global: &GlobalArgs) -> Result<GcpaConfig, Box<dyn std::error::Error>> {
    let path = match &global.config {
        Some(path) => Some(PathBuf::from(path)),
        None => gcpa_config::find_config(&std::env::current_dir()?),
    };
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            Ok(gcpa_config::load_config(&path)?)
        }
        None => Ok(GcpaConfig::default()),
    }
}

/// Merges CLI flags over the config file.
///
/// `--headline-only` can only switch headline-only mode on; `--format`
/// replaces the configured format.
fn merge_settings(config: &GcpaConfig, cli: &Cli) -> RunSettings {
    RunSettings {
        resolve: ResolveOptions {
            headline_only: cli.headline_only || config.analysis.headline_only,
        },
        format: cli.format.map_or(config.report.format, Into::into),
        divider_width: config.report.divider_width,
    }
}
