//! Critical path resolution for a single report.
//!
//! The headline delay a report declares for itself is only trusted in
//! headline-only mode. Otherwise the critical path is the largest data path
//! delay among the report's slack blocks, and it replaces the headline
//! whenever the two are not written identically, whether the derived value is
//! larger or smaller.

use crate::error::AnalysisError;
use crate::module::ModuleRecord;
use crate::report::Report;
use crate::scanner::ReportScanner;
use gcpa_common::max_by_magnitude;
use std::path::Path;

/// Options controlling how a report's critical path is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Skip slack blocks and keep the headline delay.
    pub headline_only: bool,
}

/// Resolves the critical path of a report held as lines.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptySlackList`] when slack blocks are read but
/// none has a parsable delay, and [`AnalysisError::Time`] when a slack delay
/// uses an unsupported unit.
pub fn resolve_module(
    lines: &[String],
    options: ResolveOptions,
) -> Result<ModuleRecord, AnalysisError> {
    let mut scanner = ReportScanner::new(lines);
    let mut record = ModuleRecord::from_headline(scanner.headline_pass());
    if options.headline_only {
        return Ok(record);
    }

    record.slacks = scanner.slack_pass();

    let delays = record
        .slacks
        .iter()
        .filter_map(|slack| slack.data_path_delay.as_ref().map(|delay| ((), delay)));
    let Some((_, max)) = max_by_magnitude(delays)? else {
        return Err(AnalysisError::EmptySlackList {
            design: record.display_name().to_string(),
        });
    };

    if record.headline.as_ref() != Some(max) {
        tracing::debug!(
            design = record.display_name(),
            headline = ?record.headline.as_ref().map(ToString::to_string),
            derived = %max,
            "headline critical path overridden"
        );
        record.critical_path = Some(max.clone());
    }

    Ok(record)
}

/// Reads a report file and resolves its critical path.
pub fn analyze_file(path: &Path, options: ResolveOptions) -> Result<ModuleRecord, AnalysisError> {
    let report = Report::read(path)?;
    let mut record = resolve_module(report.lines(), options)?;
    record.path = report.path().map(Path::to_path_buf);
    Ok(record)
}
