//! Summary rendering for terminal and JSON output.

use gcpa_common::TimeValue;
use gcpa_timing::{AnalysisSummary, ModuleRecord, SlackEntry};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Shown in place of a module's critical path when it has none.
const MISSING_DELAY: &str = "n/a";

/// Renders the per-block and global summary as text.
///
/// ```text
/// ------------------------------------------
/// Block: 'BlockA',
/// Max Path Delay: 5ns
///
/// ------------------------------------------
/// Global Critical Path Block: 'BlockA', with Critical Path Delay: 5ns
/// ```
pub fn render_text(summary: &AnalysisSummary, divider_width: usize) -> String {
    let divider = "-".repeat(divider_width);
    let mut out = String::new();

    let _ = writeln!(out, "{divider}");
    for module in summary.modules() {
        let delay = module
            .critical_path
            .as_ref()
            .map_or_else(|| MISSING_DELAY.to_string(), ToString::to_string);
        let _ = writeln!(out, "Block: '{}',", module.display_name());
        let _ = writeln!(out, "Max Path Delay: {delay}");
        out.push('\n');
    }

    let _ = writeln!(out, "{divider}");
    let global = summary.global();
    let _ = writeln!(
        out,
        "Global Critical Path Block: '{}', with Critical Path Delay: {}",
        global.display_name(),
        global.critical_path
    );
    out
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    modules: Vec<JsonModule<'a>>,
    global: JsonGlobal<'a>,
}

#[derive(Serialize)]
struct JsonModule<'a> {
    design: Option<&'a str>,
    path: Option<&'a Path>,
    critical_path: Option<&'a TimeValue>,
    headline: Option<&'a TimeValue>,
    overridden: bool,
    slacks: &'a [SlackEntry],
}

#[derive(Serialize)]
struct JsonGlobal<'a> {
    design: Option<&'a str>,
    critical_path: &'a TimeValue,
}

impl<'a> From<&'a ModuleRecord> for JsonModule<'a> {
    fn from(module: &'a ModuleRecord) -> Self {
        Self {
            design: module.design_name.as_deref(),
            path: module.path.as_deref(),
            critical_path: module.critical_path.as_ref(),
            headline: module.headline.as_ref(),
            overridden: module.is_overridden(),
            slacks: &module.slacks,
        }
    }
}

/// Renders the summary as pretty-printed JSON.
pub fn render_json(summary: &AnalysisSummary) -> Result<String, serde_json::Error> {
    let global = summary.global();
    let json = JsonSummary {
        modules: summary.modules().map(JsonModule::from).collect(),
        global: JsonGlobal {
            design: global.design_name.as_deref(),
            critical_path: &global.critical_path,
        },
    };
    let mut out = serde_json::to_string_pretty(&json)?;
    out.push('\n');
    Ok(out)
}
