//! Per-report results: timing paths and the module record built from them.

use gcpa_common::TimeValue;
use serde::Serialize;
use std::path::PathBuf;

/// Name shown for a report that never declares a design.
pub const UNNAMED_DESIGN: &str = "<unnamed>";

/// One timing path, taken from a single slack block.
///
/// Each field is filled independently; any of them may be missing when the
/// block omits it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SlackEntry {
    /// Start point of the path.
    pub source: Option<String>,
    /// End point of the path.
    pub destination: Option<String>,
    /// Delay along the data path.
    pub data_path_delay: Option<TimeValue>,
}

/// The design name and delay declared before any slack block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Headline {
    /// Value of the first `Design` field.
    pub design_name: Option<String>,
    /// The first parsable `Data Path Delay` after the design name.
    pub critical_path: Option<TimeValue>,
}

/// Everything extracted from one report file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModuleRecord {
    /// The report this record was read from, if it came from disk.
    pub path: Option<PathBuf>,
    /// The block's design name.
    pub design_name: Option<String>,
    /// The delay the report declares for itself.
    pub headline: Option<TimeValue>,
    /// The resolved critical path delay.
    pub critical_path: Option<TimeValue>,
    /// Slack blocks in file order.
    pub slacks: Vec<SlackEntry>,
}

impl ModuleRecord {
    /// Creates a record holding only the headline values.
    pub fn from_headline(headline: Headline) -> Self {
        Self {
            path: None,
            critical_path: headline.critical_path.clone(),
            design_name: headline.design_name,
            headline: headline.critical_path,
            slacks: Vec::new(),
        }
    }

    /// Returns the design name, or [`UNNAMED_DESIGN`].
    pub fn display_name(&self) -> &str {
        self.design_name.as_deref().unwrap_or(UNNAMED_DESIGN)
    }

    /// Returns `true` if the resolved critical path replaced the headline value.
    pub fn is_overridden(&self) -> bool {
        self.critical_path != self.headline
    }
}
