//! Configuration types deserialized from `gcpa.toml`.

use serde::Deserialize;

/// Default width of the divider lines in text output.
pub const DEFAULT_DIVIDER_WIDTH: usize = 100;

/// The top-level configuration parsed from `gcpa.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct GcpaConfig {
    /// How reports are analyzed.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// How the summary is printed.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Analysis settings.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Trust each report's headline delay instead of deriving it from slack blocks.
    #[serde(default)]
    pub headline_only: bool,
}

/// Output settings.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// The summary output format.
    #[serde(default)]
    pub format: ReportFormat,
    /// Number of `-` characters in each divider line.
    #[serde(default = "default_divider_width")]
    pub divider_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            divider_width: DEFAULT_DIVIDER_WIDTH,
        }
    }
}

fn default_divider_width() -> usize {
    DEFAULT_DIVIDER_WIDTH
}

/// Summary output format.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}
