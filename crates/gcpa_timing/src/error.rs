//! Errors that abort an analysis run.

use gcpa_common::TimeError;
use std::path::PathBuf;

/// Errors produced while reading reports or resolving critical paths.
///
/// Every variant is fatal for the whole run: there is no partial summary.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The report file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        /// The report that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A delay could not be normalized to nanoseconds.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// No slack block in a report carried a parsable data path delay.
    #[error("no slack block with a data path delay found for design '{design}'")]
    EmptySlackList {
        /// The design name, or a placeholder when the report has none.
        design: String,
    },

    /// None of the analyzed modules has a critical path.
    #[error("no critical path found in any of the analyzed reports")]
    EmptyInput,
}
