//! Report files held in memory as an indexable list of lines.

use crate::error::AnalysisError;
use std::path::{Path, PathBuf};

/// The text of one timing report, split into lines.
///
/// The file is read once and closed immediately, so the headline and slack
/// passes can both start from the first line without reopening or seeking.
#[derive(Clone, Debug, Default)]
pub struct Report {
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl Report {
    /// Builds a report from in-memory text.
    pub fn from_text(text: &str) -> Self {
        Self {
            path: None,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Reads a report from disk.
    pub fn read(path: &Path) -> Result<Self, AnalysisError> {
        let text = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut report = Self::from_text(&text);
        report.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), lines = report.lines.len(), "read report");
        Ok(report)
    }

    /// Returns the file the report was read from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the report lines in file order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn from_text_splits_lines() {
        let report = Report::from_text("Design: a\r\nSlack: 1ns\n");
        assert_eq!(report.lines(), ["Design: a", "Slack: 1ns"]);
        assert!(report.path().is_none());
    }

    #[test]
    fn read_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("alu.txt");
        fs::write(&path, "Design: alu\nData Path Delay: 1ns\n").unwrap();
        let report = Report::read(&path).unwrap();
        assert_eq!(report.lines().len(), 2);
        assert_eq!(report.path(), Some(path.as_path()));
    }

    #[test]
    fn read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = Report::read(&tmp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
