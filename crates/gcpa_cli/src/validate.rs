//! Checks applied to every report path before it is analyzed.

use std::path::{Path, PathBuf};

/// A report path that cannot be analyzed.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The path does not exist.
    #[error("'{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// The path does not end in `.txt`.
    #[error("'{}' is not a .txt file", .0.display())]
    UnsupportedExtension(PathBuf),
}

/// Checks that `path` exists and has a `.txt` extension (any case).
pub fn validate_report_path(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::FileNotFound(path.to_path_buf()));
    }
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(ValidationError::UnsupportedExtension(path.to_path_buf()));
    }
    Ok(())
}
