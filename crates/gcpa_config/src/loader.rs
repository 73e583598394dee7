//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GcpaConfig;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "gcpa.toml";

/// Returns `<dir>/gcpa.toml` if it exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<GcpaConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<GcpaConfig, ConfigError> {
    let config: GcpaConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GcpaConfig) -> Result<(), ConfigError> {
    if config.report.divider_width == 0 {
        return Err(ConfigError::InvalidValue {
            key: "report.divider_width",
            reason: "must be at least 1",
        });
    }
    Ok(())
}
