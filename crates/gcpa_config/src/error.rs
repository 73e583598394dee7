//! Error types for configuration loading and validation.

use std::path::PathBuf;

/// Errors that can occur when loading a `gcpa.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file named by `--config` or found in the working directory could
    /// not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the `gcpa.toml` layout.
    #[error("invalid gcpa.toml: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting parsed but has an unusable value.
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue {
        /// Dotted key of the setting, e.g. `report.divider_width`.
        key: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_value() {
        let err = ConfigError::InvalidValue {
            key: "report.divider_width",
            reason: "must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid value for `report.divider_width`: must be at least 1"
        );
    }

    #[test]
    fn display_read_names_the_file() {
        let err = ConfigError::Read {
            path: PathBuf::from("build/gcpa.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot read config build/gcpa.toml: denied");
    }

    #[test]
    fn parse_wraps_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("headline_only = ").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("invalid gcpa.toml: "));
    }
}
