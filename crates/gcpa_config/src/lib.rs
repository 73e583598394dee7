//! Parsing and validation of `gcpa.toml` configuration files.
//!
//! The configuration is optional: every setting has a default, and command
//! line flags take precedence over the file.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
