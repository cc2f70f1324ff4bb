//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a [`DropdownConfig`](crate::DropdownConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has fields of the wrong type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed but make no sense together.
    #[error("invalid config: {0}")]
    Invalid(String),
}
