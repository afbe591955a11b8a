//! Error types for `iogen.toml` loading.

use std::path::PathBuf;

/// Errors that can occur when loading or validating an `iogen.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The TOML content could not be parsed into a project configuration.
    #[error("malformed iogen.toml: {0}")]
    Parse(String),

    /// A required setting is absent or empty.
    #[error("iogen.toml must set {0}")]
    Missing(&'static str),

    /// A configured path is blank.
    #[error("'{0}' must name a file")]
    BlankPath(&'static str),
}
