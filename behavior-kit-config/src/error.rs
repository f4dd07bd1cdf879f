//! Typed error variants for the behavior-kit-config crate.
//!
//! Callers that only want a message can use the `Display` output; callers
//! that want to react to a specific failure mode can match on the variants.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading, validating, or saving binding config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("I/O error on binding config '{}': {source}", path.display())]
    Io {
        /// File that was being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The YAML could not be parsed into a [`crate::BindingsConfig`].
    #[error("YAML parse error in binding config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// An entry parsed but is not meaningful.
    ///
    /// `index` is the position of the offending entry in the `bindings` list.
    #[error("invalid binding entry {index}: {reason}")]
    Validation {
        /// Position of the entry in the config list.
        index: usize,
        /// Human-readable reason.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
