//! Error types for behavior attachment and binding overrides.

use behavior_kit_config::ConfigError;
use thiserror::Error;

/// Errors raised by behavior-kit.
#[derive(Debug, Error)]
pub enum BehaviorError {
    /// The control was dropped before the behavior could attach to it.
    #[error("cannot attach a behavior: the control no longer exists")]
    MissingControl,

    /// The binding override file could not be loaded.
    #[error("failed to load binding overrides: {0}")]
    Config(#[from] ConfigError),
}

impl BehaviorError {
    /// Whether a required value was absent.
    pub fn is_missing_value(&self) -> bool {
        matches!(self, BehaviorError::MissingControl)
    }
}
