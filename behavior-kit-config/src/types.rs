//! Binding override types.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

// ============================================================================
// Phase names
// ============================================================================

/// Event phase a configured binding fires on.
///
/// Which names are legal depends on the entry kind: `typed` is never accepted
/// for key entries, and `clicked`/`moved`/`dragged`/`entered`/`exited` only
/// make sense for mouse entries. That check happens when the entry is turned
/// into a binding, not at parse time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseName {
    /// Fire on every phase of the entry's event kind
    Any,
    /// Key or button went down
    #[default]
    Pressed,
    /// Key or button went up
    Released,
    /// Character input (never valid for key chords)
    Typed,
    /// Press and release on the same control
    Clicked,
    /// Pointer moved with no button held
    Moved,
    /// Pointer moved with a button held
    Dragged,
    /// Pointer entered the control
    Entered,
    /// Pointer left the control
    Exited,
}

// ============================================================================
// Entries
// ============================================================================

/// A single binding override.
///
/// Exactly one of `key` or `mouse` must be set.
///
/// ```yaml
/// - key: "Ctrl+Left"
///   action: decrement_block
/// - mouse: "Primary"
///   action: arm
///   phase: released
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Key chord string, e.g. "Shortcut+Shift+B"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Mouse input string, e.g. "Shift+Secondary"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse: Option<String>,
    /// Registered action name, e.g. "increment"
    pub action: String,
    /// Phase to fire on; defaults to `pressed`
    #[serde(default)]
    pub phase: PhaseName,
}

impl BindingConfig {
    /// Key entry firing on press.
    pub fn key(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            mouse: None,
            action: action.into(),
            phase: PhaseName::default(),
        }
    }

    /// Mouse entry firing on press.
    pub fn mouse(mouse: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: None,
            mouse: Some(mouse.into()),
            action: action.into(),
            phase: PhaseName::default(),
        }
    }

    /// Replace the phase.
    pub fn on(mut self, phase: PhaseName) -> Self {
        self.phase = phase;
        self
    }

    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: &str| ConfigError::Validation {
            index,
            reason: reason.to_string(),
        };
        match (&self.key, &self.mouse) {
            (Some(_), Some(_)) => return Err(invalid("both 'key' and 'mouse' are set")),
            (None, None) => return Err(invalid("one of 'key' or 'mouse' is required")),
            _ => {}
        }
        if self.action.trim().is_empty() {
            return Err(invalid("'action' is empty"));
        }
        Ok(())
    }
}

/// Root of a binding override file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingsConfig {
    /// Overrides in declaration order
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

impl BindingsConfig {
    /// Check every entry, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        self.bindings
            .iter()
            .enumerate()
            .try_for_each(|(index, binding)| binding.validate(index))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the file declares no entries.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_defaults_to_pressed() {
        assert_eq!(PhaseName::default(), PhaseName::Pressed);
        assert_eq!(BindingConfig::key("A", "go").phase, PhaseName::Pressed);
    }

    #[test]
    fn test_validate_rejects_both_sources() {
        let config = BindingsConfig {
            bindings: vec![BindingConfig {
                key: Some("A".to_string()),
                mouse: Some("Primary".to_string()),
                action: "go".to_string(),
                phase: PhaseName::Pressed,
            }],
        };
        match config.validate() {
            Err(ConfigError::Validation { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.contains("both"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_missing_source_and_empty_action() {
        let missing = BindingsConfig {
            bindings: vec![
                BindingConfig::key("A", "go"),
                BindingConfig {
                    key: None,
                    mouse: None,
                    action: "go".to_string(),
                    phase: PhaseName::Any,
                },
            ],
        };
        assert!(matches!(
            missing.validate(),
            Err(ConfigError::Validation { index: 1, .. })
        ));

        let empty_action = BindingsConfig {
            bindings: vec![BindingConfig::mouse("Primary", "  ")],
        };
        assert!(empty_action.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_entries() {
        let config = BindingsConfig {
            bindings: vec![
                BindingConfig::key("Ctrl+Left", "decrement"),
                BindingConfig::mouse("Primary", "arm").on(PhaseName::Clicked),
            ],
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.len(), 2);
        assert!(!config.is_empty());
    }
}
