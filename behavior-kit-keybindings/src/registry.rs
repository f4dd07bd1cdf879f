//! Named actions and config-driven binding tables.

use std::collections::HashMap;
use std::fmt;

use behavior_kit_config::{BindingConfig, PhaseName};

use crate::binding::{Action, Binding, BindingError, KeyBinding, MouseBinding, RequiredField};
use crate::event::{KeyPhase, MousePhase, Phase};
use crate::input_bindings::InputBindings;
use crate::parser::{self, ParseError};

/// Registry of actions a behavior exposes to user configuration.
pub struct ActionRegistry<B> {
    actions: HashMap<String, Action<B>>,
}

impl<B> ActionRegistry<B> {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register `run` under `name`, replacing any earlier action of that name.
    pub fn register<F>(&mut self, name: &str, run: F) -> &mut Self
    where
        F: Fn(&B) + Send + Sync + 'static,
    {
        self.insert(Action::named(name, run))
    }

    /// Register a pre-built named action. Unnamed actions are ignored.
    pub fn insert(&mut self, action: Action<B>) -> &mut Self {
        match action.name() {
            Some(name) => {
                if self.actions.insert(name.to_string(), action.clone()).is_some() {
                    log::debug!("Replaced registered action '{}'", name);
                }
            }
            None => log::warn!("Ignoring unnamed action {:?}", action),
        }
        self
    }

    /// Builder-style [`Self::register`].
    pub fn with<F>(mut self, name: &str, run: F) -> Self
    where
        F: Fn(&B) + Send + Sync + 'static,
    {
        self.register(name, run);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Action<B>> {
        self.actions.get(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<B> Default for ActionRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for ActionRegistry<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.actions.keys().collect();
        names.sort();
        f.debug_struct("ActionRegistry").field("actions", &names).finish()
    }
}

/// Why a config entry could not become a binding.
#[derive(Debug)]
enum EntryError {
    UnknownAction,
    Parse(ParseError),
    Phase(PhaseName),
    Binding(BindingError),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::UnknownAction => write!(f, "no action registered under that name"),
            EntryError::Parse(e) => write!(f, "{}", e),
            EntryError::Phase(phase) => write!(f, "phase '{:?}' does not apply here", phase),
            EntryError::Binding(e) => write!(f, "{}", e),
        }
    }
}

impl<B> InputBindings<B> {
    /// Build a table from user config.
    ///
    /// Invalid entries are logged and skipped.
    pub fn from_config(entries: &[BindingConfig], actions: &ActionRegistry<B>) -> Self {
        log::info!(
            "Building input bindings from {} config entries",
            entries.len()
        );

        let bindings: Vec<Binding<B>> = entries
            .iter()
            .filter_map(|entry| match binding_from_config(entry, actions) {
                Ok(binding) => {
                    log::info!("Registered binding: {:?} -> {}", binding, entry.action);
                    Some(binding)
                }
                Err(e) => {
                    log::warn!(
                        "Invalid binding '{}' for action '{}': {}",
                        entry.key.as_deref().or(entry.mouse.as_deref()).unwrap_or(""),
                        entry.action,
                        e
                    );
                    None
                }
            })
            .collect();

        let table = InputBindings::new(bindings);
        log::info!("Input bindings initialized with {} bindings", table.len());
        table
    }
}

fn binding_from_config<B>(
    entry: &BindingConfig,
    actions: &ActionRegistry<B>,
) -> Result<Binding<B>, EntryError> {
    let action = actions
        .get(&entry.action)
        .cloned()
        .ok_or(EntryError::UnknownAction)?;

    match (&entry.key, &entry.mouse) {
        (Some(key), None) => {
            let chord = parser::parse_key_chord(key).map_err(EntryError::Parse)?;
            let phase = key_phase(entry.phase)?;
            KeyBinding::new(vec![chord], phase, action)
                .map(Binding::from)
                .map_err(EntryError::Binding)
        }
        (None, Some(mouse)) => {
            let input = parser::parse_mouse_input(mouse).map_err(EntryError::Parse)?;
            let phase = mouse_phase(entry.phase)?;
            MouseBinding::new(vec![input], phase, action)
                .map(Binding::from)
                .map_err(EntryError::Binding)
        }
        _ => Err(EntryError::Binding(BindingError::Missing(
            RequiredField::KeyChords,
        ))),
    }
}

fn key_phase(phase: PhaseName) -> Result<Phase<KeyPhase>, EntryError> {
    match phase {
        PhaseName::Any => Ok(Phase::Any),
        PhaseName::Pressed => Ok(Phase::Only(KeyPhase::Pressed)),
        PhaseName::Released => Ok(Phase::Only(KeyPhase::Released)),
        // Rejected by KeyBinding itself with the illegal-value error
        PhaseName::Typed => Ok(Phase::Only(KeyPhase::Typed)),
        other => Err(EntryError::Phase(other)),
    }
}

fn mouse_phase(phase: PhaseName) -> Result<Phase<MousePhase>, EntryError> {
    match phase {
        PhaseName::Any => Ok(Phase::Any),
        PhaseName::Pressed => Ok(Phase::Only(MousePhase::Pressed)),
        PhaseName::Released => Ok(Phase::Only(MousePhase::Released)),
        PhaseName::Clicked => Ok(Phase::Only(MousePhase::Clicked)),
        PhaseName::Moved => Ok(Phase::Only(MousePhase::Moved)),
        PhaseName::Dragged => Ok(Phase::Only(MousePhase::Dragged)),
        PhaseName::Entered => Ok(Phase::Only(MousePhase::Entered)),
        PhaseName::Exited => Ok(Phase::Only(MousePhase::Exited)),
        PhaseName::Typed => Err(EntryError::Phase(phase)),
    }
}
