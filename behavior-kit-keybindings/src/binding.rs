//! Bindings: an event phase, a list of match specs, and an action.
//!
//! A [`Binding`] is either a [`KeyBinding`] (matching [`KeyChord`]s) or a
//! [`MouseBinding`] (matching [`MouseInputSpec`]s). Both are built through a
//! validating spec struct, usually via their fluent builders:
//!
//! ```ignore
//! let binding = KeyBinding::builder()
//!     .with_key(KeyCode::ArrowLeft)
//!     .with_chord(KeyChord::with_modifiers(KeyCode::ArrowLeft, Modifiers::CTRL))
//!     .on(KeyPhase::Released)
//!     .with_action(SliderBehavior::decrement)
//!     .build()?;
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use thiserror::Error;
use winit::keyboard::KeyCode;

use crate::chord::{KeyChord, Modifiers};
use crate::event::{InputEvent, InputKind, KeyPhase, MouseButton, MousePhase, Phase};
use crate::mouse::MouseInputSpec;

// ============================================================================
// Errors
// ============================================================================

/// A value a binding cannot be built without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    KeyChords,
    MouseInputs,
    Phase,
    Action,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::KeyChords => "key chords",
            RequiredField::MouseInputs => "mouse inputs",
            RequiredField::Phase => "event phase",
            RequiredField::Action => "action",
        })
    }
}

/// Binding construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("{0} cannot be missing")]
    Missing(RequiredField),
    #[error("missing {field} entry at index {index}")]
    MissingEntry { field: RequiredField, index: usize },
    #[error("key-typed events do not trigger key chords")]
    KeyTypedPhase,
}

impl BindingError {
    /// A required value was not supplied.
    pub fn is_missing_value(&self) -> bool {
        matches!(
            self,
            BindingError::Missing(_) | BindingError::MissingEntry { .. }
        )
    }

    /// A value was supplied but is not allowed.
    pub fn is_illegal_value(&self) -> bool {
        matches!(self, BindingError::KeyTypedPhase)
    }
}

// ============================================================================
// Action
// ============================================================================

/// Callable run against a behavior when a binding fires.
///
/// Two actions are equal only if they share the same underlying callable;
/// cloning an action keeps its identity, wrapping the same function twice does
/// not.
pub struct Action<B> {
    name: Option<Arc<str>>,
    run: Arc<dyn Fn(&B) + Send + Sync>,
}

impl<B> Action<B> {
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&B) + Send + Sync + 'static,
    {
        Self {
            name: None,
            run: Arc::new(run),
        }
    }

    /// Action with a display name (used in logs and config lookups).
    pub fn named<F>(name: impl Into<Arc<str>>, run: F) -> Self
    where
        F: Fn(&B) + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            run: Arc::new(run),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, behavior: &B) {
        (self.run)(behavior)
    }

    fn identity(&self) -> *const () {
        Arc::as_ptr(&self.run) as *const ()
    }
}

impl<B> Clone for Action<B> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<B> PartialEq for Action<B> {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl<B> Eq for Action<B> {}

impl<B> Hash for Action<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl<B> fmt::Debug for Action<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Action({})", name),
            None => write!(f, "Action({:p})", self.identity()),
        }
    }
}

impl<B, F> From<F> for Action<B>
where
    F: Fn(&B) + Send + Sync + 'static,
{
    fn from(run: F) -> Self {
        Action::new(run)
    }
}

// ============================================================================
// KeyBinding
// ============================================================================

/// Binds key chords to an action. Chords never match key-typed events.
pub struct KeyBinding<B> {
    chords: Vec<KeyChord>,
    phase: Phase<KeyPhase>,
    action: Action<B>,
}

/// Unvalidated [`KeyBinding`] fields. `None` means "not supplied".
pub struct KeyBindingSpec<B> {
    pub chords: Option<Vec<Option<KeyChord>>>,
    pub phase: Option<Phase<KeyPhase>>,
    pub action: Option<Action<B>>,
}

impl<B> Default for KeyBindingSpec<B> {
    fn default() -> Self {
        Self {
            chords: None,
            phase: None,
            action: None,
        }
    }
}

impl<B> KeyBindingSpec<B> {
    /// Validate every field and produce the binding.
    pub fn finalize(self) -> Result<KeyBinding<B>, BindingError> {
        let chords = collect_entries(self.chords, RequiredField::KeyChords)?;
        let phase = self.phase.ok_or(BindingError::Missing(RequiredField::Phase))?;
        let action = self.action.ok_or(BindingError::Missing(RequiredField::Action))?;

        if phase == Phase::Only(KeyPhase::Typed) {
            return Err(BindingError::KeyTypedPhase);
        }

        Ok(KeyBinding {
            chords,
            phase,
            action,
        })
    }
}

impl<B> KeyBinding<B> {
    pub fn new(
        chords: Vec<KeyChord>,
        phase: impl Into<Phase<KeyPhase>>,
        action: Action<B>,
    ) -> Result<Self, BindingError> {
        KeyBindingSpec {
            chords: Some(chords.into_iter().map(Some).collect()),
            phase: Some(phase.into()),
            action: Some(action),
        }
        .finalize()
    }

    pub fn builder() -> KeyBindingBuilder<B> {
        KeyBindingBuilder::new()
    }

    pub fn chords(&self) -> &[KeyChord] {
        &self.chords
    }

    pub fn phase(&self) -> Phase<KeyPhase> {
        self.phase
    }

    pub fn action(&self) -> &Action<B> {
        &self.action
    }

    /// Phase first, then any chord. An empty chord list matches every key
    /// event in the phase, typed ones included; a chord never matches a
    /// key-typed event.
    pub fn fires(&self, event: &InputEvent) -> bool {
        let InputKind::Key(key) = event.kind() else {
            return false;
        };
        self.phase.admits(&key.phase)
            && (self.chords.is_empty()
                || (key.phase != KeyPhase::Typed
                    && self.chords.iter().any(|c| c.matches(key))))
    }
}

impl<B> Clone for KeyBinding<B> {
    fn clone(&self) -> Self {
        Self {
            chords: self.chords.clone(),
            phase: self.phase,
            action: self.action.clone(),
        }
    }
}

impl<B> PartialEq for KeyBinding<B> {
    fn eq(&self, other: &Self) -> bool {
        self.phase == other.phase && self.action == other.action && self.chords == other.chords
    }
}

impl<B> Eq for KeyBinding<B> {}

impl<B> Hash for KeyBinding<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.phase.hash(state);
        self.action.hash(state);
        self.chords.hash(state);
    }
}

impl<B> fmt::Debug for KeyBinding<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBinding")
            .field("chords", &DisplayList(&self.chords))
            .field("phase", &self.phase)
            .field("action", &self.action)
            .finish()
    }
}

/// Fluent builder for [`KeyBinding`]. Phase defaults to `Pressed`.
pub struct KeyBindingBuilder<B> {
    spec: KeyBindingSpec<B>,
}

impl<B> KeyBindingBuilder<B> {
    fn new() -> Self {
        Self {
            spec: KeyBindingSpec {
                chords: Some(Vec::new()),
                phase: Some(Phase::Only(KeyPhase::Pressed)),
                action: None,
            },
        }
    }

    /// Add a key with no modifiers held.
    pub fn with_key(self, code: KeyCode) -> Self {
        self.with_chord(KeyChord::new(code))
    }

    /// Add a key that must be pressed with exactly `modifiers`.
    pub fn with_key_modifiers(self, code: KeyCode, modifiers: Modifiers) -> Self {
        self.with_chord(KeyChord::with_modifiers(code, modifiers))
    }

    pub fn with_chord(mut self, chord: KeyChord) -> Self {
        self.spec.chords.get_or_insert_with(Vec::new).push(Some(chord));
        self
    }

    pub fn on(mut self, phase: impl Into<Phase<KeyPhase>>) -> Self {
        self.spec.phase = Some(phase.into());
        self
    }

    pub fn on_any(self) -> Self {
        self.on(Phase::Any)
    }

    /// Set the action to run. An action must be set before [`Self::build`].
    pub fn with_action<F>(self, run: F) -> Self
    where
        F: Fn(&B) + Send + Sync + 'static,
    {
        self.action(Action::new(run))
    }

    /// Set a pre-built (possibly shared or named) action.
    pub fn action(mut self, action: Action<B>) -> Self {
        self.spec.action = Some(action);
        self
    }

    pub fn build(self) -> Result<KeyBinding<B>, BindingError> {
        self.spec.finalize()
    }
}

// ============================================================================
// MouseBinding
// ============================================================================

/// Binds mouse inputs to an action.
pub struct MouseBinding<B> {
    inputs: Vec<MouseInputSpec>,
    phase: Phase<MousePhase>,
    action: Action<B>,
}

/// Unvalidated [`MouseBinding`] fields. `None` means "not supplied".
pub struct MouseBindingSpec<B> {
    pub inputs: Option<Vec<Option<MouseInputSpec>>>,
    pub phase: Option<Phase<MousePhase>>,
    pub action: Option<Action<B>>,
}

impl<B> Default for MouseBindingSpec<B> {
    fn default() -> Self {
        Self {
            inputs: None,
            phase: None,
            action: None,
        }
    }
}

impl<B> MouseBindingSpec<B> {
    /// Validate every field and produce the binding.
    pub fn finalize(self) -> Result<MouseBinding<B>, BindingError> {
        let inputs = collect_entries(self.inputs, RequiredField::MouseInputs)?;
        let phase = self.phase.ok_or(BindingError::Missing(RequiredField::Phase))?;
        let action = self.action.ok_or(BindingError::Missing(RequiredField::Action))?;

        Ok(MouseBinding {
            inputs,
            phase,
            action,
        })
    }
}

impl<B> MouseBinding<B> {
    pub fn new(
        inputs: Vec<MouseInputSpec>,
        phase: impl Into<Phase<MousePhase>>,
        action: Action<B>,
    ) -> Result<Self, BindingError> {
        MouseBindingSpec {
            inputs: Some(inputs.into_iter().map(Some).collect()),
            phase: Some(phase.into()),
            action: Some(action),
        }
        .finalize()
    }

    pub fn builder() -> MouseBindingBuilder<B> {
        MouseBindingBuilder::new()
    }

    pub fn inputs(&self) -> &[MouseInputSpec] {
        &self.inputs
    }

    pub fn phase(&self) -> Phase<MousePhase> {
        self.phase
    }

    pub fn action(&self) -> &Action<B> {
        &self.action
    }

    /// Phase first, then any input. An empty input list matches every button.
    pub fn fires(&self, event: &InputEvent) -> bool {
        let InputKind::Mouse(mouse) = event.kind() else {
            return false;
        };
        self.phase.admits(&mouse.phase)
            && (self.inputs.is_empty() || self.inputs.iter().any(|i| i.matches(mouse)))
    }
}

impl<B> Clone for MouseBinding<B> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            phase: self.phase,
            action: self.action.clone(),
        }
    }
}

impl<B> PartialEq for MouseBinding<B> {
    fn eq(&self, other: &Self) -> bool {
        self.phase == other.phase && self.action == other.action && self.inputs == other.inputs
    }
}

impl<B> Eq for MouseBinding<B> {}

impl<B> Hash for MouseBinding<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.phase.hash(state);
        self.action.hash(state);
        self.inputs.hash(state);
    }
}

impl<B> fmt::Debug for MouseBinding<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MouseBinding")
            .field("inputs", &DisplayList(&self.inputs))
            .field("phase", &self.phase)
            .field("action", &self.action)
            .finish()
    }
}

/// Fluent builder for [`MouseBinding`].
///
/// Phase defaults to `Pressed`. With no inputs added, the binding matches the
/// primary button with no modifiers.
pub struct MouseBindingBuilder<B> {
    inputs: Vec<MouseInputSpec>,
    phase: Phase<MousePhase>,
    action: Option<Action<B>>,
}

impl<B> MouseBindingBuilder<B> {
    fn new() -> Self {
        Self {
            inputs: Vec::new(),
            phase: Phase::Only(MousePhase::Pressed),
            action: None,
        }
    }

    pub fn with_mouse_input(mut self, input: MouseInputSpec) -> Self {
        self.inputs.push(input);
        self
    }

    /// Add a button with no modifiers held.
    pub fn with_mouse_button(self, button: MouseButton) -> Self {
        self.with_mouse_input(MouseInputSpec::new(button))
    }

    pub fn with_button_modifiers(self, button: MouseButton, modifiers: Modifiers) -> Self {
        self.with_mouse_input(MouseInputSpec::with_modifiers(button, modifiers))
    }

    pub fn on(mut self, phase: impl Into<Phase<MousePhase>>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn on_any(self) -> Self {
        self.on(Phase::Any)
    }

    /// Set the action to run. An action must be set before [`Self::build`].
    pub fn with_action<F>(self, run: F) -> Self
    where
        F: Fn(&B) + Send + Sync + 'static,
    {
        self.action(Action::new(run))
    }

    /// Set a pre-built (possibly shared or named) action.
    pub fn action(mut self, action: Action<B>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn build(self) -> Result<MouseBinding<B>, BindingError> {
        let inputs = if self.inputs.is_empty() {
            vec![MouseInputSpec::PRIMARY_BUTTON]
        } else {
            self.inputs
        };
        MouseBindingSpec {
            inputs: Some(inputs.into_iter().map(Some).collect()),
            phase: Some(self.phase),
            action: self.action,
        }
        .finalize()
    }
}

// ============================================================================
// Binding
// ============================================================================

/// A key or mouse binding.
pub enum Binding<B> {
    Key(KeyBinding<B>),
    Mouse(MouseBinding<B>),
}

impl<B> Binding<B> {
    pub fn action(&self) -> &Action<B> {
        match self {
            Binding::Key(binding) => binding.action(),
            Binding::Mouse(binding) => binding.action(),
        }
    }

    /// Whether this binding listens to the event's category and phase,
    /// ignoring its key or mouse specs.
    pub fn accepts_phase(&self, event: &InputEvent) -> bool {
        match (self, event.kind()) {
            (Binding::Key(binding), InputKind::Key(key)) => binding.phase.admits(&key.phase),
            (Binding::Mouse(binding), InputKind::Mouse(mouse)) => {
                binding.phase.admits(&mouse.phase)
            }
            _ => false,
        }
    }

    /// Whether the event satisfies this binding's phase and specs.
    pub fn fires(&self, event: &InputEvent) -> bool {
        match self {
            Binding::Key(binding) => binding.fires(event),
            Binding::Mouse(binding) => binding.fires(event),
        }
    }

    /// Run the action against `behavior` if the event fires this binding.
    pub fn invoke(&self, event: &InputEvent, behavior: &B) {
        if self.fires(event) {
            log::trace!("Binding fired: {:?}", self);
            self.action().call(behavior);
        }
    }
}

impl<B> From<KeyBinding<B>> for Binding<B> {
    fn from(binding: KeyBinding<B>) -> Self {
        Binding::Key(binding)
    }
}

impl<B> From<MouseBinding<B>> for Binding<B> {
    fn from(binding: MouseBinding<B>) -> Self {
        Binding::Mouse(binding)
    }
}

impl<B> Clone for Binding<B> {
    fn clone(&self) -> Self {
        match self {
            Binding::Key(binding) => Binding::Key(binding.clone()),
            Binding::Mouse(binding) => Binding::Mouse(binding.clone()),
        }
    }
}

impl<B> PartialEq for Binding<B> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Binding::Key(a), Binding::Key(b)) => a == b,
            (Binding::Mouse(a), Binding::Mouse(b)) => a == b,
            _ => false,
        }
    }
}

impl<B> Eq for Binding<B> {}

impl<B> Hash for Binding<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Binding::Key(binding) => {
                0u8.hash(state);
                binding.hash(state);
            }
            Binding::Mouse(binding) => {
                1u8.hash(state);
                binding.hash(state);
            }
        }
    }
}

impl<B> fmt::Debug for Binding<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Key(binding) => binding.fmt(f),
            Binding::Mouse(binding) => binding.fmt(f),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn collect_entries<T>(
    entries: Option<Vec<Option<T>>>,
    field: RequiredField,
) -> Result<Vec<T>, BindingError> {
    entries
        .ok_or(BindingError::Missing(field))?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.ok_or(BindingError::MissingEntry { field, index }))
        .collect()
}

struct DisplayList<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Debug for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for item in self.0 {
            list.entry(&format_args!("{}", item));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyInput, ModifierState, MouseInput};
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter {
        hits: Cell<u32>,
    }

    fn bump(counter: &Counter) {
        counter.hits.set(counter.hits.get() + 1);
    }

    fn key_event(phase: KeyPhase, code: KeyCode, modifiers: ModifierState) -> InputEvent {
        KeyInput::new(phase, code, modifiers).into()
    }

    #[test]
    fn test_key_binding_phase_and_modifiers() {
        let binding: Binding<Counter> = KeyBinding::<Counter>::builder()
            .with_key(KeyCode::KeyA)
            .with_action(bump)
            .build()
            .unwrap()
            .into();

        assert!(binding.fires(&key_event(KeyPhase::Pressed, KeyCode::KeyA, ModifierState::NONE)));
        assert!(!binding.fires(&key_event(
            KeyPhase::Pressed,
            KeyCode::KeyA,
            ModifierState::CONTROL
        )));
        assert!(!binding.fires(&key_event(KeyPhase::Released, KeyCode::KeyA, ModifierState::NONE)));
    }

    #[test]
    fn test_key_binding_any_chord_matches() {
        let binding = KeyBinding::<Counter>::builder()
            .with_key(KeyCode::KeyB)
            .with_key_modifiers(KeyCode::KeyB, Modifiers::CTRL)
            .on(KeyPhase::Released)
            .with_action(bump)
            .build()
            .unwrap();

        assert!(binding.fires(&key_event(KeyPhase::Released, KeyCode::KeyB, ModifierState::NONE)));
        assert!(binding.fires(&key_event(
            KeyPhase::Released,
            KeyCode::KeyB,
            ModifierState::CONTROL
        )));
        assert!(!binding.fires(&key_event(KeyPhase::Pressed, KeyCode::KeyB, ModifierState::NONE)));
    }

    #[test]
    fn test_empty_chord_list_matches_any_key_in_phase() {
        let binding = KeyBinding::<Counter>::new(vec![], KeyPhase::Pressed, Action::new(bump))
            .unwrap();
        assert!(binding.fires(&key_event(KeyPhase::Pressed, KeyCode::KeyQ, ModifierState::ALT)));
        assert!(!binding.fires(&key_event(KeyPhase::Released, KeyCode::KeyQ, ModifierState::NONE)));
    }

    #[test]
    fn test_any_phase_admits_every_key_phase() {
        let binding = KeyBinding::<Counter>::builder()
            .with_key(KeyCode::Space)
            .on_any()
            .with_action(bump)
            .build()
            .unwrap();
        assert!(binding.fires(&key_event(KeyPhase::Pressed, KeyCode::Space, ModifierState::NONE)));
        assert!(binding.fires(&key_event(KeyPhase::Released, KeyCode::Space, ModifierState::NONE)));
    }

    #[test]
    fn test_key_binding_ignores_mouse_events() {
        let binding: Binding<Counter> = KeyBinding::<Counter>::new(vec![], Phase::Any, Action::new(bump))
            .unwrap()
            .into();
        let click = InputEvent::from(MouseInput::button(MousePhase::Pressed, MouseButton::Primary));
        assert!(!binding.fires(&click));
        assert!(!binding.accepts_phase(&click));
    }

    #[test]
    fn test_mouse_binding_requires_exact_modifiers() {
        let binding = MouseBinding::<Counter>::builder()
            .with_mouse_button(MouseButton::Primary)
            .on(MousePhase::Clicked)
            .with_action(bump)
            .build()
            .unwrap();

        let click = MouseInput::button(MousePhase::Clicked, MouseButton::Primary);
        assert!(binding.fires(&click.into()));
        assert!(!binding.fires(&click.with_modifiers(ModifierState::SHIFT).into()));
        assert!(!binding.fires(&MouseInput::button(MousePhase::Pressed, MouseButton::Primary).into()));
    }

    #[test]
    fn test_mouse_builder_defaults_to_primary_button() {
        let binding = MouseBinding::<Counter>::builder()
            .with_action(bump)
            .build()
            .unwrap();
        assert_eq!(binding.inputs(), &[MouseInputSpec::PRIMARY_BUTTON]);
        assert_eq!(binding.phase(), Phase::Only(MousePhase::Pressed));
        assert!(!binding.fires(&MouseInput::button(MousePhase::Pressed, MouseButton::Secondary).into()));
    }

    #[test]
    fn test_invoke_runs_action_only_on_match() {
        let counter = Counter::default();
        let binding: Binding<Counter> = KeyBinding::<Counter>::builder()
            .with_key(KeyCode::Enter)
            .with_action(bump)
            .build()
            .unwrap()
            .into();

        binding.invoke(&key_event(KeyPhase::Pressed, KeyCode::Enter, ModifierState::NONE), &counter);
        binding.invoke(&key_event(KeyPhase::Pressed, KeyCode::Escape, ModifierState::NONE), &counter);
        assert_eq!(counter.hits.get(), 1);
    }

    #[test]
    fn test_construction_failures() {
        let action = Action::<Counter>::new(bump);

        let missing_chords = KeyBindingSpec {
            chords: None,
            phase: Some(Phase::Only(KeyPhase::Pressed)),
            action: Some(action.clone()),
        };
        let err = missing_chords.finalize().unwrap_err();
        assert_eq!(err, BindingError::Missing(RequiredField::KeyChords));
        assert!(err.is_missing_value());

        let null_entry = KeyBindingSpec {
            chords: Some(vec![Some(KeyChord::new(KeyCode::KeyA)), None]),
            phase: Some(Phase::Only(KeyPhase::Pressed)),
            action: Some(action.clone()),
        };
        assert_eq!(
            null_entry.finalize().unwrap_err(),
            BindingError::MissingEntry {
                field: RequiredField::KeyChords,
                index: 1
            }
        );

        let missing_phase = KeyBindingSpec {
            chords: Some(vec![]),
            phase: None,
            action: Some(action.clone()),
        };
        assert_eq!(
            missing_phase.finalize().unwrap_err(),
            BindingError::Missing(RequiredField::Phase)
        );

        let typed = KeyBinding::new(vec![], KeyPhase::Typed, action.clone()).unwrap_err();
        assert_eq!(typed, BindingError::KeyTypedPhase);
        assert!(typed.is_illegal_value());
        assert!(!typed.is_missing_value());

        let no_action = KeyBinding::<Counter>::builder().with_key(KeyCode::KeyA).build();
        assert_eq!(
            no_action.unwrap_err(),
            BindingError::Missing(RequiredField::Action)
        );

        let no_mouse_action = MouseBinding::<Counter>::builder().build();
        assert_eq!(
            no_mouse_action.unwrap_err(),
            BindingError::Missing(RequiredField::Action)
        );

        let null_mouse = MouseBindingSpec {
            inputs: Some(vec![None]),
            phase: Some(Phase::Any),
            action: Some(action),
        };
        assert!(null_mouse.finalize().unwrap_err().is_missing_value());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BindingError::Missing(RequiredField::Action).to_string(),
            "action cannot be missing"
        );
        assert_eq!(
            BindingError::MissingEntry {
                field: RequiredField::KeyChords,
                index: 2
            }
            .to_string(),
            "missing key chords entry at index 2"
        );
    }

    #[test]
    fn test_equality_uses_action_identity_and_spec_order() {
        let action = Action::<Counter>::new(bump);
        let a = KeyChord::new(KeyCode::KeyA);
        let b = KeyChord::new(KeyCode::KeyB);

        let first = KeyBinding::new(vec![a, b], KeyPhase::Pressed, action.clone()).unwrap();
        let same = KeyBinding::new(vec![a, b], KeyPhase::Pressed, action.clone()).unwrap();
        let reordered = KeyBinding::new(vec![b, a], KeyPhase::Pressed, action.clone()).unwrap();
        let other_action =
            KeyBinding::new(vec![a, b], KeyPhase::Pressed, Action::<Counter>::new(bump)).unwrap();
        let other_phase = KeyBinding::new(vec![a, b], KeyPhase::Released, action).unwrap();

        assert_eq!(first, same);
        assert_ne!(first, reordered);
        assert_ne!(first, other_action);
        assert_ne!(first, other_phase);

        let mut set = std::collections::HashSet::new();
        set.insert(Binding::from(first));
        set.insert(Binding::from(same));
        set.insert(Binding::from(reordered));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_key_and_mouse_bindings_never_equal() {
        let action = Action::<Counter>::new(bump);
        let key: Binding<Counter> = KeyBinding::<Counter>::new(vec![], Phase::Any, action.clone())
            .unwrap()
            .into();
        let mouse: Binding<Counter> = MouseBinding::<Counter>::new(vec![], Phase::Any, action)
            .unwrap()
            .into();
        assert_ne!(key, mouse);
    }

    #[test]
    fn test_debug_output() {
        let binding = KeyBinding::<Counter>::builder()
            .with_key_modifiers(KeyCode::KeyZ, Modifiers::CTRL)
            .action(Action::named("undo", bump))
            .build()
            .unwrap();
        let debug = format!("{:?}", binding);
        assert!(debug.contains("Ctrl+Z"), "{debug}");
        assert!(debug.contains("Action(undo)"), "{debug}");
    }
}
