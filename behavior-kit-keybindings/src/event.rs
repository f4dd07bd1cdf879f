//! Input event values delivered to bindings.
//!
//! These are toolkit-neutral: a host converts its native events into
//! [`InputEvent`]s (adapters for winit are provided) and hands them to its
//! handler chain. Each event carries a `consumed` flag that any handler in the
//! chain may set; behaviors skip events that arrive already consumed.

use winit::event::{ElementState, KeyEvent as WinitKeyEvent, MouseButton as WinitMouseButton};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

// ============================================================================
// Phases
// ============================================================================

/// Lifecycle stage of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Pressed,
    Released,
    /// Character input. Carries no reliable key code, so key chords never
    /// bind to it.
    Typed,
}

/// Lifecycle stage of a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MousePhase {
    Pressed,
    Released,
    Clicked,
    Moved,
    Dragged,
    Entered,
    Exited,
}

/// Phase selector of a binding: every phase of its event kind, or one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase<P> {
    Any,
    Only(P),
}

impl<P: PartialEq> Phase<P> {
    /// Whether an event in phase `phase` passes this selector.
    pub fn admits(&self, phase: &P) -> bool {
        match self {
            Phase::Any => true,
            Phase::Only(p) => p == phase,
        }
    }
}

impl<P> From<P> for Phase<P> {
    fn from(phase: P) -> Self {
        Phase::Only(phase)
    }
}

// ============================================================================
// Event payloads
// ============================================================================

/// Modifier keys held down when an event was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierState {
    pub alt: bool,
    pub control: bool,
    pub meta: bool,
    pub shift: bool,
}

impl ModifierState {
    pub const NONE: ModifierState = ModifierState {
        alt: false,
        control: false,
        meta: false,
        shift: false,
    };

    pub const CONTROL: ModifierState = ModifierState {
        control: true,
        ..ModifierState::NONE
    };

    pub const SHIFT: ModifierState = ModifierState {
        shift: true,
        ..ModifierState::NONE
    };

    pub const ALT: ModifierState = ModifierState {
        alt: true,
        ..ModifierState::NONE
    };

    pub const META: ModifierState = ModifierState {
        meta: true,
        ..ModifierState::NONE
    };
}

impl From<ModifiersState> for ModifierState {
    fn from(state: ModifiersState) -> Self {
        Self {
            alt: state.alt_key(),
            control: state.control_key(),
            meta: state.super_key(),
            shift: state.shift_key(),
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub phase: KeyPhase,
    /// Physical key, layout independent
    pub code: KeyCode,
    pub modifiers: ModifierState,
}

impl KeyInput {
    pub fn new(phase: KeyPhase, code: KeyCode, modifiers: ModifierState) -> Self {
        Self {
            phase,
            code,
            modifiers,
        }
    }

    /// Key press with no modifiers held.
    pub fn pressed(code: KeyCode) -> Self {
        Self::new(KeyPhase::Pressed, code, ModifierState::NONE)
    }

    /// Key release with no modifiers held.
    pub fn released(code: KeyCode) -> Self {
        Self::new(KeyPhase::Released, code, ModifierState::NONE)
    }

    pub fn with_modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Convert a winit key event.
    ///
    /// Returns `None` when winit could not identify the physical key.
    pub fn from_winit(event: &WinitKeyEvent, modifiers: ModifiersState) -> Option<Self> {
        let code = match event.physical_key {
            PhysicalKey::Code(code) => code,
            PhysicalKey::Unidentified(_) => return None,
        };
        let phase = match event.state {
            ElementState::Pressed => KeyPhase::Pressed,
            ElementState::Released => KeyPhase::Released,
        };
        Some(Self::new(phase, code, modifiers.into()))
    }
}

/// A mouse button a binding can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

impl TryFrom<WinitMouseButton> for MouseButton {
    type Error = WinitMouseButton;

    fn try_from(button: WinitMouseButton) -> Result<Self, Self::Error> {
        match button {
            WinitMouseButton::Left => Ok(MouseButton::Primary),
            WinitMouseButton::Right => Ok(MouseButton::Secondary),
            WinitMouseButton::Middle => Ok(MouseButton::Middle),
            other => Err(other),
        }
    }
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub phase: MousePhase,
    /// Button involved, if any (moves and crossings carry none)
    pub button: Option<MouseButton>,
    pub modifiers: ModifierState,
}

impl MouseInput {
    pub fn new(phase: MousePhase, button: Option<MouseButton>, modifiers: ModifierState) -> Self {
        Self {
            phase,
            button,
            modifiers,
        }
    }

    /// Button event in `phase` with no modifiers held.
    pub fn button(phase: MousePhase, button: MouseButton) -> Self {
        Self::new(phase, Some(button), ModifierState::NONE)
    }

    pub fn with_modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Convert a winit mouse button event.
    ///
    /// Buttons other than left/right/middle are reported with no button.
    pub fn from_winit(
        state: ElementState,
        button: WinitMouseButton,
        modifiers: ModifiersState,
    ) -> Self {
        let phase = match state {
            ElementState::Pressed => MousePhase::Pressed,
            ElementState::Released => MousePhase::Released,
        };
        Self::new(phase, MouseButton::try_from(button).ok(), modifiers.into())
    }
}

// ============================================================================
// InputEvent
// ============================================================================

/// Payload of an [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Key(KeyInput),
    Mouse(MouseInput),
}

/// An input event travelling through a control's handler chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    kind: InputKind,
    consumed: bool,
}

impl InputEvent {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            consumed: false,
        }
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    pub fn as_key(&self) -> Option<&KeyInput> {
        match &self.kind {
            InputKind::Key(key) => Some(key),
            InputKind::Mouse(_) => None,
        }
    }

    pub fn as_mouse(&self) -> Option<&MouseInput> {
        match &self.kind {
            InputKind::Mouse(mouse) => Some(mouse),
            InputKind::Key(_) => None,
        }
    }

    pub fn modifiers(&self) -> ModifierState {
        match &self.kind {
            InputKind::Key(key) => key.modifiers,
            InputKind::Mouse(mouse) => mouse.modifiers,
        }
    }

    /// Whether an earlier handler already claimed this event.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Claim the event; handlers after this one should ignore it.
    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

impl From<KeyInput> for InputEvent {
    fn from(key: KeyInput) -> Self {
        Self::new(InputKind::Key(key))
    }
}

impl From<MouseInput> for InputEvent {
    fn from(mouse: MouseInput) -> Self {
        Self::new(InputKind::Mouse(mouse))
    }
}
