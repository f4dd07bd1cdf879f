//! Mouse input specs.

use std::fmt;
use std::str::FromStr;

use crate::chord::Modifiers;
use crate::event::{MouseButton, MouseInput};
use crate::parser::{self, ParseError};

/// A mouse button plus the modifier keys that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseInputSpec {
    button: MouseButton,
    modifiers: Modifiers,
}

impl MouseInputSpec {
    pub const PRIMARY_BUTTON: MouseInputSpec = MouseInputSpec::new(MouseButton::Primary);
    pub const SECONDARY_BUTTON: MouseInputSpec = MouseInputSpec::new(MouseButton::Secondary);
    pub const MIDDLE_BUTTON: MouseInputSpec = MouseInputSpec::new(MouseButton::Middle);

    /// Button with no modifier keys held.
    pub const fn new(button: MouseButton) -> Self {
        Self {
            button,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with_modifiers(button: MouseButton, modifiers: Modifiers) -> Self {
        Self { button, modifiers }
    }

    pub fn button(&self) -> MouseButton {
        self.button
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether `event` involves this button with exactly these modifiers.
    pub fn matches(&self, event: &MouseInput) -> bool {
        event.button == Some(self.button) && self.modifiers.matches(&event.modifiers)
    }
}

impl From<MouseButton> for MouseInputSpec {
    fn from(button: MouseButton) -> Self {
        MouseInputSpec::new(button)
    }
}

impl fmt::Display for MouseInputSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.modifiers.write_prefix(f)?;
        write!(f, "{:?}", self.button)
    }
}

impl FromStr for MouseInputSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_mouse_input(s)
    }
}
