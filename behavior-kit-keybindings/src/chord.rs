//! Key chords and modifier requirements.

use std::fmt;
use std::str::FromStr;

use winit::keyboard::KeyCode;

use crate::event::{KeyInput, ModifierState};
use crate::parser::{self, ParseError};
use crate::platform::resolve_shortcut;

/// Modifiers that must be held for a chord or mouse input to match.
///
/// Every modifier not set here must be up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Platform shortcut key: Cmd on macOS, Ctrl elsewhere
    pub shortcut: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
        shortcut: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };

    pub const SHORTCUT: Modifiers = Modifiers {
        shortcut: true,
        ..Modifiers::NONE
    };

    /// Union of two requirement sets.
    pub const fn with(self, other: Modifiers) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
            shift: self.shift || other.shift,
            meta: self.meta || other.meta,
            shortcut: self.shortcut || other.shortcut,
        }
    }

    /// Check the held modifiers against this requirement.
    ///
    /// Each of the four flags must be exactly equal; a modifier held but not
    /// required is a mismatch.
    pub fn matches(&self, held: &ModifierState) -> bool {
        let (expected_ctrl, expected_meta) = resolve_shortcut(self.shortcut, self.ctrl, self.meta);
        held.control == expected_ctrl
            && held.alt == self.alt
            && held.shift == self.shift
            && held.meta == expected_meta
    }

    pub(crate) fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.shortcut, "Shortcut"),
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Meta"),
        ];
        for (_, name) in names.iter().filter(|(set, _)| *set) {
            write!(f, "{}+", name)?;
        }
        Ok(())
    }
}

/// A key plus the modifiers that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    code: KeyCode,
    modifiers: Modifiers,
}

impl KeyChord {
    /// Chord for `code` with no modifiers held.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn code(&self) -> KeyCode {
        self.code
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether `event` is this key with exactly these modifiers.
    ///
    /// The event phase is not consulted; that is the binding's job.
    pub fn matches(&self, event: &KeyInput) -> bool {
        event.code == self.code && self.modifiers.matches(&event.modifiers)
    }
}

impl From<KeyCode> for KeyChord {
    fn from(code: KeyCode) -> Self {
        KeyChord::new(code)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.modifiers.write_prefix(f)?;
        write!(f, "{}", parser::key_code_name(self.code))
    }
}

impl FromStr for KeyChord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_key_chord(s)
    }
}
