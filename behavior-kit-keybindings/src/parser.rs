//! Key chord and mouse input parser.
//!
//! Parses human-readable strings like "Ctrl+Shift+Left" into [`KeyChord`]s and
//! "Shift+Primary" into [`MouseInputSpec`]s. Physical key codes can be written
//! in brackets (e.g. "Ctrl+[KeyZ]").

use thiserror::Error;
use winit::keyboard::KeyCode;

use crate::chord::{KeyChord, Modifiers};
use crate::event::MouseButton;
use crate::mouse::MouseInputSpec;

/// Error type for chord parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty key combination")]
    Empty,
    #[error("Key combination ends with modifier, no key specified")]
    EndsWithModifier,
    #[error("Multiple keys specified: already have '{first}', found '{second}'")]
    MultipleKeys { first: String, second: String },
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
    #[error("Unknown physical key code: '{0}'")]
    UnknownPhysicalKey(String),
    #[error("Unknown mouse button: '{0}'")]
    UnknownButton(String),
}

/// Named keys, canonical spelling first for each code.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    // Navigation
    ("Left", KeyCode::ArrowLeft),
    ("ArrowLeft", KeyCode::ArrowLeft),
    ("Right", KeyCode::ArrowRight),
    ("ArrowRight", KeyCode::ArrowRight),
    ("Up", KeyCode::ArrowUp),
    ("ArrowUp", KeyCode::ArrowUp),
    ("Down", KeyCode::ArrowDown),
    ("ArrowDown", KeyCode::ArrowDown),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PgUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("PgDn", KeyCode::PageDown),
    // Editing
    ("Enter", KeyCode::Enter),
    ("Return", KeyCode::Enter),
    ("Escape", KeyCode::Escape),
    ("Esc", KeyCode::Escape),
    ("Space", KeyCode::Space),
    ("Tab", KeyCode::Tab),
    ("Backspace", KeyCode::Backspace),
    ("Delete", KeyCode::Delete),
    ("Del", KeyCode::Delete),
    ("Insert", KeyCode::Insert),
    ("Ins", KeyCode::Insert),
    // Function keys
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
    // Punctuation by position
    ("Minus", KeyCode::Minus),
    ("Equal", KeyCode::Equal),
    ("BracketLeft", KeyCode::BracketLeft),
    ("BracketRight", KeyCode::BracketRight),
    ("Backslash", KeyCode::Backslash),
    ("Semicolon", KeyCode::Semicolon),
    ("Quote", KeyCode::Quote),
    ("Backquote", KeyCode::Backquote),
    ("Comma", KeyCode::Comma),
    ("Period", KeyCode::Period),
    ("Slash", KeyCode::Slash),
];

/// Every other winit `KeyCode`, by variant name. Only reachable through the
/// bracketed `[Code]` syntax.
const PHYSICAL_KEYS: &[(&str, KeyCode)] = &[
    // Modifiers and locks
    ("AltLeft", KeyCode::AltLeft),
    ("AltRight", KeyCode::AltRight),
    ("CapsLock", KeyCode::CapsLock),
    ("ControlLeft", KeyCode::ControlLeft),
    ("ControlRight", KeyCode::ControlRight),
    ("SuperLeft", KeyCode::SuperLeft),
    ("SuperRight", KeyCode::SuperRight),
    ("ShiftLeft", KeyCode::ShiftLeft),
    ("ShiftRight", KeyCode::ShiftRight),
    ("NumLock", KeyCode::NumLock),
    ("Fn", KeyCode::Fn),
    ("FnLock", KeyCode::FnLock),
    ("ScrollLock", KeyCode::ScrollLock),
    ("Meta", KeyCode::Meta),
    ("Hyper", KeyCode::Hyper),
    // Numpad
    ("Numpad0", KeyCode::Numpad0),
    ("Numpad1", KeyCode::Numpad1),
    ("Numpad2", KeyCode::Numpad2),
    ("Numpad3", KeyCode::Numpad3),
    ("Numpad4", KeyCode::Numpad4),
    ("Numpad5", KeyCode::Numpad5),
    ("Numpad6", KeyCode::Numpad6),
    ("Numpad7", KeyCode::Numpad7),
    ("Numpad8", KeyCode::Numpad8),
    ("Numpad9", KeyCode::Numpad9),
    ("NumpadAdd", KeyCode::NumpadAdd),
    ("NumpadBackspace", KeyCode::NumpadBackspace),
    ("NumpadClear", KeyCode::NumpadClear),
    ("NumpadClearEntry", KeyCode::NumpadClearEntry),
    ("NumpadComma", KeyCode::NumpadComma),
    ("NumpadDecimal", KeyCode::NumpadDecimal),
    ("NumpadDivide", KeyCode::NumpadDivide),
    ("NumpadEnter", KeyCode::NumpadEnter),
    ("NumpadEqual", KeyCode::NumpadEqual),
    ("NumpadHash", KeyCode::NumpadHash),
    ("NumpadMemoryAdd", KeyCode::NumpadMemoryAdd),
    ("NumpadMemoryClear", KeyCode::NumpadMemoryClear),
    ("NumpadMemoryRecall", KeyCode::NumpadMemoryRecall),
    ("NumpadMemoryStore", KeyCode::NumpadMemoryStore),
    ("NumpadMemorySubtract", KeyCode::NumpadMemorySubtract),
    ("NumpadMultiply", KeyCode::NumpadMultiply),
    ("NumpadParenLeft", KeyCode::NumpadParenLeft),
    ("NumpadParenRight", KeyCode::NumpadParenRight),
    ("NumpadStar", KeyCode::NumpadStar),
    ("NumpadSubtract", KeyCode::NumpadSubtract),
    // Function keys
    ("F13", KeyCode::F13),
    ("F14", KeyCode::F14),
    ("F15", KeyCode::F15),
    ("F16", KeyCode::F16),
    ("F17", KeyCode::F17),
    ("F18", KeyCode::F18),
    ("F19", KeyCode::F19),
    ("F20", KeyCode::F20),
    ("F21", KeyCode::F21),
    ("F22", KeyCode::F22),
    ("F23", KeyCode::F23),
    ("F24", KeyCode::F24),
    ("F25", KeyCode::F25),
    ("F26", KeyCode::F26),
    ("F27", KeyCode::F27),
    ("F28", KeyCode::F28),
    ("F29", KeyCode::F29),
    ("F30", KeyCode::F30),
    ("F31", KeyCode::F31),
    ("F32", KeyCode::F32),
    ("F33", KeyCode::F33),
    ("F34", KeyCode::F34),
    ("F35", KeyCode::F35),
    // International
    ("IntlBackslash", KeyCode::IntlBackslash),
    ("IntlRo", KeyCode::IntlRo),
    ("IntlYen", KeyCode::IntlYen),
    ("Convert", KeyCode::Convert),
    ("KanaMode", KeyCode::KanaMode),
    ("Lang1", KeyCode::Lang1),
    ("Lang2", KeyCode::Lang2),
    ("Lang3", KeyCode::Lang3),
    ("Lang4", KeyCode::Lang4),
    ("Lang5", KeyCode::Lang5),
    ("NonConvert", KeyCode::NonConvert),
    ("Hiragana", KeyCode::Hiragana),
    ("Katakana", KeyCode::Katakana),
    // Browser, media and system
    ("ContextMenu", KeyCode::ContextMenu),
    ("Help", KeyCode::Help),
    ("PrintScreen", KeyCode::PrintScreen),
    ("Pause", KeyCode::Pause),
    ("BrowserBack", KeyCode::BrowserBack),
    ("BrowserFavorites", KeyCode::BrowserFavorites),
    ("BrowserForward", KeyCode::BrowserForward),
    ("BrowserHome", KeyCode::BrowserHome),
    ("BrowserRefresh", KeyCode::BrowserRefresh),
    ("BrowserSearch", KeyCode::BrowserSearch),
    ("BrowserStop", KeyCode::BrowserStop),
    ("Eject", KeyCode::Eject),
    ("LaunchApp1", KeyCode::LaunchApp1),
    ("LaunchApp2", KeyCode::LaunchApp2),
    ("LaunchMail", KeyCode::LaunchMail),
    ("MediaPlayPause", KeyCode::MediaPlayPause),
    ("MediaSelect", KeyCode::MediaSelect),
    ("MediaStop", KeyCode::MediaStop),
    ("MediaTrackNext", KeyCode::MediaTrackNext),
    ("MediaTrackPrevious", KeyCode::MediaTrackPrevious),
    ("Power", KeyCode::Power),
    ("Sleep", KeyCode::Sleep),
    ("AudioVolumeDown", KeyCode::AudioVolumeDown),
    ("AudioVolumeMute", KeyCode::AudioVolumeMute),
    ("AudioVolumeUp", KeyCode::AudioVolumeUp),
    ("WakeUp", KeyCode::WakeUp),
    ("Turbo", KeyCode::Turbo),
    ("Abort", KeyCode::Abort),
    ("Resume", KeyCode::Resume),
    ("Suspend", KeyCode::Suspend),
    ("Again", KeyCode::Again),
    ("Copy", KeyCode::Copy),
    ("Cut", KeyCode::Cut),
    ("Find", KeyCode::Find),
    ("Open", KeyCode::Open),
    ("Paste", KeyCode::Paste),
    ("Props", KeyCode::Props),
    ("Select", KeyCode::Select),
    ("Undo", KeyCode::Undo),
];

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Parse a key chord string.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option` - Alt/Option key
/// - `Shift` - Shift key
/// - `Meta`, `Super`, `Cmd`, `Command`, `Win` - Meta/Cmd key
/// - `Shortcut`, `CmdOrCtrl` - Cmd on macOS, Ctrl on other platforms
///
/// Keys:
/// - Single characters: `A`, `1`, `-`, `/`, etc.
/// - Named keys: `F1`-`F12`, `Enter`, `Escape`, `Left`, `PageUp`, etc.
/// - Physical codes in brackets: `[KeyZ]`, `[Digit1]`
pub fn parse_key_chord(s: &str) -> Result<KeyChord, ParseError> {
    let (modifiers, key) = split_modifiers(s)?;
    let code = parse_key(key)?;
    Ok(KeyChord::with_modifiers(code, modifiers))
}

/// Parse a mouse input string such as "Primary" or "Ctrl+Shift+Secondary".
///
/// Buttons: `Primary`/`Left`, `Secondary`/`Right`, `Middle`.
pub fn parse_mouse_input(s: &str) -> Result<MouseInputSpec, ParseError> {
    let (modifiers, button) = split_modifiers(s)?;
    let button = match button.to_lowercase().as_str() {
        "primary" | "left" => MouseButton::Primary,
        "secondary" | "right" => MouseButton::Secondary,
        "middle" => MouseButton::Middle,
        _ => return Err(ParseError::UnknownButton(button.to_string())),
    };
    Ok(MouseInputSpec::with_modifiers(button, modifiers))
}

/// Canonical name of a key code, as accepted by [`parse_key_chord`].
pub fn key_code_name(code: KeyCode) -> String {
    if let Some(i) = LETTERS.iter().position(|c| *c == code) {
        return char::from(b'A' + i as u8).to_string();
    }
    if let Some(i) = DIGITS.iter().position(|c| *c == code) {
        return char::from(b'0' + i as u8).to_string();
    }
    if let Some((name, _)) = NAMED_KEYS.iter().find(|(_, c)| *c == code) {
        return (*name).to_string();
    }
    match PHYSICAL_KEYS.iter().find(|(_, c)| *c == code) {
        Some((name, _)) => format!("[{}]", name),
        // Variants added after winit 0.30 have no table entry yet
        None => format!("[{:?}]", code),
    }
}

/// Split off leading modifiers, returning them and the final (key) token.
fn split_modifiers(s: &str) -> Result<(Modifiers, &str), ParseError> {
    let parts: Vec<&str> = s.split('+').map(str::trim).collect();
    if parts.iter().all(|p| p.is_empty()) {
        return Err(ParseError::Empty);
    }

    let mut modifiers = Modifiers::default();
    let mut key_part: Option<&str> = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "meta" | "super" | "cmd" | "command" | "win" => {
                modifiers.meta = true;
                true
            }
            "shortcut" | "cmdorctrl" => {
                modifiers.shortcut = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if let Some(first) = key_part {
                return Err(ParseError::MultipleKeys {
                    first: first.to_string(),
                    second: part.to_string(),
                });
            }
            key_part = Some(part);
        } else if is_last {
            return Err(ParseError::EndsWithModifier);
        }
    }

    match key_part {
        Some("") | None => Err(ParseError::Empty),
        Some(key) => Ok((modifiers, key)),
    }
}

/// Parse a key token into a key code.
fn parse_key(s: &str) -> Result<KeyCode, ParseError> {
    // Physical key syntax: [KeyZ], [Digit1], [Minus]
    if s.len() > 2 && s.starts_with('[') && s.ends_with(']') {
        let code_str = &s[1..s.len() - 1];
        return parse_physical_key_code(code_str)
            .ok_or_else(|| ParseError::UnknownPhysicalKey(code_str.to_string()));
    }

    if let Some(code) = parse_named_key(s) {
        return Ok(code);
    }

    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.next())
        && let Some(code) = char_key_code(ch)
    {
        return Ok(code);
    }

    Err(ParseError::UnknownKey(s.to_string()))
}

fn parse_named_key(s: &str) -> Option<KeyCode> {
    NAMED_KEYS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, code)| *code)
}

/// Physical code names follow the winit `KeyCode` variant names.
fn parse_physical_key_code(s: &str) -> Option<KeyCode> {
    let lower = s.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("key")
        && let [letter @ b'a'..=b'z'] = rest.as_bytes()
    {
        return Some(LETTERS[(letter - b'a') as usize]);
    }
    if let Some(rest) = lower.strip_prefix("digit")
        && let [digit @ b'0'..=b'9'] = rest.as_bytes()
    {
        return Some(DIGITS[(digit - b'0') as usize]);
    }
    parse_named_key(s).or_else(|| {
        PHYSICAL_KEYS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, code)| *code)
    })
}

fn char_key_code(ch: char) -> Option<KeyCode> {
    let upper = ch.to_ascii_uppercase();
    match upper {
        'A'..='Z' => Some(LETTERS[(upper as u8 - b'A') as usize]),
        '0'..='9' => Some(DIGITS[(upper as u8 - b'0') as usize]),
        '-' => Some(KeyCode::Minus),
        '=' => Some(KeyCode::Equal),
        '[' => Some(KeyCode::BracketLeft),
        ']' => Some(KeyCode::BracketRight),
        '\\' => Some(KeyCode::Backslash),
        ';' => Some(KeyCode::Semicolon),
        '\'' => Some(KeyCode::Quote),
        '`' => Some(KeyCode::Backquote),
        ',' => Some(KeyCode::Comma),
        '.' => Some(KeyCode::Period),
        '/' => Some(KeyCode::Slash),
        _ => None,
    }
}
