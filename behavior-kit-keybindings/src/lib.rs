//! Declarative input bindings for behavior-kit.
//!
//! A behavior declares what it reacts to as data: key chords and mouse inputs
//! paired with an event phase and an action. Tables of bindings are built once,
//! shared between every instance of a behavior type, and fired against each
//! incoming event.
//!
//! Features:
//! - Key chords with exact modifier matching and a platform `Shortcut` modifier
//! - Mouse button specs with the same modifier rules
//! - Per-table filters and combined tables
//! - Tables built from user YAML config through a named action registry

mod binding;
mod chord;
mod event;
mod input_bindings;
mod mouse;
pub mod parser;
mod platform;
mod registry;

pub use binding::{
    Action, Binding, BindingError, KeyBinding, KeyBindingBuilder, KeyBindingSpec, MouseBinding,
    MouseBindingBuilder, MouseBindingSpec, RequiredField,
};
pub use chord::{KeyChord, Modifiers};
pub use event::{
    InputEvent, InputKind, KeyInput, KeyPhase, ModifierState, MouseButton, MouseInput, MousePhase,
    Phase,
};
pub use input_bindings::{Filter, InputBindings};
pub use mouse::MouseInputSpec;
pub use parser::ParseError;
pub use platform::resolve_shortcut;
pub use registry::ActionRegistry;

pub use winit::keyboard::KeyCode;
