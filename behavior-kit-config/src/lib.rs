//! Configuration for behavior-kit binding overrides.
//!
//! Users can rebind a behavior's actions from a YAML file. Each entry names a
//! key chord or mouse input, the action to run, and the event phase:
//!
//! ```yaml
//! bindings:
//!   - key: "Shortcut+Right"
//!     action: increment_block
//!   - mouse: "Secondary"
//!     action: reset
//!     phase: clicked
//! ```
//!
//! This crate only parses and validates the file shape. Turning entries into
//! live bindings is done by `behavior-kit-keybindings`.

pub mod error;
mod persistence;
mod types;

pub use error::ConfigError;
pub use types::{BindingConfig, BindingsConfig, PhaseName};
