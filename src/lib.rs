//! behavior-kit: declarative input handling for UI controls.
//!
//! A control's input logic lives in a [`Behavior`], which reacts to key and
//! mouse events through a shared, immutable table of bindings rather than
//! raw event callbacks. A [`BehaviorSkinBase`] owns the behavior on behalf of
//! the control's visual skin and tears it down when the skin goes away.
//!
//! ```no_run
//! use std::rc::Rc;
//! use std::sync::{Arc, LazyLock};
//!
//! use behavior_kit::{
//!     Behavior, BehaviorBase, BehaviorSkinBase, Binding, InputBindings, InputHandlers,
//!     KeyBinding, KeyCode,
//! };
//!
//! struct ButtonBehavior {
//!     base: BehaviorBase<ButtonBehavior>,
//! }
//!
//! impl ButtonBehavior {
//!     fn fire(&self) {}
//! }
//!
//! impl Behavior for ButtonBehavior {
//!     type Control = InputHandlers;
//!
//!     fn base(&self) -> &BehaviorBase<Self> {
//!         &self.base
//!     }
//! }
//!
//! static BUTTON_BINDINGS: LazyLock<Arc<InputBindings<ButtonBehavior>>> = LazyLock::new(|| {
//!     Arc::new(InputBindings::new([Binding::from(
//!         KeyBinding::builder()
//!             .with_key(KeyCode::Space)
//!             .with_action(|b: &ButtonBehavior| b.fire())
//!             .build()
//!             .unwrap(),
//!     )]))
//! });
//!
//! let control = Rc::new(InputHandlers::new());
//! let behavior = BehaviorBase::install(&Rc::downgrade(&control), BUTTON_BINDINGS.clone(), |base| {
//!     ButtonBehavior { base }
//! })
//! .unwrap();
//! let skin = BehaviorSkinBase::new(control, behavior);
//! skin.dispose();
//! ```

pub mod behavior;
pub mod control;
pub mod error;
pub mod overrides;
pub mod skin;

pub use behavior::{Behavior, BehaviorBase};
pub use control::{Control, EventCategory, HandlerId, InputHandler, InputHandlers};
pub use error::BehaviorError;
pub use overrides::{load_overrides, load_overrides_from, with_overrides};
pub use skin::{BehaviorSkinBase, Skin};

pub use behavior_kit_config as config;
pub use behavior_kit_keybindings as keybindings;

pub use behavior_kit_keybindings::{
    Action, ActionRegistry, Binding, BindingError, InputBindings, InputEvent, KeyBinding, KeyChord,
    KeyCode, KeyInput, KeyPhase, ModifierState, Modifiers, MouseBinding, MouseButton, MouseInput,
    MouseInputSpec, MousePhase, Phase,
};
