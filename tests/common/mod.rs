//! Shared integration test fixtures for behavior-kit.
//!
//! A minimal push button control and its behavior, used across the `tests/`
//! integration test suite.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::{Button, install_button};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, LazyLock};

use behavior_kit::{
    ActionRegistry, Behavior, BehaviorBase, Binding, Control, EventCategory, HandlerId,
    InputBindings, InputEvent, InputHandler, InputHandlers, KeyBinding, KeyCode, KeyPhase,
    MouseBinding, MousePhase,
};

/// A push button: arms on press, fires on release.
#[derive(Default)]
pub struct Button {
    pub handlers: InputHandlers,
    pub armed: Cell<bool>,
    pub fired: Cell<u32>,
    pub disabled: Cell<bool>,
}

impl Button {
    /// Run `event` through the button's handlers, as a host event loop would.
    pub fn deliver(&self, mut event: InputEvent) -> InputEvent {
        self.handlers.dispatch(&mut event);
        event
    }
}

impl Control for Button {
    fn add_input_handler(&self, category: EventCategory, handler: InputHandler) -> HandlerId {
        self.handlers.add(category, handler)
    }

    fn remove_input_handler(&self, id: HandlerId) -> bool {
        self.handlers.remove(id)
    }
}

pub struct ButtonBehavior {
    base: BehaviorBase<ButtonBehavior>,
}

impl ButtonBehavior {
    pub fn new(base: BehaviorBase<ButtonBehavior>) -> Self {
        Self { base }
    }

    pub fn arm(&self) {
        if let Some(button) = self.control() {
            button.armed.set(true);
        }
    }

    pub fn fire(&self) {
        if let Some(button) = self.control()
            && button.armed.replace(false)
        {
            button.fired.set(button.fired.get() + 1);
        }
    }

    fn enabled(&self) -> bool {
        self.control().is_some_and(|button| !button.disabled.get())
    }
}

impl Behavior for ButtonBehavior {
    type Control = Button;

    fn base(&self) -> &BehaviorBase<Self> {
        &self.base
    }
}

static BUTTON_BINDINGS: LazyLock<Arc<InputBindings<ButtonBehavior>>> = LazyLock::new(|| {
    let bindings: [Binding<ButtonBehavior>; 5] = [
        KeyBinding::builder()
            .with_key(KeyCode::Space)
            .with_action(ButtonBehavior::arm)
            .build()
            .expect("space press binding")
            .into(),
        KeyBinding::builder()
            .with_key(KeyCode::Space)
            .on(KeyPhase::Released)
            .with_action(ButtonBehavior::fire)
            .build()
            .expect("space release binding")
            .into(),
        KeyBinding::builder()
            .with_key(KeyCode::Escape)
            .with_action(|b: &ButtonBehavior| b.dispose())
            .build()
            .expect("escape binding")
            .into(),
        MouseBinding::builder()
            .with_action(ButtonBehavior::arm)
            .build()
            .expect("mouse press binding")
            .into(),
        MouseBinding::builder()
            .on(MousePhase::Released)
            .with_action(ButtonBehavior::fire)
            .build()
            .expect("mouse release binding")
            .into(),
    ];
    Arc::new(InputBindings::with_filter(
        |_, behavior: &ButtonBehavior| behavior.enabled(),
        bindings,
    ))
});

/// The shared built-in table for every button.
pub fn button_bindings() -> Arc<InputBindings<ButtonBehavior>> {
    Arc::clone(&BUTTON_BINDINGS)
}

/// Actions a user config may bind for buttons.
pub fn button_actions() -> ActionRegistry<ButtonBehavior> {
    ActionRegistry::new()
        .with("arm", ButtonBehavior::arm)
        .with("fire", ButtonBehavior::fire)
}

pub fn install_button(button: &Rc<Button>) -> Rc<ButtonBehavior> {
    BehaviorBase::install(&Rc::downgrade(button), button_bindings(), ButtonBehavior::new)
        .expect("button is alive")
}
