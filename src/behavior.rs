//! Behaviors: per-control input logic driven by binding tables.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use behavior_kit_keybindings::{InputBindings, InputEvent};

use crate::control::{Control, EventCategory, HandlerId, InputHandler};
use crate::error::BehaviorError;

/// Input logic attached to one control.
///
/// Implementors embed a [`BehaviorBase`] and are created through
/// [`BehaviorBase::install`]. Overrides of [`Behavior::dispose`] must call
/// `self.base().dispose()`.
pub trait Behavior: Sized + 'static {
    type Control: Control + 'static;

    fn base(&self) -> &BehaviorBase<Self>;

    /// The control this behavior is attached to, or `None` once disposed.
    fn control(&self) -> Option<Rc<Self::Control>> {
        self.base().control()
    }

    /// Detach from the control. Calling this more than once has no effect.
    fn dispose(&self) {
        self.base().dispose();
    }
}

/// Shared state every behavior embeds: its control, its bindings, and the
/// input handler it registered.
pub struct BehaviorBase<B: Behavior> {
    control: RefCell<Option<Rc<B::Control>>>,
    bindings: Arc<InputBindings<B>>,
    handler: Cell<Option<HandlerId>>,
}

impl<B: Behavior> BehaviorBase<B> {
    /// Create a behavior for `control` and subscribe it to the control's input.
    ///
    /// `make` receives the base and builds the concrete behavior around it.
    /// Exactly one handler is registered, covering every input category.
    pub fn install<F>(
        control: &Weak<B::Control>,
        bindings: Arc<InputBindings<B>>,
        make: F,
    ) -> Result<Rc<B>, BehaviorError>
    where
        F: FnOnce(BehaviorBase<B>) -> B,
    {
        let control = control.upgrade().ok_or(BehaviorError::MissingControl)?;

        let behavior = Rc::new(make(BehaviorBase {
            control: RefCell::new(Some(Rc::clone(&control))),
            bindings,
            handler: Cell::new(None),
        }));

        let weak = Rc::downgrade(&behavior);
        let handler: InputHandler = Rc::new(move |event: &mut InputEvent| {
            if let Some(behavior) = weak.upgrade() {
                behavior.base().handle(event, &behavior);
            }
        });
        let id = control.add_input_handler(EventCategory::Any, handler);
        behavior.base().handler.set(Some(id));

        log::debug!(
            "Installed {} with {} bindings (handler {:?})",
            std::any::type_name::<B>(),
            behavior.base().bindings.len(),
            id
        );
        Ok(behavior)
    }

    fn handle(&self, event: &InputEvent, behavior: &B) {
        if self.is_disposed() {
            log::trace!("Ignoring {:?}: behavior disposed", event.kind());
            return;
        }
        if event.is_consumed() {
            log::trace!("Ignoring {:?}: already consumed", event.kind());
            return;
        }
        self.bindings.fire(event, behavior);
    }

    pub fn control(&self) -> Option<Rc<B::Control>> {
        self.control.borrow().clone()
    }

    pub fn bindings(&self) -> &Arc<InputBindings<B>> {
        &self.bindings
    }

    pub fn is_disposed(&self) -> bool {
        self.control.borrow().is_none()
    }

    /// Unregister the input handler and release the control.
    pub fn dispose(&self) {
        let Some(control) = self.control.borrow_mut().take() else {
            log::debug!("{} already disposed", std::any::type_name::<B>());
            return;
        };
        if let Some(id) = self.handler.take()
            && !control.remove_input_handler(id)
        {
            log::debug!("Input handler {:?} was already removed from its control", id);
        }
        log::debug!("Disposed {}", std::any::type_name::<B>());
    }
}

impl<B: Behavior> Drop for BehaviorBase<B> {
    fn drop(&mut self) {
        if !self.is_disposed() {
            self.dispose();
        }
    }
}

impl<B: Behavior> fmt::Debug for BehaviorBase<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorBase")
            .field("disposed", &self.is_disposed())
            .field("handler", &self.handler.get())
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
