//! The control capability behaviors attach to.
//!
//! A host toolkit exposes its widgets to behaviors through [`Control`]. Most
//! hosts can embed an [`InputHandlers`] list and forward the two trait methods
//! to it, then call [`InputHandlers::dispatch`] from their event loop.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use behavior_kit_keybindings::{InputEvent, InputKind};

/// Callback registered on a control for raw input events.
pub type InputHandler = Rc<dyn Fn(&mut InputEvent)>;

/// Input categories a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// Every input event
    Any,
    /// Keyboard events only
    Key,
    /// Mouse events only
    Mouse,
}

impl EventCategory {
    pub fn includes(&self, event: &InputEvent) -> bool {
        matches!(
            (self, event.kind()),
            (EventCategory::Any, _)
                | (EventCategory::Key, InputKind::Key(_))
                | (EventCategory::Mouse, InputKind::Mouse(_))
        )
    }
}

/// Identifies a registered handler so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// A UI control that delivers input events to registered handlers.
pub trait Control {
    /// Register `handler` for events in `category`.
    fn add_input_handler(&self, category: EventCategory, handler: InputHandler) -> HandlerId;

    /// Remove a handler. Returns `false` if `id` was not registered.
    fn remove_input_handler(&self, id: HandlerId) -> bool;
}

struct Registration {
    id: HandlerId,
    category: EventCategory,
    handler: InputHandler,
}

/// An ordered list of input handlers.
#[derive(Default)]
pub struct InputHandlers {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<Registration>>,
}

impl InputHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, category: EventCategory, handler: InputHandler) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push(Registration {
            id,
            category,
            handler,
        });
        log::trace!("Added input handler {:?} for {:?}", id, category);
        id
    }

    pub fn remove(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|registration| registration.id != id);
        let removed = handlers.len() != before;
        if removed {
            log::trace!("Removed input handler {:?}", id);
        }
        removed
    }

    pub fn contains(&self, id: HandlerId) -> bool {
        self.handlers.borrow().iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Deliver `event` to matching handlers in registration order.
    ///
    /// Delivery walks a snapshot, so handlers may add or remove handlers while
    /// it runs. A handler removed mid-delivery is not called; one added
    /// mid-delivery first sees the next event.
    pub fn dispatch(&self, event: &mut InputEvent) {
        let target: &InputEvent = event;
        let snapshot: Vec<(HandlerId, InputHandler)> = self
            .handlers
            .borrow()
            .iter()
            .filter(|r| r.category.includes(target))
            .map(|r| (r.id, Rc::clone(&r.handler)))
            .collect();

        for (id, handler) in snapshot {
            if self.contains(id) {
                handler(event);
            }
        }
    }
}

impl Control for InputHandlers {
    fn add_input_handler(&self, category: EventCategory, handler: InputHandler) -> HandlerId {
        self.add(category, handler)
    }

    fn remove_input_handler(&self, id: HandlerId) -> bool {
        self.remove(id)
    }
}

impl fmt::Debug for InputHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.borrow();
        let mut list = f.debug_list();
        for registration in handlers.iter() {
            list.entry(&format_args!("{:?}({:?})", registration.id, registration.category));
        }
        list.finish()
    }
}
