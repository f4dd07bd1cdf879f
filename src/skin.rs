//! Skins that own a behavior.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::behavior::Behavior;

/// The visual side of a control.
pub trait Skin {
    type Skinnable;

    /// The control this skin renders, or `None` once disposed.
    fn skinnable(&self) -> Option<Rc<Self::Skinnable>>;

    /// Release everything the skin holds. Calling this more than once has no
    /// effect.
    fn dispose(&self);
}

/// A skin that owns the behavior handling its control's input.
pub struct BehaviorSkinBase<B: Behavior> {
    skinnable: RefCell<Option<Rc<B::Control>>>,
    behavior: RefCell<Option<Rc<B>>>,
}

impl<B: Behavior> BehaviorSkinBase<B> {
    pub fn new(skinnable: Rc<B::Control>, behavior: Rc<B>) -> Self {
        Self {
            skinnable: RefCell::new(Some(skinnable)),
            behavior: RefCell::new(Some(behavior)),
        }
    }

    pub fn behavior(&self) -> Option<Rc<B>> {
        self.behavior.borrow().clone()
    }

    pub fn skinnable(&self) -> Option<Rc<B::Control>> {
        self.skinnable.borrow().clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.behavior.borrow().is_none() && self.skinnable.borrow().is_none()
    }

    /// Dispose the behavior, then release it and the control.
    pub fn dispose(&self) {
        let behavior = self.behavior.borrow_mut().take();
        if let Some(behavior) = behavior {
            behavior.dispose();
        }
        self.skinnable.borrow_mut().take();
    }
}

impl<B: Behavior> Skin for BehaviorSkinBase<B> {
    type Skinnable = B::Control;

    fn skinnable(&self) -> Option<Rc<B::Control>> {
        BehaviorSkinBase::skinnable(self)
    }

    fn dispose(&self) {
        BehaviorSkinBase::dispose(self);
    }
}

impl<B: Behavior> fmt::Debug for BehaviorSkinBase<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorSkinBase")
            .field("behavior", &std::any::type_name::<B>())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
