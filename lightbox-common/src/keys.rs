//! Keyboard navigation routing
//!
//! A [`KeyBindingSlot`] holds at most one live handler. Installing a handler
//! replaces the previous one and hands back a [`KeyBinding`]; dropping that
//! binding removes the handler, unless a newer one has taken its place.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

/// Navigation requested from the keyboard or the on-screen controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
    Close,
}

impl NavAction {
    /// Map a DOM `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(NavAction::Next),
            "ArrowLeft" => Some(NavAction::Prev),
            "Escape" => Some(NavAction::Close),
            _ => None,
        }
    }
}

type Handler = Rc<dyn Fn(NavAction)>;

#[derive(Default)]
struct SlotInner {
    generation: u64,
    handler: Option<Handler>,
}

/// Single-occupancy slot for the active keyboard handler
#[derive(Clone, Default)]
pub struct KeyBindingSlot {
    inner: Rc<RefCell<SlotInner>>,
}

impl KeyBindingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `handler` the live handler, replacing any existing one.
    pub fn install(&self, handler: impl Fn(NavAction) + 'static) -> KeyBinding {
        let mut inner = self.inner.borrow_mut();
        if inner.handler.is_some() {
            debug!("Replacing active key binding");
        }
        inner.generation += 1;
        inner.handler = Some(Rc::new(handler));
        KeyBinding {
            slot: Rc::downgrade(&self.inner),
            generation: inner.generation,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.inner.borrow().handler.is_some()
    }

    /// Route a key to the live handler. Returns the action taken, if any.
    pub fn dispatch_key(&self, key: &str) -> Option<NavAction> {
        let action = NavAction::from_key(key)?;
        // Clone out so the handler may install or drop bindings itself
        let handler = self.inner.borrow().handler.clone()?;
        handler(action);
        Some(action)
    }
}

/// Ownership of the live keyboard handler; uninstalls it on drop.
#[must_use = "dropping a KeyBinding uninstalls it"]
pub struct KeyBinding {
    slot: Weak<RefCell<SlotInner>>,
    generation: u64,
}

impl KeyBinding {
    /// Whether this binding is still the one receiving keys
    pub fn is_active(&self) -> bool {
        self.slot
            .upgrade()
            .map(|inner| {
                let inner = inner.borrow();
                inner.generation == self.generation && inner.handler.is_some()
            })
            .unwrap_or(false)
    }
}

impl Drop for KeyBinding {
    fn drop(&mut self) {
        let Some(inner) = self.slot.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        if inner.generation == self.generation {
            debug!("Uninstalling key binding");
            inner.handler = None;
        }
    }
}
