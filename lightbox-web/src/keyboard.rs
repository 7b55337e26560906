//! Global keyboard routing
//!
//! One `keyup` listener on `window` feeds a single binding slot. Mounted
//! viewers install their handler into the slot; the newest install wins.

use std::cell::RefCell;

use lightbox_common::{KeyBinding, KeyBindingSlot, NavAction};
use lightbox_ui::wasm_utils::{keyboard_key, EventListener};

thread_local! {
    static SLOT: KeyBindingSlot = KeyBindingSlot::new();
    static LISTENER: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

fn ensure_listener() {
    LISTENER.with(|listener| {
        let mut listener = listener.borrow_mut();
        if listener.is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        *listener = Some(EventListener::new(window.into(), "keyup", |event| {
            if let Some(key) = keyboard_key(&event) {
                SLOT.with(|slot| slot.dispatch_key(&key));
            }
        }));
    });
}

/// Route navigation keys to `handler` until the returned binding is dropped
/// or another handler is bound.
pub fn bind(handler: impl Fn(NavAction) + 'static) -> KeyBinding {
    ensure_listener();
    SLOT.with(|slot| slot.install(handler))
}
