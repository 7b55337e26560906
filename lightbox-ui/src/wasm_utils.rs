//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! When a JavaScript event listener is backed by a `Closure`, the closure
//! must live as long as the listener is attached. `closure.forget()` leaks
//! the closure and leaves the listener attached forever.
//!
//! Instead the closure is stored in a struct that removes the listener on
//! `Drop`, tying the listener's lifetime to ownership:
//!
//! ```ignore
//! let window = web_sys::window().unwrap();
//! let listener = EventListener::new(window.into(), "keyup", callback);
//!
//! // Listener is removed here
//! drop(listener);
//! ```

use lightbox_common::Viewport;
use wasm_bindgen::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// `KeyboardEvent.key` of a raw event, if it is a keyboard event.
pub fn keyboard_key(event: &JsValue) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(web_sys::KeyboardEvent::key)
}

/// Current window inner size. Zero outside a browser.
pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let read = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|px| px.round().max(0.0) as u32)
            .unwrap_or(0)
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}
