//! lightbox-ui - View components for the photo lightbox
//!
//! Pure views plus the small amount of browser interop they need. State
//! and fetching live in lightbox-web.

pub mod components;
pub mod wasm_utils;

pub use components::*;
