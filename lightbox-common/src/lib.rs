//! lightbox-common - Pure photo lightbox logic
//!
//! Photo records, responsive source resolution, the load-sequencing state
//! machine and keyboard routing. No I/O; the web crate performs the fetches
//! and feeds their outcomes in.

mod config;
mod error;
mod gallery;
mod keys;
mod photo;
mod sizing;
mod viewer;

pub use config::{ConfigError, FetchPolicy, LightboxConfig};
pub use error::FetchError;
pub use gallery::GalleryIndex;
pub use keys::{KeyBinding, KeyBindingSlot, NavAction};
pub use photo::{decode_metadata, PhotoId, PhotoRecord, Viewport};
pub use sizing::{SizedImage, SourceResolver};
pub use viewer::{ImageRequest, MetadataRequest, Phase, PhotoViewer, Surface};
