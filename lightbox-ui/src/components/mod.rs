//! Shared UI components

pub mod icons;
pub mod loading_spinner;
pub mod photo_lightbox;

pub use icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
pub use loading_spinner::LoadingSpinner;
pub use photo_lightbox::PhotoLightboxView;
