//! Photo lightbox view component

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use dioxus::prelude::*;

/// Full-viewport photo with prev/next hot-zones and a close button
///
/// The image is painted as a centered background so it can start loading
/// while layout is already settled. With no `source` only the frame is
/// rendered. Each hot-zone covers half the viewport and shows its chevron
/// on hover.
#[component]
pub fn PhotoLightboxView(
    /// Resolved image URL, if the record has one
    source: Option<String>,
    /// Alt text for screen readers
    #[props(default)]
    title: Option<String>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let background = source
        .as_ref()
        .map(|src| format!("background-image: url(\"{src}\");"))
        .unwrap_or_default();

    rsx! {
        div { class: "lightbox",
            div {
                class: "lightbox-photo",
                role: "img",
                aria_label: title.unwrap_or_default(),
                style: "{background}",
            }

            div {
                class: "lightbox-nav lightbox-nav-prev",
                onclick: move |_| on_prev.call(()),
                ChevronLeftIcon {}
            }

            div {
                class: "lightbox-nav lightbox-nav-next",
                onclick: move |_| on_next.call(()),
                ChevronRightIcon {}
            }

            button {
                class: "lightbox-close",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon {}
            }
        }
    }
}
