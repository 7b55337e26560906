//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color.
//! Chevrons default to 48px and the close icon to 32px; override with the
//! `size` prop.

use dioxus::prelude::*;

/// Chevron right icon (next photo)
#[component]
pub fn ChevronRightIcon(
    #[props(default = "48")] size: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

/// Chevron left icon (previous photo)
#[component]
pub fn ChevronLeftIcon(
    #[props(default = "48")] size: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m15 18-6-6 6-6" }
        }
    }
}

/// X icon (close)
#[component]
pub fn XIcon(#[props(default = "32")] size: &'static str) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
