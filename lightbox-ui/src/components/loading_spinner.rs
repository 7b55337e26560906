//! Loading spinner component

use dioxus::prelude::*;

/// Spinner shown while a photo is still downloading
#[component]
pub fn LoadingSpinner(
    /// Accessible label (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "spinner", role: "status", aria_label: "{message}",
            div { class: "spinner-ring" }
        }
    }
}
