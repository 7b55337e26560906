use crate::Route;
use dioxus::prelude::*;
use lightbox_common::GalleryIndex;

#[component]
pub fn Gallery() -> Element {
    let index: GalleryIndex = use_context();

    if index.is_empty() {
        return rsx! {
            div { class: "gallery-empty", "No photos" }
        };
    }

    rsx! {
        ul { class: "gallery",
            for id in index.ids().iter().cloned() {
                li { key: "{id}",
                    Link {
                        to: Route::PhotoPage {
                            id: id.to_string(),
                        },
                        "{id}"
                    }
                }
            }
        }
    }
}
