use crate::photo::Photo;
use crate::Route;
use dioxus::prelude::*;
use lightbox_common::{GalleryIndex, NavAction, PhotoId, Viewport};
use lightbox_ui::LoadingSpinner;
use tracing::debug;

#[component]
pub fn PhotoPage(id: String) -> Element {
    let index: GalleryIndex = use_context();
    let mut loaded_id: Signal<Option<String>> = use_signal(|| None);

    let photo_id = PhotoId::new(id.clone());
    let is_loaded = loaded_id.read().as_deref() == Some(id.as_str());

    let go_to = |action: NavAction| {
        let target = index.step(&photo_id, action)?.to_string();
        Some(EventHandler::new(move |_: ()| {
            navigator().push(Route::PhotoPage { id: target.clone() });
        }))
    };
    let on_next = go_to(NavAction::Next);
    let on_prev = go_to(NavAction::Prev);

    let loaded_for = id.clone();

    // Keyed by id: each photo gets a fresh viewer, key binding and load
    // tasks, so handlers bound at mount always belong to this photo.
    rsx! {
        div { class: "photo-page",
            Photo {
                key: "{id}",
                id: id.clone(),
                on_next,
                on_prev,
                on_close: move |_| {
                    navigator().push(Route::Gallery {});
                },
                on_load: move |size: Viewport| {
                    debug!("Photo {loaded_for} loaded at {}x{}", size.width, size.height);
                    loaded_id.set(Some(loaded_for.clone()));
                },
            }
            if !is_loaded {
                div { class: "photo-page-spinner", LoadingSpinner {} }
            }
        }
    }
}
