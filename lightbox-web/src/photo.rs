//! Stateful photo lightbox
//!
//! Drives a [`PhotoViewer`] from Dioxus hooks: the id prop feeds
//! `request`, one task per request runs metadata fetch then image preload,
//! and the global keyboard binding is held for the component's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{api, keyboard};
use dioxus::prelude::*;
use lightbox_common::{KeyBinding, LightboxConfig, NavAction, PhotoId, PhotoViewer, Viewport};
use lightbox_ui::wasm_utils::viewport;
use lightbox_ui::PhotoLightboxView;
use tracing::warn;

/// Host callbacks as they were when the viewer mounted
#[derive(Clone, Copy)]
struct BoundCallbacks {
    on_next: Option<EventHandler<()>>,
    on_prev: Option<EventHandler<()>>,
    on_close: Option<EventHandler<()>>,
}

impl BoundCallbacks {
    fn invoke(&self, action: NavAction) {
        let handler = match action {
            NavAction::Next => self.on_next,
            NavAction::Prev => self.on_prev,
            NavAction::Close => self.on_close,
        };
        if let Some(handler) = handler {
            handler.call(());
        }
    }
}

/// Full-screen viewer for one photo.
///
/// Renders nothing until the photo's metadata has loaded. `on_load`
/// receives the viewport size once the image itself has downloaded.
#[component]
pub fn Photo(
    id: String,
    on_next: Option<EventHandler<()>>,
    on_prev: Option<EventHandler<()>>,
    on_close: Option<EventHandler<()>>,
    on_load: Option<EventHandler<Viewport>>,
) -> Element {
    let config = try_use_context::<LightboxConfig>().unwrap_or_default();
    let policy = config.fetch_policy;
    let mut viewer = use_signal(move || PhotoViewer::new(policy));

    // Keys arrive outside the render loop; queue them for the effect below
    let mut pending_keys: Signal<Vec<NavAction>> = use_signal(Vec::new);
    let bound = use_hook(|| BoundCallbacks {
        on_next,
        on_prev,
        on_close,
    });
    let binding: Rc<RefCell<Option<KeyBinding>>> = use_hook(|| {
        Rc::new(RefCell::new(Some(keyboard::bind(move |action| {
            let mut queue = pending_keys;
            queue.write().push(action);
        }))))
    });
    use_drop(move || {
        binding.borrow_mut().take();
    });

    use_effect(move || {
        if pending_keys.read().is_empty() {
            return;
        }
        let actions = std::mem::take(&mut *pending_keys.write());
        for action in actions {
            bound.invoke(action);
        }
    });

    // Sync with id when the host navigates without remounting
    let mut current_id = use_signal(|| id.clone());
    if *current_id.peek() != id {
        current_id.set(id.clone());
    }

    use_effect(move || {
        let id = current_id();
        let Some(request) = viewer.write().request(PhotoId::from(id)) else {
            return;
        };
        let config = config.clone();
        spawn(async move {
            let url = config.metadata_url(request.id());
            let outcome = api::fetch_photo_document(&url).await;
            let image =
                viewer
                    .write()
                    .commit_metadata(request, outcome, viewport(), &config.sizer());
            let Some(image) = image else {
                return;
            };

            if let Err(e) = api::preload_image(image.source()).await {
                warn!("Failed to preload {}: {e}", image.source());
                return;
            }
            let loaded = viewer.write().commit_image(image, viewport());
            if let (Some(size), Some(on_load)) = (loaded, on_load) {
                on_load.call(size);
            }
        });
    });

    let state = viewer.read();
    let Some(surface) = state.surface() else {
        return rsx! {};
    };
    let source = surface.source.map(str::to_string);
    let title = state
        .record()
        .and_then(|r| r.title())
        .map(str::to_string);
    drop(state);

    rsx! {
        PhotoLightboxView {
            source,
            title,
            on_prev: move |_| {
                if let Some(on_prev) = on_prev {
                    on_prev.call(());
                }
            },
            on_next: move |_| {
                if let Some(on_next) = on_next {
                    on_next.call(());
                }
            },
            on_close: move |_| {
                if let Some(on_close) = on_close {
                    on_close.call(());
                }
            },
        }
    }
}
