use crate::{api, Route};
use dioxus::prelude::*;
use lightbox_common::{GalleryIndex, LightboxConfig};
use lightbox_ui::LoadingSpinner;

/// Loads config and the gallery index once, then provides both as context
#[component]
pub fn AppLayout() -> Element {
    let data = use_resource(move || async move {
        let config = api::fetch_config().await;
        let index = api::fetch_index(&config.index_url).await;
        (config, index)
    });

    let read = data.read();
    match &*read {
        None => rsx! {
            LoadingSpinner {}
        },
        Some((config, index)) => rsx! {
            ConfiguredOutlet { config: config.clone(), index: index.clone() }
        },
    }
}

#[component]
fn ConfiguredOutlet(config: LightboxConfig, index: GalleryIndex) -> Element {
    use_context_provider(|| config);
    use_context_provider(|| index);
    rsx! {
        Outlet::<Route> {}
    }
}
