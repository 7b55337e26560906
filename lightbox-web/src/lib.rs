pub mod api;
pub mod keyboard;
pub mod pages;
pub mod photo;

use dioxus::prelude::*;
use pages::{AppLayout, Gallery, PhotoPage};

pub use photo::Photo;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Gallery {},
    #[route("/photo/:id")]
    PhotoPage { id: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
