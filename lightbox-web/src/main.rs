use lightbox_web::App;

fn main() {
    dioxus::launch(App);
}
