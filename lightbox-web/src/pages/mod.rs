mod gallery;
mod layout;
mod photo;

pub use gallery::Gallery;
pub use layout::AppLayout;
pub use photo::PhotoPage;
