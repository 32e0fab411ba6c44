mod create_view;
mod gallery_view;

pub use create_view::{CreateAction, CreateView};
pub use gallery_view::GalleryView;
