mod view;
mod view_model;

pub use view::GalleryDetails;
pub use view_model::GalleryDetailsViewModel;
