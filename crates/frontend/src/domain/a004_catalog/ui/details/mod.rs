mod view;
mod view_model;

pub use view::CatalogDetails;
pub use view_model::CatalogDetailsViewModel;
