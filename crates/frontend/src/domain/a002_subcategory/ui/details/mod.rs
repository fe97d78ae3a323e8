mod view;
mod view_model;

pub use view::SubcategoryDetails;
pub use view_model::SubcategoryDetailsViewModel;
