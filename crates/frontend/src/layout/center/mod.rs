pub mod center;
pub mod registry;

pub use center::Center;
pub use registry::render_page;
