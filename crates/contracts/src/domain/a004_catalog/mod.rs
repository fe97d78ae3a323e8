pub mod aggregate;
pub mod upload;
