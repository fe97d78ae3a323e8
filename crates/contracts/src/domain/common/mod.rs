//! Common types and traits for all managed entities

pub mod entity;
pub mod envelope;
pub mod media_ref;
pub mod parent_ref;

// Re-exports
pub use entity::Entity;
pub use envelope::{ListEnvelope, Pagination, SingleEnvelope};
pub use media_ref::MediaRef;
pub use parent_ref::ParentRef;
