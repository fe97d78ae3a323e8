//! Generic Resource Store
//!
//! - resource.rs: per-entity description (endpoint, labels, insert policy)
//! - state.rs: collection snapshot and request lifecycle, no I/O
//! - store.rs: async CRUD driving the state through an `ApiClient`

mod resource;
mod state;
mod store;

pub use resource::{InsertPosition, ListQuery, Resource, ResourceKind};
pub use state::{CollectionState, RequestStatus, RequestTicket, RequestTracker};
pub use store::ResourceStore;
