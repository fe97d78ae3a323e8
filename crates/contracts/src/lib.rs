//! Wire contracts shared by the taxonomy admin panel.
//!
//! Everything here is plain data: entities as the remote API returns them,
//! request bodies, envelopes and client-side validation rules.

pub mod domain;
pub mod shared;
pub mod system;
