pub mod error_payload;
pub mod limits;
pub mod metrics;
pub mod validation;
