//! HTTP client adapter
//!
//! - transport.rs: the `HttpTransport` seam and request/response types
//! - client.rs: `ApiClient`, headers, auth, JSON decoding, error extraction
//! - gloo.rs: browser transport backed by gloo-net

mod client;
mod error;
mod gloo;
mod transport;

#[cfg(test)]
pub mod testing;

pub use client::ApiClient;
pub use error::ApiError;
pub use gloo::GlooTransport;
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, LocalFile, Method, Multipart, NetworkFailure, Part,
    Payload, RequestBody, DEFAULT_CONTENT_TYPE,
};
