//! Networking: REST API client, wire types, and the request error type.

pub mod api;
pub mod error;
pub mod types;

pub use error::ApiError;
