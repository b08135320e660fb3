//! Error types for the medicines API client.
//!
//! # Design
//! `Transport` is kept apart from every response-derived variant, so a
//! network failure can never be mistaken for a response. `NotFound` gets a
//! dedicated variant because the controller reacts to it (the record was
//! removed elsewhere). All other non-2xx responses land in `Http` with the
//! raw status code and body for debugging.

use thiserror::Error;

/// Failure to complete an HTTP round-trip at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Errors returned by the medicines client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server returned 404, the medicine does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The base URL cannot be combined with a record id.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
