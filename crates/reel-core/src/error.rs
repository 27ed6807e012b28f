//! Error types for reel.
//!
//! This module provides a unified error type with explicit variants for
//! transport, request, decoding, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The fixed, user-facing message carried by [`RequestFailed`].
pub const REQUEST_FAILED_MESSAGE: &str = "Something went wrong!";

/// The unified error type for reel operations.
///
/// Every variant is flattened into a single display string once it reaches
/// a [`MovieView`](crate::MovieView); the variants exist so that sources and
/// callers using them directly can still tell failures apart.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or local I/O failures (connection, timeout, file access).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The endpoint answered, but with a non-success status.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailed),

    /// The response body could not be turned into movie records.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (collection URL format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if the endpoint answered with a non-success status.
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Error::RequestFailed(_))
    }

    /// Returns true if the payload could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Returns true for network and I/O failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No connection could be established: refused, DNS resolution or TLS
    /// handshake failure.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Local filesystem error.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A response was received but its status indicates failure.
///
/// Displays as [`REQUEST_FAILED_MESSAGE`] whatever the status or body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFailed {
    /// HTTP status code, kept for diagnostics only.
    pub status: u16,
}

impl RequestFailed {
    /// Create a new request failure for the given status.
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REQUEST_FAILED_MESSAGE)
    }
}

impl std::error::Error for RequestFailed {}

/// Payload decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was not valid JSON.
    #[error("invalid JSON: {message}")]
    Json { message: String },

    /// The top-level value was neither an array nor an object.
    #[error("unsupported payload shape: expected an array or an object, found {found}")]
    UnsupportedShape { found: &'static str },

    /// An entry did not carry the expected fields.
    #[error("invalid entry '{key}': {reason}")]
    Entry { key: String, reason: String },

    /// Two entries share an id.
    #[error("duplicate movie id '{id}'")]
    DuplicateId { id: String },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json {
            message: err.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid collection URL format.
    #[error("invalid collection URL '{value}': {reason}")]
    CollectionUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
