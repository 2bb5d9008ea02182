//! Transport failures.

use thiserror::Error;

/// Why an HTTP request produced no response.
///
/// An error status is not an `HttpError`; it arrives as an
/// [`HttpResponse`](super::HttpResponse) with that status.
#[derive(Debug, Error)]
pub enum HttpError {
    /// DNS lookup, connect, TLS or body read failed.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No complete response within the client timeout.
    #[error("Request timed out")]
    Timeout,

    /// The body is longer than any IP-echo answer can be.
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge {
        /// Largest accepted body in bytes
        limit: usize,
    },

    /// The client refused the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client itself could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),
}
