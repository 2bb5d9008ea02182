//! Error types for public IP discovery.

use thiserror::Error;

use crate::transport::HttpError;

use super::IpFamily;

/// Error type for public IP discovery.
///
/// Any variant aborts the run before credentials are read or
/// Route 53 is contacted.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The request could not be completed (connection failure, timeout).
    #[error("IP-echo request failed: {0}")]
    Http(#[from] HttpError),

    /// The endpoint answered with a non-2xx status.
    #[error("IP-echo endpoint returned HTTP {status}")]
    NonSuccessStatus {
        /// HTTP status code
        status: http::StatusCode,
    },

    /// The response body is not UTF-8 text.
    #[error("IP-echo response is not valid UTF-8")]
    NonUtf8Body,

    /// The response body is empty after trimming whitespace.
    #[error("IP-echo response body is empty")]
    EmptyBody,

    /// The response body is not an IP address literal.
    #[error("IP-echo response '{body}' is not a valid IP address")]
    InvalidAddress {
        /// The trimmed response body
        body: String,
    },

    /// The address family does not match the configured record type.
    #[error("Expected an {expected} address, got {actual}")]
    UnexpectedFamily {
        /// Family required by the configuration
        expected: IpFamily,
        /// The address actually returned
        actual: String,
    },
}
