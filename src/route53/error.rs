//! Error types for credential resolution and Route 53 submission.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for credential resolution.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The credentials file is missing or unreadable.
    #[error("Cannot read credentials file '{}': {source}", path.display())]
    StoreUnreadable {
        /// Path to the credentials file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The profile is absent, incomplete or malformed.
    #[error("No usable credentials for profile '{profile}': {reason}")]
    Unavailable {
        /// Requested profile name
        profile: String,
        /// Provider diagnostic
        reason: String,
    },
}

/// Error type for the Route 53 change request.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Route 53 rejected the request with an error code.
    ///
    /// Renders as `code: message`, or just `code` when Route 53 sent no
    /// message.
    #[error("{code}{}", message_suffix(.message))]
    Service {
        /// Provider error code, e.g. `AccessDenied`
        code: String,
        /// Provider error message, empty when none was sent
        message: String,
    },

    /// The request never produced a service response (network, timeout).
    #[error("{0}")]
    Transport(String),

    /// Route 53 answered, but the reply could not be read.
    #[error("Unreadable response from Route 53: {0}")]
    UnreadableResponse(String),

    /// The change batch could not be encoded for the API.
    #[error("Invalid change request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// Returns the provider error code, if Route 53 supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            Self::Transport(_) | Self::UnreadableResponse(_) | Self::InvalidRequest(_) => None,
        }
    }

    /// Returns `true` when Route 53 was never reached.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

fn message_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}
