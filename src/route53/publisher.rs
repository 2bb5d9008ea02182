//! Publishing a change batch and classifying the result.

use std::fmt;

use crate::ip::PublicIpAddress;

use super::{ChangeBatch, ChangeSubmitter, CredentialSource, ProviderError};

/// Reason recorded for every credential failure.
const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Which stage of publishing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Credentials could not be resolved
    Credentials,
    /// Route 53 rejected the change or its reply could not be read
    Provider,
    /// Route 53 could not be reached at all
    Unreachable,
}

/// A failed publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Failure classification
    pub kind: FailureKind,
    /// Human-readable reason
    pub reason: String,
    /// Route 53 error code, present only for service rejections
    pub provider_error_code: Option<String>,
}

impl Failure {
    /// The credential failure. Its details never leave the debug log.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self {
            kind: FailureKind::Credentials,
            reason: INVALID_CREDENTIALS.to_string(),
            provider_error_code: None,
        }
    }
}

impl From<ProviderError> for Failure {
    fn from(err: ProviderError) -> Self {
        let kind = if err.is_unreachable() {
            FailureKind::Unreachable
        } else {
            FailureKind::Provider
        };

        Self {
            kind,
            provider_error_code: err.code().map(str::to_string),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Result of one publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Route 53 accepted the batch
    Success {
        /// The address every record now points at
        ip_address: PublicIpAddress,
    },
    /// Publishing failed
    Failure(Failure),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Trait for applying a change batch at the DNS provider.
///
/// Publishing never returns an error; every failure is an [`Outcome`].
pub trait RecordPublisher: Send + Sync {
    /// Publishes `batch` using the credentials stored under `profile`.
    fn publish(
        &self,
        batch: &ChangeBatch,
        profile: &str,
    ) -> impl std::future::Future<Output = Outcome> + Send;
}

/// Resolves credentials, then submits the batch exactly once.
///
/// Credentials are looked up on every publish and never cached. When
/// they cannot be resolved the provider is not contacted.
///
/// # Type Parameters
///
/// - `C`: The credential source
/// - `S`: The change submitter
#[derive(Debug)]
pub struct DnsUpdatePublisher<C, S> {
    credentials: C,
    submitter: S,
}

impl<C, S> DnsUpdatePublisher<C, S> {
    /// Creates a publisher from its two collaborators.
    #[must_use]
    pub const fn new(credentials: C, submitter: S) -> Self {
        Self {
            credentials,
            submitter,
        }
    }
}

impl<C: CredentialSource, S: ChangeSubmitter> RecordPublisher for DnsUpdatePublisher<C, S> {
    async fn publish(&self, batch: &ChangeBatch, profile: &str) -> Outcome {
        let credentials = match self.credentials.resolve(profile).await {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::debug!("Credential resolution failed: {e}");
                return Outcome::Failure(Failure::invalid_credentials());
            }
        };

        match self.submitter.submit(credentials, batch).await {
            Ok(()) => Outcome::Success {
                ip_address: batch.address(),
            },
            Err(e) => Outcome::Failure(e.into()),
        }
    }
}
