//! AWS credential resolution from an ini-style credentials file.

use std::fmt;
use std::path::{Path, PathBuf};

use aws_config::profile::ProfileFileCredentialsProvider;
use aws_credential_types::provider::ProvideCredentials;
use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use aws_sdk_route53::error::DisplayErrorContext;

use super::CredentialError;

/// An access key pair with an optional session token.
///
/// `Debug` never prints the secret or the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    /// Creates credentials from their parts.
    #[must_use]
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Returns the access key id.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Returns the secret access key.
    #[must_use]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Returns the session token, if any.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Converts into the SDK credential type, tagged with `provider_name`.
    #[must_use]
    pub fn into_sdk(self, provider_name: &'static str) -> aws_credential_types::Credentials {
        aws_credential_types::Credentials::new(
            self.access_key_id,
            self.secret_access_key,
            self.session_token,
            None,
            provider_name,
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

/// Trait for looking up credentials by profile name.
pub trait CredentialSource: Send + Sync {
    /// Resolves the credentials stored under `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if the store cannot be read or the
    /// profile is missing or incomplete.
    fn resolve(
        &self,
        profile: &str,
    ) -> impl std::future::Future<Output = Result<Credentials, CredentialError>> + Send;
}

/// Reads static credentials from one ini-style credentials file.
///
/// Only the given file is consulted. The shared AWS config file, the
/// environment and instance metadata are never used.
#[derive(Debug, Clone)]
pub struct ProfileCredentials {
    path: PathBuf,
}

impl ProfileCredentials {
    /// Creates a source backed by the credentials file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the credentials file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSource for ProfileCredentials {
    async fn resolve(&self, profile: &str) -> Result<Credentials, CredentialError> {
        // A missing file would otherwise surface as an unknown profile.
        std::fs::metadata(&self.path).map_err(|source| CredentialError::StoreUnreadable {
            path: self.path.clone(),
            source,
        })?;

        let files = EnvConfigFiles::builder()
            .with_file(EnvConfigFileKind::Credentials, self.path.clone())
            .build();
        let provider = ProfileFileCredentialsProvider::builder()
            .profile_files(files)
            .profile_name(profile)
            .build();

        tracing::debug!(
            "Reading credentials for profile '{profile}' from {}",
            self.path.display()
        );

        let resolved = provider.provide_credentials().await.map_err(|e| {
            CredentialError::Unavailable {
                profile: profile.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            }
        })?;

        Ok(Credentials::new(
            resolved.access_key_id(),
            resolved.secret_access_key(),
            resolved.session_token().map(str::to_string),
        ))
    }
}
