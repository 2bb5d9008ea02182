//! One update run: discover the address, build a batch per site, publish them.
//!
//! Everything here returns typed results; only the binary decides how
//! the process exits.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{Cli, ConfigError, ValidatedConfig};
use crate::ip::{AddressResolver, PublicIpAddress, ResolveError};
use crate::route53::{ChangeBatch, Failure, FailureKind, Outcome, RecordPublisher};

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;

/// Error type for a failed update run.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log file could not be opened or logging could not be installed.
    #[error("Cannot set up logging to '{}': {source}", path.display())]
    Logging {
        /// The configured log file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The public IP address could not be determined.
    #[error("Unable to determine public IP address: {0}")]
    Network(#[from] ResolveError),

    /// Publishing the change batch failed.
    #[error("{0}")]
    Publish(Failure),
}

impl UpdateError {
    /// Returns the publish failure kind, if this is a publish error.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Publish(failure) => Some(failure.kind),
            _ => None,
        }
    }
}

/// Runs a single update with the given resolver and publisher.
///
/// # Type Parameters
///
/// - `R`: The public address resolver
/// - `P`: The record publisher
#[derive(Debug)]
pub struct Updater<R, P> {
    resolver: R,
    publisher: P,
}

impl<R, P> Updater<R, P> {
    /// Creates an updater from its two collaborators.
    #[must_use]
    pub const fn new(resolver: R, publisher: P) -> Self {
        Self {
            resolver,
            publisher,
        }
    }
}

impl<R: AddressResolver, P: RecordPublisher> Updater<R, P> {
    /// Resolves the public address once and upserts every configured
    /// record, one change batch per site.
    ///
    /// Sites are published in configured order and the run stops at the
    /// first failure; earlier sites stay updated. In dry-run mode the
    /// batches are logged and the publisher is never called, so
    /// credentials are not read either.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Network`] if the address cannot be resolved
    /// and [`UpdateError::Publish`] for the first failed publish.
    pub async fn run(&self, config: &ValidatedConfig) -> Result<PublicIpAddress, UpdateError> {
        let address = match self.resolver.resolve().await {
            Ok(address) => address,
            Err(e) => {
                tracing::error!("Unable to determine public IP address: {e}");
                return Err(e.into());
            }
        };

        let batches: Vec<_> = config
            .sites
            .iter()
            .map(|site| ChangeBatch::upsert(site, address))
            .collect();

        if config.dry_run {
            batches.iter().for_each(log_dry_run);
            return Ok(address);
        }

        for batch in &batches {
            match self.publisher.publish(batch, &config.credential_profile).await {
                Outcome::Success { .. } => {
                    tracing::debug!("Hosted zone {} updated", batch.hosted_zone_id());
                }
                Outcome::Failure(failure) => {
                    log_failure(&failure);
                    return Err(UpdateError::Publish(failure));
                }
            }
        }

        tracing::info!("IP Address updated to {address}");
        Ok(address)
    }
}

fn log_failure(failure: &Failure) {
    match failure.kind {
        FailureKind::Credentials => tracing::error!("Invalid AWS credentials provided."),
        FailureKind::Provider | FailureKind::Unreachable => {
            tracing::error!("{}", failure.reason);
        }
    }
}

fn log_dry_run(batch: &ChangeBatch) {
    match serde_json::to_string_pretty(batch) {
        Ok(json) => tracing::info!("[DRY-RUN] Would submit change batch:\n{json}"),
        Err(_) => tracing::info!("[DRY-RUN] Would submit change batch: {batch:?}"),
    }
}

/// Loads the configuration, prepares the components and runs one update.
///
/// `prepare` receives the validated configuration and is expected to
/// install logging and build the [`Updater`]. It is not called when the
/// configuration is invalid, so nothing touches the network in that case.
///
/// # Errors
///
/// Returns [`UpdateError::Config`] for configuration problems, any error
/// `prepare` returns, and otherwise the result of [`Updater::run`].
pub async fn execute<R, P, F>(cli: &Cli, prepare: F) -> Result<PublicIpAddress, UpdateError>
where
    R: AddressResolver,
    P: RecordPublisher,
    F: FnOnce(&ValidatedConfig) -> Result<Updater<R, P>, UpdateError>,
{
    let config = ValidatedConfig::load(&cli.config)?.with_cli_flags(cli);
    let updater = prepare(&config)?;

    tracing::info!("{config}");
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - Route 53 will not be contacted");
    }

    updater.run(&config).await
}
