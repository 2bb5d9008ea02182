//! Application execution logic.
//!
//! Wires the production components into an [`Updater`] and runs it.

use route53_ddns::config::{Cli, ValidatedConfig};
use route53_ddns::ip::{IpFamily, PublicIpAddress, PublicIpResolver};
use route53_ddns::route53::{DnsUpdatePublisher, ProfileCredentials, Route53Submitter};
use route53_ddns::transport::ReqwestClient;
use route53_ddns::update::{self, UpdateError, Updater};

use crate::app::setup_tracing;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Type alias for the production publisher.
type AppPublisher = DnsUpdatePublisher<ProfileCredentials, Route53Submitter>;

/// Type alias for the production updater.
pub type AppUpdater = Updater<PublicIpResolver<ReqwestClient>, AppPublisher>;

/// Builds the production updater from the validated configuration.
///
/// # Errors
///
/// Returns [`UpdateError::Network`] if the HTTP client cannot be created.
pub fn build_updater(config: &ValidatedConfig) -> Result<AppUpdater, UpdateError> {
    let client = ReqwestClient::with_timeout(config.ip_timeout)
        .map_err(|e| UpdateError::Network(e.into()))?;

    let resolver = PublicIpResolver::new(client, config.ip_endpoint.clone())
        .with_family(IpFamily::from_ipv6_flag(config.ipv6));

    let publisher = DnsUpdatePublisher::new(
        ProfileCredentials::new(&config.credentials_file),
        Route53Submitter::new(config.route53_timeout),
    );

    Ok(Updater::new(resolver, publisher))
}

/// Loads the configuration, installs logging and performs one update.
///
/// # Errors
///
/// Returns the first error of the run; see [`UpdateError`].
///
/// # Coverage Note
///
/// This function is excluded from coverage because it installs the
/// global subscriber and talks to real services.
#[cfg(not(tarpaulin_include))]
pub async fn execute(cli: &Cli) -> Result<PublicIpAddress, UpdateError> {
    update::execute(cli, |config| {
        setup_tracing(config.verbose, &config.log_file)?;
        build_updater(config)
    })
    .await
}
