//! Route 53 change submission over the AWS SDK.

use std::time::Duration;

use aws_sdk_route53::config::timeout::TimeoutConfig;
use aws_sdk_route53::config::{BehaviorVersion, Region};
use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::operation::change_resource_record_sets::ChangeResourceRecordSetsError;
use aws_sdk_route53::types::{self as sdk, ChangeAction as SdkAction, RrType};

use super::{ChangeBatch, Credentials, ProviderError, RecordType};

/// Route 53 is a global service signed against this region.
const ROUTE53_REGION: &str = "us-east-1";

/// Provider name attached to credentials handed to the SDK.
const CREDENTIALS_PROVIDER_NAME: &str = "route53-ddns-profile";

/// Trait for submitting a change batch to the DNS provider.
pub trait ChangeSubmitter: Send + Sync {
    /// Submits `batch` once, signed with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the provider rejects the batch or
    /// cannot be reached.
    fn submit(
        &self,
        credentials: Credentials,
        batch: &ChangeBatch,
    ) -> impl std::future::Future<Output = Result<(), ProviderError>> + Send;
}

/// Submits change batches with `ChangeResourceRecordSets`.
///
/// A fresh client is built per submission; the process only ever
/// submits once.
#[derive(Debug, Clone)]
pub struct Route53Submitter {
    timeout: Duration,
}

impl Route53Submitter {
    /// Creates a submitter whose whole operation is bounded by `timeout`.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn client(&self, credentials: Credentials) -> aws_sdk_route53::Client {
        let config = aws_sdk_route53::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(ROUTE53_REGION))
            .credentials_provider(credentials.into_sdk(CREDENTIALS_PROVIDER_NAME))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(self.timeout)
                    .build(),
            )
            .build();

        aws_sdk_route53::Client::from_conf(config)
    }
}

impl ChangeSubmitter for Route53Submitter {
    async fn submit(&self, credentials: Credentials, batch: &ChangeBatch) -> Result<(), ProviderError> {
        let change_batch = to_sdk_batch(batch)?;
        let client = self.client(credentials);

        tracing::debug!(
            "Submitting {} change(s) to hosted zone {}",
            batch.changes().len(),
            batch.hosted_zone_id()
        );

        let output = client
            .change_resource_record_sets()
            .hosted_zone_id(batch.hosted_zone_id())
            .change_batch(change_batch)
            .send()
            .await
            .map_err(map_sdk_error)?;

        tracing::debug!("Route 53 accepted change batch: {output:?}");
        Ok(())
    }
}

const fn to_sdk_type(record_type: RecordType) -> RrType {
    match record_type {
        RecordType::A => RrType::A,
        RecordType::Aaaa => RrType::Aaaa,
    }
}

fn invalid(e: impl std::fmt::Display) -> ProviderError {
    ProviderError::InvalidRequest(e.to_string())
}

/// Converts a batch into the SDK request shape.
fn to_sdk_batch(batch: &ChangeBatch) -> Result<sdk::ChangeBatch, ProviderError> {
    let mut builder = sdk::ChangeBatch::builder().comment(batch.comment());

    for change in batch.changes() {
        let record = sdk::ResourceRecord::builder()
            .value(change.value.to_string())
            .build()
            .map_err(invalid)?;

        let record_set = sdk::ResourceRecordSet::builder()
            .name(&change.name)
            .r#type(to_sdk_type(change.record_type))
            .ttl(change.ttl)
            .resource_records(record)
            .build()
            .map_err(invalid)?;

        let change = sdk::Change::builder()
            .action(SdkAction::Upsert)
            .resource_record_set(record_set)
            .build()
            .map_err(invalid)?;

        builder = builder.changes(change);
    }

    builder.build().map_err(invalid)
}

/// Maps an SDK failure to a provider error, keeping the service code.
///
/// Code and message are passed through unchanged. Without a code, a reply
/// that could not be parsed is told apart from a request that never got one.
fn map_sdk_error<R: std::fmt::Debug>(
    err: SdkError<ChangeResourceRecordSetsError, R>,
) -> ProviderError {
    if let Some(code) = err.code() {
        return ProviderError::Service {
            code: code.to_string(),
            message: err.message().unwrap_or_default().to_string(),
        };
    }

    let context = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::ResponseError(_) => ProviderError::UnreadableResponse(context),
        _ => ProviderError::Transport(context),
    }
}
