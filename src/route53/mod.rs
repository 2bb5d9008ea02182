//! Route 53 record publishing.
//!
//! This module provides:
//! - Change batch construction ([`ChangeBatch`])
//! - Credential lookup from an ini-style file ([`CredentialSource`], [`ProfileCredentials`])
//! - Submission over the AWS SDK ([`ChangeSubmitter`], [`Route53Submitter`])
//! - The publishing pipeline and its outcome ([`RecordPublisher`], [`DnsUpdatePublisher`], [`Outcome`])

mod batch;
mod credentials;
mod error;
mod publisher;
mod submitter;


pub use batch::{ChangeAction, ChangeBatch, RecordType, ResourceRecordChange};
pub use credentials::{CredentialSource, Credentials, ProfileCredentials};
pub use error::{CredentialError, ProviderError};
pub use publisher::{DnsUpdatePublisher, Failure, FailureKind, Outcome, RecordPublisher};
pub use submitter::{ChangeSubmitter, Route53Submitter};
