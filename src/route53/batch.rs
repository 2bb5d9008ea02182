//! Change batch construction.

use std::fmt;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::ip::PublicIpAddress;

/// DNS record type written by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordType {
    /// IPv4 address record
    #[serde(rename = "A")]
    A,
    /// IPv6 address record
    #[serde(rename = "AAAA")]
    Aaaa,
}

impl RecordType {
    /// Returns `AAAA` when `ipv6` is set, `A` otherwise.
    #[must_use]
    pub const fn for_ipv6_flag(ipv6: bool) -> Self {
        if ipv6 { Self::Aaaa } else { Self::A }
    }

    /// Returns the DNS type token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change action. Only UPSERT is ever issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create the record set, or replace it if it exists
    Upsert,
}

/// One upsert of a single-value record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecordChange {
    /// Always [`ChangeAction::Upsert`]
    pub action: ChangeAction,
    /// Record type
    #[serde(rename = "Type")]
    pub record_type: RecordType,
    /// Fully qualified record name
    pub name: String,
    /// Time to live in seconds
    #[serde(rename = "TTL")]
    pub ttl: i64,
    /// Record value
    pub value: PublicIpAddress,
}

/// An atomic set of record changes for one hosted zone.
///
/// Holds exactly one change per configured record name, in configured
/// order, all pointing at the same address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeBatch {
    hosted_zone_id: String,
    comment: String,
    changes: Vec<ResourceRecordChange>,
    #[serde(skip)]
    address: PublicIpAddress,
}

impl ChangeBatch {
    /// Builds the upsert batch for `address` from one site's records.
    ///
    /// Pure and infallible: the site has already been validated.
    #[must_use]
    pub fn upsert(site: &SiteConfig, address: PublicIpAddress) -> Self {
        let record_type = RecordType::for_ipv6_flag(site.ipv6);

        let changes = site
            .record_names
            .iter()
            .map(|name| ResourceRecordChange {
                action: ChangeAction::Upsert,
                record_type,
                name: name.clone(),
                ttl: site.ttl,
                value: address,
            })
            .collect();

        Self {
            hosted_zone_id: site.hosted_zone_id.clone(),
            comment: site.comment.clone(),
            changes,
            address,
        }
    }

    /// Returns the target hosted zone id.
    #[must_use]
    pub fn hosted_zone_id(&self) -> &str {
        &self.hosted_zone_id
    }

    /// Returns the batch comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the changes in submission order.
    #[must_use]
    pub fn changes(&self) -> &[ResourceRecordChange] {
        &self.changes
    }

    /// Returns the address every change points at.
    #[must_use]
    pub const fn address(&self) -> PublicIpAddress {
        self.address
    }
}
