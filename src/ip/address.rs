//! Validated public IP address type.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::Serialize;

/// Address family of a public IP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    /// IPv4, published as an `A` record
    V4,
    /// IPv6, published as an `AAAA` record
    V6,
}

impl IpFamily {
    /// Returns the family matching the `ipv6` configuration flag.
    #[must_use]
    pub const fn from_ipv6_flag(ipv6: bool) -> Self {
        if ipv6 { Self::V6 } else { Self::V4 }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// A syntactically valid IPv4 or IPv6 address discovered for this host.
///
/// Serializes as its textual form, which is also the record value
/// sent to Route 53.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct PublicIpAddress(IpAddr);

impl PublicIpAddress {
    /// Wraps an already parsed address.
    #[must_use]
    pub const fn new(addr: IpAddr) -> Self {
        Self(addr)
    }

    /// Returns the underlying address.
    #[must_use]
    pub const fn addr(&self) -> IpAddr {
        self.0
    }

    /// Returns the address family.
    #[must_use]
    pub const fn family(&self) -> IpFamily {
        match self.0 {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }
}

impl FromStr for PublicIpAddress {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<IpAddr> for PublicIpAddress {
    fn from(addr: IpAddr) -> Self {
        Self(addr)
    }
}

impl From<PublicIpAddress> for String {
    fn from(addr: PublicIpAddress) -> Self {
        addr.to_string()
    }
}

impl fmt::Display for PublicIpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
