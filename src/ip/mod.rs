//! Public IP address discovery.
//!
//! This module provides:
//! - The validated address type ([`PublicIpAddress`]) and its family ([`IpFamily`])
//! - The resolver abstraction ([`AddressResolver`])
//! - The IP-echo implementation over HTTP ([`PublicIpResolver`])

mod address;
mod error;
mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use address::{IpFamily, PublicIpAddress};
pub use error::ResolveError;
pub use resolver::{AddressResolver, PublicIpResolver};
