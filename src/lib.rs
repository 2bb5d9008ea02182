//! Route53-DDNS: one-shot Dynamic DNS updater for AWS Route 53
//!
//! A library for discovering the public IP address of a host and
//! upserting it into Route 53 record sets in a single change batch.

pub mod config;
pub mod ip;
pub mod route53;
pub mod transport;
pub mod update;
