//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default configuration file path, relative to the working directory.
pub const CONFIG_PATH: &str = "config/config.toml";

/// Default credentials file name, resolved next to the configuration file.
pub const CREDENTIALS_FILE: &str = "aws_credentials.ini";

/// Default record TTL in seconds.
pub const TTL: i64 = 300;

/// Largest TTL Route 53 accepts.
pub const MAX_TTL: i64 = 2_147_483_647;

/// Default change batch comment.
pub const COMMENT: &str = "AWS Route53 DDNS Client";

/// Longest change batch comment Route 53 accepts.
pub const MAX_COMMENT_LEN: usize = 256;

/// IP-echo endpoint used for `A` records.
pub const IPV4_ENDPOINT: &str = "https://api.ipify.org";

/// IP-echo endpoint used for `AAAA` records.
pub const IPV6_ENDPOINT: &str = "https://api6.ipify.org";

/// Default timeout for the IP-echo request in seconds.
pub const IP_TIMEOUT_SECS: u64 = 10;

/// Default timeout for the Route 53 request in seconds.
pub const ROUTE53_TIMEOUT_SECS: u64 = 30;

/// Returns the default IP-echo endpoint for the configured address family.
#[must_use]
pub const fn ip_endpoint(ipv6: bool) -> &'static str {
    if ipv6 { IPV6_ENDPOINT } else { IPV4_ENDPOINT }
}
