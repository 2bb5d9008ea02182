//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// Fields are optional at this layer; required-field checks and defaults
/// are applied by [`ValidatedConfig`](super::ValidatedConfig).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Log sink configuration
    #[serde(default)]
    pub logger: LoggerSection,

    /// Route 53 record configuration for a single zone
    #[serde(default)]
    pub aws_route53: Route53Section,

    /// One entry per zone when several zones are updated in one run
    #[serde(default)]
    pub sites: Vec<Route53Section>,

    /// AWS credential selection
    #[serde(default)]
    pub aws: AwsSection,

    /// Public IP discovery configuration
    #[serde(default)]
    pub ip: IpSection,
}

/// Log sink configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerSection {
    /// Append-only log file path
    pub file: Option<String>,
}

/// Route 53 record configuration section.
///
/// Used both for `[aws_route53]` and for each `[[sites]]` entry.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route53Section {
    /// Hosted zone id, e.g. `Z123ABC`
    pub hosted_zone_id: Option<String>,

    /// Record names to upsert, in order
    pub record_names: Option<Vec<String>>,

    /// Record TTL in seconds
    pub ttl: Option<i64>,

    /// Publish `AAAA` records instead of `A`
    #[serde(default)]
    pub ipv6: bool,

    /// Change batch comment
    pub comment: Option<String>,
}

impl Route53Section {
    /// Returns `true` when no key of the section was set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hosted_zone_id.is_none()
            && self.record_names.is_none()
            && self.ttl.is_none()
            && !self.ipv6
            && self.comment.is_none()
    }
}

/// AWS credential selection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsSection {
    /// Profile name within the credentials file
    pub profile: Option<String>,

    /// Path to the ini-style credentials file
    pub credentials_file: Option<String>,

    /// Route 53 request timeout in seconds
    pub timeout: Option<u64>,
}

/// Public IP discovery section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IpSection {
    /// IP-echo endpoint URL
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Route53-DDNS Configuration File

[logger]
# Append-only log file (required)
# Relative paths are resolved against this file's directory
file = "route53-ddns.log"

[aws_route53]
# Hosted zone id (required)
# hosted_zone_id = "Z123EXAMPLE"

# Record names to upsert with the public IP address (required, at least one)
# record_names = ["home.example.com", "nas.example.com"]

# Record TTL in seconds (default: 300)
# ttl = 300

# Publish AAAA records instead of A records (default: false)
# ipv6 = false

# Change batch comment (default: "AWS Route53 DDNS Client")
# comment = "AWS Route53 DDNS Client"

# To update several hosted zones in one run, remove [aws_route53] and
# list each zone as a [[sites]] entry with the same keys. Every site gets
# its own change batch, submitted in order. All sites must agree on ipv6.
#
# [[sites]]
# hosted_zone_id = "Z123EXAMPLE"
# record_names = ["home.example.com"]
#
# [[sites]]
# hosted_zone_id = "Z456EXAMPLE"
# record_names = ["home.example.org"]
# ttl = 60

[aws]
# Profile name in the credentials file (required)
profile = "default"

# Ini-style AWS credentials file (default: aws_credentials.ini next to this file)
# credentials_file = "aws_credentials.ini"

# Route 53 request timeout in seconds (default: 30)
# timeout = 30

[ip]
# IP-echo endpoint (default: https://api.ipify.org, or https://api6.ipify.org when ipv6 = true)
# endpoint = "https://api.ipify.org"

# Request timeout in seconds (default: 10)
# timeout = 10
"#
    .to_string()
}
