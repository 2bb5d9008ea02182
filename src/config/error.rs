//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the config path and a
/// [`ValidatedConfig`](super::ValidatedConfig).
///
/// Every variant is fatal and is raised before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Configured path
        path: PathBuf,
        /// What the OS reported
        #[source]
        source: std::io::Error,
    },

    /// Not valid TOML, an unknown key, or a value of the wrong type.
    ///
    /// Also covers wrongly typed values such as a non-numeric `ttl`.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by the config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The record name list is present but empty.
    #[error("record_names must contain at least one record name")]
    NoRecordNames,

    /// Both `[aws_route53]` and `[[sites]]` are present.
    #[error("Use either [aws_route53] or [[sites]], not both")]
    ConflictingSites,

    /// The `[[sites]]` entries disagree on `ipv6`.
    #[error("All [[sites]] entries must use the same ipv6 setting")]
    MixedAddressFamilies,

    /// One `[[sites]]` entry failed validation.
    #[error("Invalid sites[{index}]: {source}")]
    Site {
        /// Zero-based position in the `sites` array
        index: usize,
        /// What was wrong with the entry
        #[source]
        source: Box<ConfigError>,
    },

    /// A record name is not a valid DNS name.
    #[error("Invalid record name '{name}': {reason}")]
    InvalidRecordName {
        /// The invalid record name
        name: String,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// The hosted zone id is malformed.
    #[error("Invalid hosted zone id '{0}': expected an id like 'Z123ABC' or '/hostedzone/Z123ABC'")]
    InvalidZoneId(String),

    /// TTL outside the range accepted by Route 53.
    #[error("Invalid TTL {0}: must be between 0 and 2147483647 seconds")]
    InvalidTtl(i64),

    /// Change batch comment is too long.
    #[error("Invalid comment: {length} characters exceeds the limit of {max}")]
    InvalidComment {
        /// Length of the configured comment
        length: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// The IP-echo endpoint is not an http(s) URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A timeout of zero seconds.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Dotted TOML keys reported by `MissingRequired`.
pub mod field {
    /// The hosted zone id field.
    pub const HOSTED_ZONE_ID: &str = "aws_route53.hosted_zone_id";
    /// The record names field.
    pub const RECORD_NAMES: &str = "aws_route53.record_names";
    /// The hosted zone id of a `[[sites]]` entry.
    pub const SITE_HOSTED_ZONE_ID: &str = "sites.hosted_zone_id";
    /// The record names of a `[[sites]]` entry.
    pub const SITE_RECORD_NAMES: &str = "sites.record_names";
    /// The credential profile field.
    pub const PROFILE: &str = "aws.profile";
    /// The log file field.
    pub const LOG_FILE: &str = "logger.file";
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingRequired`].
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
