//! Validated configuration loaded from the TOML file.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{Route53Section, TomlConfig};

/// One DNS name: optional wildcard prefix, labels of up to 63 characters,
/// optional trailing dot.
static RECORD_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\*\.)?([A-Za-z0-9_]([A-Za-z0-9_-]{0,61}[A-Za-z0-9_])?\.)*[A-Za-z0-9_]([A-Za-z0-9_-]{0,61}[A-Za-z0-9_])?\.?$",
    )
    .expect("record name pattern is valid")
});

static HOSTED_ZONE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(/hostedzone/)?[A-Z0-9]+$").expect("hosted zone id pattern is valid")
});

/// Longest DNS name in presentation format, excluding the trailing dot.
const MAX_NAME_LEN: usize = 253;

/// Dotted keys and hints used when a site's required key is missing.
struct SiteKeys {
    hosted_zone_id: &'static str,
    zone_hint: &'static str,
    record_names: &'static str,
    names_hint: &'static str,
}

const SINGLE_SITE: SiteKeys = SiteKeys {
    hosted_zone_id: field::HOSTED_ZONE_ID,
    zone_hint: "Set aws_route53.hosted_zone_id in config file",
    record_names: field::RECORD_NAMES,
    names_hint: "Set aws_route53.record_names to a list of record names",
};

const LISTED_SITE: SiteKeys = SiteKeys {
    hosted_zone_id: field::SITE_HOSTED_ZONE_ID,
    zone_hint: "Set hosted_zone_id in every [[sites]] entry",
    record_names: field::SITE_RECORD_NAMES,
    names_hint: "Set record_names in every [[sites]] entry",
};

/// The records to upsert in one hosted zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Route 53 hosted zone id
    pub hosted_zone_id: String,

    /// Record names to upsert, in configured order (non-empty)
    pub record_names: Vec<String>,

    /// Record TTL in seconds
    pub ttl: i64,

    /// Publish `AAAA` instead of `A` records
    pub ipv6: bool,

    /// Change batch comment
    pub comment: String,
}

impl SiteConfig {
    fn from_section(section: &Route53Section, keys: &SiteKeys) -> Result<Self, ConfigError> {
        let zone = required(
            section.hosted_zone_id.as_deref(),
            keys.hosted_zone_id,
            keys.zone_hint,
        )?;
        if !HOSTED_ZONE_ID.is_match(zone) {
            return Err(ConfigError::InvalidZoneId(zone.to_string()));
        }

        let names = section
            .record_names
            .as_ref()
            .ok_or_else(|| ConfigError::missing(keys.record_names, keys.names_hint))?;
        if names.is_empty() {
            return Err(ConfigError::NoRecordNames);
        }
        let record_names = names
            .iter()
            .map(|name| validate_record_name(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            hosted_zone_id: zone.to_string(),
            record_names,
            ttl: resolve_ttl(section.ttl)?,
            ipv6: section.ipv6,
            comment: resolve_comment(section.comment.as_deref())?,
        })
    }
}

/// Fully validated configuration ready for use by the application.
///
/// Constructed once at startup and passed by reference into each
/// component. Nothing reads configuration from anywhere else.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Zones to update, in configured order (non-empty)
    pub sites: Vec<SiteConfig>,

    /// Address family shared by every site
    pub ipv6: bool,

    /// Profile name in the credentials file (required)
    pub credential_profile: String,

    /// Ini-style credentials file
    pub credentials_file: PathBuf,

    /// Append-only log file (required)
    pub log_file: PathBuf,

    /// IP-echo endpoint
    pub ip_endpoint: Url,

    /// Timeout for the IP-echo request
    pub ip_timeout: Duration,

    /// Timeout for the Route 53 request
    pub route53_timeout: Duration,

    /// Dry-run mode (log the change batch without calling Route 53)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Config { sites: [")?;
        for (i, site) in self.sites.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(
                f,
                "hosted_zone_id: {}, records: {}, ttl: {}s",
                site.hosted_zone_id,
                site.record_names.join(","),
                site.ttl,
            )?;
        }
        write!(
            f,
            "], ipv6: {}, profile: {}, endpoint: {}, log_file: {}, dry_run: {} }}",
            self.ipv6,
            self.credential_profile,
            self.ip_endpoint,
            self.log_file.display(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Loads and validates the configuration file at `path`.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory. Runtime flags (`dry_run`, `verbose`) start disabled;
    /// see [`ValidatedConfig::with_cli_flags`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - A required field is missing or a value is invalid
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let toml = TomlConfig::load(path)?;
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        Self::from_raw(&toml, base_dir)
    }

    /// Creates a validated configuration from a parsed TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (zone id, record names, profile, log file)
    /// - Both `[aws_route53]` and `[[sites]]` are given, or the sites mix
    ///   address families
    /// - A record name list is empty or a name is malformed
    /// - The zone id, TTL, comment, endpoint or a timeout is invalid
    pub fn from_raw(toml: &TomlConfig, base_dir: &Path) -> Result<Self, ConfigError> {
        let sites = Self::resolve_sites(toml)?;
        let ipv6 = sites.first().is_some_and(|site| site.ipv6);

        let credential_profile = required(
            toml.aws.profile.as_deref(),
            field::PROFILE,
            "Set aws.profile to a profile in the credentials file",
        )?
        .to_string();

        let credentials_file = resolve_path(
            toml.aws
                .credentials_file
                .as_deref()
                .unwrap_or(defaults::CREDENTIALS_FILE),
            base_dir,
        );

        let log_file = resolve_path(
            required(
                toml.logger.file.as_deref(),
                field::LOG_FILE,
                "Set logger.file to the log file path",
            )?,
            base_dir,
        );

        let ip_endpoint = Self::resolve_endpoint(toml, ipv6)?;

        let ip_timeout = resolve_timeout(toml.ip.timeout, "ip.timeout", defaults::IP_TIMEOUT_SECS)?;
        let route53_timeout = resolve_timeout(
            toml.aws.timeout,
            "aws.timeout",
            defaults::ROUTE53_TIMEOUT_SECS,
        )?;

        Ok(Self {
            sites,
            ipv6,
            credential_profile,
            credentials_file,
            log_file,
            ip_endpoint,
            ip_timeout,
            route53_timeout,
            dry_run: false,
            verbose: false,
        })
    }

    /// Applies the runtime flags given on the command line.
    #[must_use]
    pub fn with_cli_flags(mut self, cli: &Cli) -> Self {
        self.dry_run = cli.dry_run;
        self.verbose = cli.verbose;
        self
    }

    /// `[aws_route53]` is the single-zone form; `[[sites]]` lists zones.
    fn resolve_sites(toml: &TomlConfig) -> Result<Vec<SiteConfig>, ConfigError> {
        if toml.sites.is_empty() {
            return Ok(vec![SiteConfig::from_section(&toml.aws_route53, &SINGLE_SITE)?]);
        }

        if !toml.aws_route53.is_empty() {
            return Err(ConfigError::ConflictingSites);
        }

        let sites = toml
            .sites
            .iter()
            .enumerate()
            .map(|(index, section)| {
                SiteConfig::from_section(section, &LISTED_SITE).map_err(|e| ConfigError::Site {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if sites.windows(2).any(|pair| pair[0].ipv6 != pair[1].ipv6) {
            return Err(ConfigError::MixedAddressFamilies);
        }

        Ok(sites)
    }

    fn resolve_endpoint(toml: &TomlConfig, ipv6: bool) -> Result<Url, ConfigError> {
        let endpoint = toml
            .ip
            .endpoint
            .as_deref()
            .unwrap_or_else(|| defaults::ip_endpoint(ipv6));

        let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: endpoint.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(url)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
    hint: &'static str,
) -> Result<&'a str, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::missing(field, hint))
}

fn resolve_ttl(ttl: Option<i64>) -> Result<i64, ConfigError> {
    let ttl = ttl.unwrap_or(defaults::TTL);

    if !(0..=defaults::MAX_TTL).contains(&ttl) {
        return Err(ConfigError::InvalidTtl(ttl));
    }

    Ok(ttl)
}

/// An absent or empty comment falls back to the default.
fn resolve_comment(comment: Option<&str>) -> Result<String, ConfigError> {
    let comment = comment
        .filter(|c| !c.is_empty())
        .unwrap_or(defaults::COMMENT);

    let length = comment.chars().count();
    if length > defaults::MAX_COMMENT_LEN {
        return Err(ConfigError::InvalidComment {
            length,
            max: defaults::MAX_COMMENT_LEN,
        });
    }

    Ok(comment.to_string())
}

fn validate_record_name(name: &str) -> Result<String, ConfigError> {
    let invalid = |reason| ConfigError::InvalidRecordName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }

    if name.trim_end_matches('.').len() > MAX_NAME_LEN {
        return Err(invalid("exceeds 253 characters"));
    }

    if !RECORD_NAME.is_match(name) {
        return Err(invalid("must be a valid DNS name"));
    }

    Ok(name.to_string())
}

fn resolve_timeout(
    seconds: Option<u64>,
    field: &'static str,
    default_secs: u64,
) -> Result<Duration, ConfigError> {
    let seconds = seconds.unwrap_or(default_secs);

    if seconds == 0 {
        return Err(ConfigError::InvalidDuration {
            field,
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}

/// Expands a leading `~` and anchors relative paths at `base_dir`.
fn resolve_path(raw: &str, base_dir: &Path) -> PathBuf {
    let expanded = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => dirs::home_dir().map_or_else(
            || PathBuf::from(raw),
            |home| home.join(rest.trim_start_matches('/')),
        ),
        _ => PathBuf::from(raw),
    };

    if expanded.is_relative() {
        base_dir.join(expanded)
    } else {
        expanded
    }
}
