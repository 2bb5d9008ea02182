//! Configuration layer for Route53-DDNS.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! Record, credential and logging settings come only from the TOML file.
//! The command line selects the file (`--config`) and toggles the runtime
//! flags `--dry-run` and `--verbose`.
//!
//! # Sites
//!
//! `[aws_route53]` describes one hosted zone. A file may instead list
//! several zones as `[[sites]]` entries with the same keys; each becomes
//! a [`SiteConfig`]. The two forms cannot be combined.
//!
//! # Path Resolution
//!
//! `logger.file` and `aws.credentials_file` may be relative; they are
//! resolved against the directory containing the configuration file.
//! A leading `~` expands to the current user's home directory.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{SiteConfig, ValidatedConfig, write_default_config};
