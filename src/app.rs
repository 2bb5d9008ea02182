//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, final user messages
//! and error hints that support the main entry point.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use route53_ddns::config::{ConfigError, field};
use route53_ddns::ip::PublicIpAddress;
use route53_ddns::route53::FailureKind;
use route53_ddns::update::UpdateError;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use route53_ddns::route53::FailureKind;
    use route53_ddns::update::UpdateError;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable file, missing or invalid fields.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Public IP discovery failed (exit code 2).
    ///
    /// Note: These are functions rather than constants because `ExitCode::from()` is not `const fn`.
    pub fn network_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Credentials could not be resolved (exit code 3).
    pub fn credentials_error() -> ExitCode {
        ExitCode::from(3)
    }

    /// Route 53 rejected the change, sent an unreadable reply or was unreachable (exit code 4).
    pub fn provider_error() -> ExitCode {
        ExitCode::from(4)
    }

    /// The log file could not be opened (exit code 5).
    pub fn logging_error() -> ExitCode {
        ExitCode::from(5)
    }

    /// Maps a failed run to its exit code.
    pub fn for_error(error: &UpdateError) -> ExitCode {
        match error {
            UpdateError::Config(_) => CONFIG_ERROR,
            UpdateError::Logging { .. } => logging_error(),
            UpdateError::Network(_) => network_error(),
            UpdateError::Publish(failure) => match failure.kind {
                FailureKind::Credentials => credentials_error(),
                FailureKind::Provider | FailureKind::Unreachable => provider_error(),
            },
        }
    }
}

/// Returns the message printed after a successful update.
pub fn success_message(address: PublicIpAddress) -> String {
    format!("IP Address updated successfully to {address}")
}

/// Returns the message printed after a failed update.
pub fn failure_message(error: &UpdateError) -> String {
    match error {
        UpdateError::Config(e) => format!("Configuration error: {e}"),
        UpdateError::Logging { .. } => format!("Error: {error}"),
        UpdateError::Network(_) => {
            "Unable to determine the public IP address. Please check the log file for details."
                .to_string()
        }
        UpdateError::Publish(failure) => match (failure.kind, &failure.provider_error_code) {
            (FailureKind::Credentials, _) => {
                "Invalid AWS credentials provided. Please check the log file for details."
                    .to_string()
            }
            (FailureKind::Provider, Some(code)) => {
                format!("A \"{code}\" error occurred. Please check the log file for details.")
            }
            (FailureKind::Provider, None) => {
                "Route 53 did not accept the change. Please check the log file for details."
                    .to_string()
            }
            (FailureKind::Unreachable, _) => {
                "Route 53 could not be reached. Please check the log file for details.".to_string()
            }
        },
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } => {
            if *f == field::HOSTED_ZONE_ID || *f == field::RECORD_NAMES {
                eprintln!("\nRun 'route53-ddns init' to generate a configuration template.");
            }
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'route53-ddns init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Events go to stderr and are appended to `log_file` without ANSI colors.
///
/// # Errors
///
/// Returns [`UpdateError::Logging`] if the log file cannot be opened or a
/// global subscriber is already installed.
pub fn setup_tracing(verbose: bool, log_file: &Path) -> Result<(), UpdateError> {
    let logging_error = |source: std::io::Error| UpdateError::Logging {
        path: log_file.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(logging_error)?;

    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| logging_error(std::io::Error::other(e)))
}
