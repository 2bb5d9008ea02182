//! Tests for the run module and the application glue.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::*;
use crate::app::{exit_code, failure_message, success_message};
use route53_ddns::config::{ConfigError, TomlConfig, defaults};
use route53_ddns::ip::ResolveError;
use route53_ddns::route53::{Failure, ProviderError};

fn make_test_config(extra: &str) -> ValidatedConfig {
    let content = format!(
        r#"
        [logger]
        file = "route53-ddns.log"

        [aws_route53]
        hosted_zone_id = "Z123EXAMPLE"
        record_names = ["home.example.com"]
        {extra}

        [aws]
        profile = "default"
        "#
    );
    let toml = TomlConfig::parse(&content).unwrap();
    ValidatedConfig::from_raw(&toml, Path::new("/etc/route53-ddns")).unwrap()
}

fn access_denied() -> UpdateError {
    UpdateError::Publish(Failure {
        kind: route53_ddns::route53::FailureKind::Provider,
        reason: "AccessDenied: not authorized".to_string(),
        provider_error_code: Some("AccessDenied".to_string()),
    })
}

mod build {
    use super::*;

    #[test]
    fn ipv4_updater_builds_with_defaults() {
        let config = make_test_config("");

        assert!(build_updater(&config).is_ok());
        assert_eq!(config.ip_endpoint.as_str(), "https://api.ipify.org/");
        assert_eq!(config.ip_timeout, Duration::from_secs(defaults::IP_TIMEOUT_SECS));
    }

    #[test]
    fn ipv6_updater_uses_ipv6_endpoint() {
        let config = make_test_config("ipv6 = true");

        assert!(build_updater(&config).is_ok());
        assert_eq!(config.ip_endpoint.as_str(), "https://api6.ipify.org/");
    }

    #[test]
    fn credentials_file_sits_next_to_config() {
        let config = make_test_config("");

        assert_eq!(
            config.credentials_file,
            PathBuf::from("/etc/route53-ddns").join(defaults::CREDENTIALS_FILE)
        );
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn each_failure_category_has_its_own_code() {
        let config = UpdateError::Config(ConfigError::NoRecordNames);
        let network = UpdateError::Network(ResolveError::EmptyBody);
        let credentials = UpdateError::Publish(Failure::invalid_credentials());
        let logging = UpdateError::Logging {
            path: PathBuf::from("/var/log/route53-ddns.log"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        assert_eq!(exit_code::for_error(&config), exit_code::CONFIG_ERROR);
        assert_eq!(exit_code::for_error(&network), exit_code::network_error());
        assert_eq!(exit_code::for_error(&credentials), exit_code::credentials_error());
        assert_eq!(exit_code::for_error(&access_denied()), exit_code::provider_error());
        assert_eq!(exit_code::for_error(&logging), exit_code::logging_error());
    }

    #[test]
    fn failure_codes_differ_from_success() {
        assert_ne!(exit_code::network_error(), exit_code::SUCCESS);
        assert_ne!(exit_code::provider_error(), exit_code::credentials_error());
    }
}

mod messages {
    use super::*;

    #[test]
    fn success_names_the_address() {
        let address = "203.0.113.7".parse().unwrap();
        assert_eq!(
            success_message(address),
            "IP Address updated successfully to 203.0.113.7"
        );
    }

    #[test]
    fn provider_failure_quotes_the_code() {
        assert_eq!(
            failure_message(&access_denied()),
            "A \"AccessDenied\" error occurred. Please check the log file for details."
        );
    }

    #[test]
    fn unreachable_provider_says_so() {
        let error = UpdateError::Publish(Failure::from(ProviderError::Transport(
            "dispatch failure".to_string(),
        )));

        assert_eq!(exit_code::for_error(&error), exit_code::provider_error());
        assert_eq!(
            failure_message(&error),
            "Route 53 could not be reached. Please check the log file for details."
        );
    }

    #[test]
    fn unreadable_reply_is_not_reported_as_unreachable() {
        let error = UpdateError::Publish(Failure::from(ProviderError::UnreadableResponse(
            "unexpected end of XML".to_string(),
        )));

        assert_eq!(exit_code::for_error(&error), exit_code::provider_error());
        assert_eq!(
            failure_message(&error),
            "Route 53 did not accept the change. Please check the log file for details."
        );
    }

    #[test]
    fn credentials_failure_has_fixed_message() {
        let error = UpdateError::Publish(Failure::invalid_credentials());
        assert_eq!(
            failure_message(&error),
            "Invalid AWS credentials provided. Please check the log file for details."
        );
    }

    #[test]
    fn config_failure_includes_cause() {
        let error = UpdateError::Config(ConfigError::NoRecordNames);
        assert!(failure_message(&error).starts_with("Configuration error: "));
    }
}
