//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [logger]
            file = "/var/log/ddns.log"

            [aws_route53]
            hosted_zone_id = "Z123"
            record_names = ["home.example.com", "nas.example.com"]
            ttl = 60
            ipv6 = true
            comment = "ddns"

            [aws]
            profile = "ddns"
            credentials_file = "creds.ini"
            timeout = 15

            [ip]
            endpoint = "https://ip.example.com"
            timeout = 5
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.logger.file.as_deref(), Some("/var/log/ddns.log"));
        assert_eq!(config.aws_route53.hosted_zone_id.as_deref(), Some("Z123"));
        assert_eq!(
            config.aws_route53.record_names,
            Some(vec![
                "home.example.com".to_string(),
                "nas.example.com".to_string()
            ])
        );
        assert_eq!(config.aws_route53.ttl, Some(60));
        assert!(config.aws_route53.ipv6);
        assert_eq!(config.aws_route53.comment.as_deref(), Some("ddns"));
        assert_eq!(config.aws.profile.as_deref(), Some("ddns"));
        assert_eq!(config.aws.credentials_file.as_deref(), Some("creds.ini"));
        assert_eq!(config.aws.timeout, Some(15));
        assert_eq!(config.ip.endpoint.as_deref(), Some("https://ip.example.com"));
        assert_eq!(config.ip.timeout, Some(5));
    }

    #[test]
    fn parse_empty_config_yields_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.logger.file.is_none());
        assert!(config.aws_route53.record_names.is_none());
        assert!(!config.aws_route53.ipv6);
        assert!(config.aws.profile.is_none());
        assert!(config.sites.is_empty());
    }

    #[test]
    fn sites_array_parses_in_order() {
        let toml = r#"
            [[sites]]
            hosted_zone_id = "Z111"
            record_names = ["home.example.com"]

            [[sites]]
            hosted_zone_id = "Z222"
            record_names = ["home.example.org"]
            ipv6 = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert!(config.aws_route53.is_empty());
        assert_eq!(config.sites.len(), 2);
        assert_eq!(config.sites[0].hosted_zone_id.as_deref(), Some("Z111"));
        assert_eq!(config.sites[1].hosted_zone_id.as_deref(), Some("Z222"));
        assert!(config.sites[1].ipv6);
    }

    #[test]
    fn unknown_site_fields_are_rejected() {
        let toml = r#"
            [[sites]]
            zone = "Z111"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn non_numeric_ttl_is_parse_error() {
        let toml = r#"
            [aws_route53]
            ttl = "five minutes"
        "#;

        let result = TomlConfig::parse(toml);
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn record_names_must_be_a_list() {
        let toml = r#"
            [aws_route53]
            record_names = "home.example.com"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
            [aws_route53]
            hosted_zone = "Z123"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let toml = r#"
            [webhook]
            url = "https://example.com"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = TomlConfig::parse("[aws_route53\nttl = 300");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.logger.file.as_deref(), Some("route53-ddns.log"));
        assert_eq!(config.aws.profile.as_deref(), Some("default"));
        assert!(config.sites.is_empty());
    }

    #[test]
    fn default_template_lists_all_sections() {
        let template = default_config_template();

        assert!(template.contains("[logger]"));
        assert!(template.contains("[aws_route53]"));
        assert!(template.contains("[aws]"));
        assert!(template.contains("[ip]"));
        assert!(template.contains("# [[sites]]"));
    }
}
