// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for settings parsing and validation.

#[cfg(test)]
mod tests {
    use crate::config::{Settings, Workarounds};
    use crate::errors::ConfigError;
    use crate::source::DomainRef;
    use std::io::Write;

    fn valid_settings() -> Settings {
        Settings {
            domain: Some("example.com".to_string()),
            master_host: Some("192.0.2.53".to_string()),
            ..Settings::default()
        }
    }

    #[test]
    fn test_defaults_enable_both_workarounds() {
        let settings = Settings::default();
        assert!(settings.workaround_no_ns);
        assert!(settings.workaround_cname_and_other_data);
        assert!(settings.default_ns.is_empty());
        assert_eq!(settings.workarounds(), Workarounds::default());
    }

    #[test]
    fn test_parse_yaml_settings() {
        let yaml = r#"
domain: example.com
master_host: 192.0.2.53
workaround_cname_and_other_data: false
default_ns:
  - ns1.example.com
  - ns2.example.com
"#;
        let settings = Settings::parse(yaml, "test.yaml").unwrap();
        assert_eq!(settings.domain.as_deref(), Some("example.com"));
        assert!(settings.workaround_no_ns);
        assert!(!settings.workaround_cname_and_other_data);
        assert_eq!(settings.default_ns.len(), 2);
    }

    #[test]
    fn test_parse_json_settings() {
        let json = r#"{"domain_id": 7, "master_host": "primary.example.net"}"#;
        let settings = Settings::parse(json, "test.json").unwrap();
        assert_eq!(settings.domain_id, Some(7));
        assert_eq!(settings.domain_ref().unwrap(), DomainRef::Id(7));
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        let err = Settings::parse("workaround_no_ns: [1, 2]", "bad.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "bad.yaml"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "domain: example.org\nmaster_host: ns0.example.org").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(
            settings.domain_ref().unwrap(),
            DomainRef::Name("example.org".to_string())
        );
    }

    #[test]
    fn test_validate_accepts_minimal_settings() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_a_domain() {
        let settings = Settings {
            domain: None,
            ..valid_settings()
        };
        assert_eq!(settings.validate(), Err(ConfigError::MissingDomain));
    }

    #[test]
    fn test_validate_rejects_both_domain_and_id() {
        let settings = Settings {
            domain_id: Some(3),
            ..valid_settings()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ConflictingDomain { domain_id: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_domain() {
        let settings = Settings {
            domain: Some("  ".to_string()),
            ..valid_settings()
        };
        assert_eq!(settings.validate(), Err(ConfigError::MissingDomain));
    }

    #[test]
    fn test_validate_requires_master_host() {
        let settings = Settings {
            master_host: Some(String::new()),
            ..valid_settings()
        };
        assert_eq!(settings.validate(), Err(ConfigError::MissingMasterHost));
    }

    #[test]
    fn test_validate_rejects_blank_default_ns() {
        let settings = Settings {
            default_ns: vec!["ns1.example.com".to_string(), " ".to_string()],
            ..valid_settings()
        };
        assert_eq!(
            settings.validate(),
            Err(ConfigError::EmptyDefaultNs { index: 1 })
        );
    }
}
