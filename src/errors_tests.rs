// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for zone generation and configuration error types.

#[cfg(test)]
mod tests {
    use crate::errors::{ConfigError, ZoneGenError};

    #[test]
    fn test_domain_not_found_error() {
        let error = ZoneGenError::DomainNotFound {
            domain: "example.com".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Domain 'example.com' not found in record source"
        );
        assert_eq!(error.reason(), "DomainNotFound");
    }

    #[test]
    fn test_missing_soa_error() {
        let error = ZoneGenError::MissingSoa {
            domain: "example.com".to_string(),
        };

        assert_eq!(error.to_string(), "Domain 'example.com' has no SOA record");
        assert_eq!(error.reason(), "MissingSOA");
    }

    #[test]
    fn test_duplicate_soa_error() {
        let error = ZoneGenError::DuplicateSoa {
            domain: "example.com".to_string(),
            count: 2,
        };

        assert_eq!(
            error.to_string(),
            "Domain 'example.com' has 2 SOA records, expected exactly one"
        );
    }

    #[test]
    fn test_missing_default_ns_error() {
        let error = ZoneGenError::MissingDefaultNs {
            domain: "example.com".to_string(),
        };

        assert!(error.to_string().contains("no NS record at the apex"));
        assert_eq!(error.reason(), "MissingDefaultNS");
    }

    #[test]
    fn test_unsupported_record_type_error() {
        let error = ZoneGenError::UnsupportedRecordType {
            record_type: "AAAA".to_string(),
            name: "www.example.com".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Unsupported record type 'AAAA' for 'www.example.com'"
        );
        assert_eq!(error.reason(), "UnsupportedRecordType");
    }

    #[test]
    fn test_source_error_from_anyhow() {
        let err = anyhow::anyhow!("connection refused").context("loading records");
        let error = ZoneGenError::from(err);

        assert_eq!(
            error,
            ZoneGenError::Source("loading records: connection refused".to_string())
        );
        assert_eq!(error.reason(), "RecordSourceFailed");
    }

    #[test]
    fn test_config_errors_display() {
        assert_eq!(
            ConfigError::MissingDomain.to_string(),
            "One of 'domain' or 'domain_id' is required"
        );
        assert_eq!(
            ConfigError::ConflictingDomain {
                domain: "example.com".to_string(),
                domain_id: 7,
            }
            .to_string(),
            "Only one of 'domain' (example.com) or 'domain_id' (7) may be set"
        );
        assert_eq!(
            ConfigError::EmptyDefaultNs { index: 1 }.to_string(),
            "'default_ns' entry 1 is empty"
        );
    }
}
