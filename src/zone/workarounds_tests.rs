// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the missing-NS and CNAME-and-other-data workarounds.

#[cfg(test)]
mod tests {
    use super::super::{apply_workarounds, drop_cname_conflicts, ensure_apex_ns, ZoneWarning};
    use crate::config::Workarounds;
    use crate::errors::ZoneGenError;
    use crate::zone::record::{RecordData, RecordType, ResourceRecord};

    fn a(name: &str, addr: &str) -> ResourceRecord {
        ResourceRecord::new(name, RecordData::A(addr.to_string()))
    }

    fn cname(name: &str, target: &str) -> ResourceRecord {
        ResourceRecord::new(name, RecordData::Cname(target.to_string()))
    }

    fn ns(name: &str, host: &str) -> ResourceRecord {
        ResourceRecord::new(name, RecordData::Ns(host.to_string()))
    }

    fn default_ns() -> Vec<String> {
        vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()]
    }

    // ========================================================================
    // Missing apex NS
    // ========================================================================

    #[test]
    fn test_apex_ns_present_is_untouched() {
        let records = vec![ns("", "ns0.example.com"), a("www", "192.0.2.1")];
        let (result, warning) =
            ensure_apex_ns("example.com", records.clone(), &default_ns()).unwrap();

        assert_eq!(result, records);
        assert!(warning.is_none());
    }

    #[test]
    fn test_missing_apex_ns_adds_one_record_per_default() {
        let records = vec![a("", "192.0.2.1"), ns("sub", "ns.sub.example.net")];
        let (result, warning) = ensure_apex_ns("example.com", records, &default_ns()).unwrap();

        let apex_ns: Vec<&ResourceRecord> = result
            .iter()
            .filter(|r| r.is_type(RecordType::Ns) && r.name.is_empty())
            .collect();
        assert_eq!(apex_ns.len(), 2);
        assert_eq!(apex_ns[0].data.content(), "ns1.example.com");
        assert_eq!(apex_ns[1].data.content(), "ns2.example.com");
        assert!(apex_ns.iter().all(|r| r.ttl.is_none()));

        assert_eq!(
            warning,
            Some(ZoneWarning::SynthesizedApexNs {
                nameservers: default_ns()
            })
        );
    }

    #[test]
    fn test_missing_apex_ns_without_defaults_fails() {
        let err = ensure_apex_ns("example.com", vec![a("", "192.0.2.1")], &[]).unwrap_err();
        assert_eq!(
            err,
            ZoneGenError::MissingDefaultNs {
                domain: "example.com".to_string()
            }
        );
    }

    // ========================================================================
    // CNAME and other data
    // ========================================================================

    #[test]
    fn test_cname_conflict_drops_other_types() {
        let records = vec![cname("www", "example.com"), a("www", "192.0.2.1")];
        let (result, warnings) = drop_cname_conflicts("example.com", records);

        assert_eq!(result, vec![cname("www", "example.com")]);
        assert_eq!(
            warnings,
            vec![ZoneWarning::DroppedConflictingRecord {
                record_type: "A".to_string(),
                name: "www".to_string(),
                content: "192.0.2.1".to_string(),
            }]
        );
    }

    #[test]
    fn test_cname_conflict_drops_unsupported_types() {
        let aaaa = ResourceRecord::new(
            "www",
            RecordData::Unsupported {
                record_type: "AAAA".to_string(),
                content: "2001:db8::1".to_string(),
            },
        );
        let records = vec![cname("www", "example.com"), aaaa];
        let (result, warnings) = drop_cname_conflicts("example.com", records);

        assert_eq!(result, vec![cname("www", "example.com")]);
        assert_eq!(
            warnings,
            vec![ZoneWarning::DroppedConflictingRecord {
                record_type: "AAAA".to_string(),
                name: "www".to_string(),
                content: "2001:db8::1".to_string(),
            }]
        );
    }

    #[test]
    fn test_wildcard_names_are_never_filtered() {
        let records = vec![cname("*", "example.com"), a("*", "192.0.2.1")];
        let (result, warnings) = drop_cname_conflicts("example.com", records.clone());

        assert_eq!(result, records);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let records = vec![
            a("b", "192.0.2.2"),
            cname("www", "example.com"),
            a("www", "192.0.2.1"),
            a("a", "192.0.2.3"),
            ResourceRecord::new(
                "www",
                RecordData::Mx {
                    priority: 10,
                    exchange: "mail".to_string(),
                },
            ),
            a("c", "192.0.2.4"),
        ];
        let (result, warnings) = drop_cname_conflicts("example.com", records);

        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "www", "a", "c"]);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_warning_display_names_record() {
        let warning = ZoneWarning::DroppedConflictingRecord {
            record_type: "TXT".to_string(),
            name: "www".to_string(),
            content: "hello".to_string(),
        };
        let text = warning.to_string();
        assert!(text.contains("TXT"));
        assert!(text.contains("www"));
        assert!(text.contains("hello"));
    }

    // ========================================================================
    // Combined
    // ========================================================================

    #[test]
    fn test_disabled_workarounds_change_nothing() {
        let records = vec![cname("www", "example.com"), a("www", "192.0.2.1")];
        let disabled = Workarounds {
            no_ns: false,
            cname_and_other_data: false,
        };
        let (result, warnings) =
            apply_workarounds("example.com", records.clone(), disabled, &[]).unwrap();

        assert_eq!(result, records);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_apply_workarounds_collects_all_warnings() {
        let records = vec![cname("www", "example.com"), a("www", "192.0.2.1")];
        let (result, warnings) =
            apply_workarounds("example.com", records, Workarounds::default(), &default_ns())
                .unwrap();

        assert_eq!(result.len(), 3);
        assert!(matches!(warnings[0], ZoneWarning::SynthesizedApexNs { .. }));
        assert!(matches!(
            warnings[1],
            ZoneWarning::DroppedConflictingRecord { .. }
        ));
    }

    #[test]
    fn test_apply_workarounds_propagates_missing_default_ns() {
        let result = apply_workarounds(
            "example.com",
            vec![a("", "192.0.2.1")],
            Workarounds::default(),
            &[],
        );
        assert!(matches!(result, Err(ZoneGenError::MissingDefaultNs { .. })));
    }
}
