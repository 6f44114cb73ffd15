// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Corrective passes for record sets BIND would refuse to load.
//!
//! Two authoring mistakes are common in PowerDNS data and fatal for BIND:
//!
//! - **No NS at the apex.** PowerDNS serves the zone fine, BIND rejects it.
//!   The configured `default_ns` hosts are added at the apex.
//! - **CNAME and other data.** A non-wildcard owner with a CNAME must not own
//!   anything else. The other records at that name are dropped.
//!
//! Each pass takes the whole (normalized) record set and returns the
//! replacement plus the warnings it raised. Warnings are also logged.

use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

use super::record::{RecordData, RecordType, ResourceRecord};
use crate::config::Workarounds;
use crate::errors::ZoneGenError;

/// A non-fatal correction applied to the record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneWarning {
    /// No apex NS existed; these nameservers were added
    SynthesizedApexNs { nameservers: Vec<String> },

    /// Record dropped because its owner name also has a CNAME
    DroppedConflictingRecord {
        /// Type mnemonic, unsupported types included
        record_type: String,
        name: String,
        content: String,
    },
}

impl fmt::Display for ZoneWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SynthesizedApexNs { nameservers } => write!(
                f,
                "zone has no NS record at the apex, added default NS records: {}",
                nameservers.join(", ")
            ),
            Self::DroppedConflictingRecord {
                record_type,
                name,
                content,
            } => write!(
                f,
                "dropped {record_type} record '{name}' ({content}): name also has a CNAME record"
            ),
        }
    }
}

/// Add an NS record at the apex for each `default_ns` host when the zone has
/// none.
///
/// # Errors
///
/// Returns [`ZoneGenError::MissingDefaultNs`] when the apex has no NS record
/// and `default_ns` is empty.
pub fn ensure_apex_ns(
    domain: &str,
    mut records: Vec<ResourceRecord>,
    default_ns: &[String],
) -> Result<(Vec<ResourceRecord>, Option<ZoneWarning>), ZoneGenError> {
    let has_apex_ns = records
        .iter()
        .any(|r| r.is_type(RecordType::Ns) && r.name.is_empty());
    if has_apex_ns {
        return Ok((records, None));
    }

    if default_ns.is_empty() {
        return Err(ZoneGenError::MissingDefaultNs {
            domain: domain.to_string(),
        });
    }

    records.extend(
        default_ns
            .iter()
            .map(|host| ResourceRecord::new("", RecordData::Ns(host.clone()))),
    );

    let warning = ZoneWarning::SynthesizedApexNs {
        nameservers: default_ns.to_vec(),
    };
    warn!("{}: {}", domain, warning);
    Ok((records, Some(warning)))
}

/// Drop every non-CNAME record whose non-wildcard owner name also has a
/// CNAME, whatever its type. Wildcard records and CNAME records are always
/// kept; relative order is preserved.
pub fn drop_cname_conflicts(
    domain: &str,
    records: Vec<ResourceRecord>,
) -> (Vec<ResourceRecord>, Vec<ZoneWarning>) {
    let cname_owners: HashSet<String> = records
        .iter()
        .filter(|r| r.is_type(RecordType::Cname) && !r.is_wildcard())
        .map(|r| r.name.clone())
        .collect();

    if cname_owners.is_empty() {
        return (records, Vec::new());
    }
    debug!("{}: {} name(s) own a CNAME record", domain, cname_owners.len());

    let mut warnings = Vec::new();
    let kept = records
        .into_iter()
        .filter(|r| {
            if r.is_wildcard()
                || r.is_type(RecordType::Cname)
                || !cname_owners.contains(&r.name)
            {
                return true;
            }
            let warning = ZoneWarning::DroppedConflictingRecord {
                record_type: r.data.type_name().to_string(),
                name: r.name.clone(),
                content: r.data.content().to_string(),
            };
            warn!("{}: {}", domain, warning);
            warnings.push(warning);
            false
        })
        .collect();

    (kept, warnings)
}

/// Run the enabled passes, missing apex NS first.
///
/// # Errors
///
/// Propagates [`ensure_apex_ns`] failures.
pub fn apply_workarounds(
    domain: &str,
    records: Vec<ResourceRecord>,
    workarounds: Workarounds,
    default_ns: &[String],
) -> Result<(Vec<ResourceRecord>, Vec<ZoneWarning>), ZoneGenError> {
    let mut warnings = Vec::new();
    let mut records = records;

    if workarounds.no_ns {
        let (patched, warning) = ensure_apex_ns(domain, records, default_ns)?;
        records = patched;
        warnings.extend(warning);
    }

    if workarounds.cname_and_other_data {
        let (filtered, dropped) = drop_cname_conflicts(domain, records);
        records = filtered;
        warnings.extend(dropped);
    }

    Ok((records, warnings))
}

#[cfg(test)]
#[path = "workarounds_tests.rs"]
mod workarounds_tests;
