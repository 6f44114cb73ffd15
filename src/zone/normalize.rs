// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Owner name normalization.
//!
//! PowerDNS stores absolute owner names (`www.example.com`); the zone file
//! wants them relative to the origin (`www`, or empty for the apex). Only
//! owner names are rewritten, never record content.

use super::record::ResourceRecord;

/// Strip `domain` from the end of `name`.
///
/// Returns `""` when `name` is the apex, the leading labels when `name` is
/// inside the zone, and `name` unchanged otherwise.
#[must_use]
pub fn normalize_name(domain: &str, name: &str) -> String {
    if name == domain {
        return String::new();
    }

    match name
        .strip_suffix(domain)
        .and_then(|prefix| prefix.strip_suffix('.'))
    {
        Some(labels) => labels.to_string(),
        None => name.to_string(),
    }
}

/// Apply [`normalize_name`] to every record of the set.
pub fn normalize_records(domain: &str, records: Vec<ResourceRecord>) -> Vec<ResourceRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.name = normalize_name(domain, &record.name);
            record
        })
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
