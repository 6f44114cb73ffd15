// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record source backed by an export of the PowerDNS tables.
//!
//! The export is a JSON or YAML document with two lists mirroring the
//! `domains` and `records` tables:
//!
//! ```yaml
//! domains:
//!   - { id: 1, name: example.com }
//! records:
//!   - { id: 10, domain_id: 1, name: example.com, type: SOA,
//!       content: "ns1.example.com hostmaster.example.com 1 7200 1800 1209600 300", ttl: 3600 }
//!   - { id: 11, domain_id: 1, name: www.example.com, type: A, content: 192.0.2.1 }
//! ```
//!
//! Lookups reproduce the two queries the database-backed source runs:
//! domain by name or id, then `records WHERE domain_id = ? AND NOT disabled
//! ORDER BY id`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::source::{DomainDescriptor, DomainRef, RawRecord, RecordSource};

/// One row of the `records` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub id: i64,
    pub domain_id: i64,
    #[serde(flatten)]
    pub record: RawRecord,
}

/// Both tables, as exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDump {
    #[serde(default)]
    pub domains: Vec<DomainDescriptor>,
    #[serde(default)]
    pub records: Vec<RecordRow>,
}

impl TableDump {
    /// Parse an export from text. JSON is tried when the text looks like a
    /// JSON object, YAML otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is neither valid JSON nor valid YAML for
    /// the dump layout.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim_start().starts_with('{') {
            serde_json::from_str(text).context("Failed to parse JSON table dump")
        } else {
            serde_yaml::from_str(text).context("Failed to parse YAML table dump")
        }
    }
}

/// [`RecordSource`] reading a [`TableDump`] held in memory.
#[derive(Debug, Clone)]
pub struct DumpSource {
    dump: TableDump,
}

impl DumpSource {
    pub fn new(dump: TableDump) -> Self {
        Self { dump }
    }

    /// Load an export file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read table dump: {}", path.display()))?;
        let dump = TableDump::parse(&text)
            .with_context(|| format!("Invalid table dump: {}", path.display()))?;
        debug!(
            "Loaded table dump {} ({} domains, {} records)",
            path.display(),
            dump.domains.len(),
            dump.records.len()
        );
        Ok(Self::new(dump))
    }
}

impl RecordSource for DumpSource {
    fn fetch_domain(&self, domain: &DomainRef) -> Result<Option<DomainDescriptor>> {
        let found = self.dump.domains.iter().find(|d| match domain {
            DomainRef::Name(name) => d.name == *name,
            DomainRef::Id(id) => d.id == *id,
        });
        Ok(found.cloned())
    }

    fn fetch_active_records(&self, domain_id: i64) -> Result<Vec<RawRecord>> {
        let mut rows: Vec<&RecordRow> = self
            .dump
            .records
            .iter()
            .filter(|row| row.domain_id == domain_id && !row.record.disabled)
            .collect();
        rows.sort_by_key(|row| row.id);
        Ok(rows.into_iter().map(|row| row.record.clone()).collect())
    }
}

#[cfg(test)]
#[path = "dump_tests.rs"]
mod dump_tests;
