// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record source abstraction.
//!
//! A record source is whatever holds the PowerDNS `domains` and `records`
//! tables. Zone generation only needs two reads from it: resolve the domain,
//! then list its enabled rows in row id order. The connection lifecycle stays
//! with the source; the generator only borrows it.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a caller identifies the domain to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainRef {
    /// Look the domain up by name (e.g. `example.com`)
    Name(String),
    /// Look the domain up by its numeric id in the `domains` table
    Id(i64),
}

impl fmt::Display for DomainRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

/// A row of the `domains` table, reduced to what zone generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDescriptor {
    pub id: i64,
    pub name: String,
}

/// A row of the `records` table as yielded by a record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Fully-qualified owner name, without trailing dot
    pub name: String,
    /// Record type as stored (e.g. `"A"`, `"MX"`)
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Only meaningful for MX and SRV rows
    #[serde(default, alias = "prio", skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default)]
    pub disabled: bool,
}

impl RawRecord {
    /// Build an enabled row with no TTL or priority.
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: None,
            priority: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Read access to the PowerDNS tables.
///
/// Implementations:
/// - [`InMemorySource`]: rows held in memory (tests, embedding)
/// - [`crate::dump::DumpSource`]: rows loaded from a JSON/YAML table export
pub trait RecordSource {
    /// Resolve a domain by name or id.
    ///
    /// Returns `Ok(None)` when no such domain exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn fetch_domain(&self, domain: &DomainRef) -> Result<Option<DomainDescriptor>>;

    /// List the enabled rows of a domain, in row id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn fetch_active_records(&self, domain_id: i64) -> Result<Vec<RawRecord>>;
}

/// Record source backed by in-memory tables.
///
/// Rows are kept in insertion order, which stands in for row id order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    domains: Vec<DomainDescriptor>,
    records: Vec<(i64, RawRecord)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a domain and return its descriptor.
    pub fn add_domain(&mut self, id: i64, name: impl Into<String>) -> DomainDescriptor {
        let domain = DomainDescriptor {
            id,
            name: name.into(),
        };
        self.domains.push(domain.clone());
        domain
    }

    /// Append a row to the `records` table for `domain_id`.
    pub fn add_record(&mut self, domain_id: i64, record: RawRecord) {
        self.records.push((domain_id, record));
    }

    /// Builder form of [`Self::add_record`] for a batch of rows.
    #[must_use]
    pub fn with_records(
        mut self,
        domain_id: i64,
        records: impl IntoIterator<Item = RawRecord>,
    ) -> Self {
        for record in records {
            self.add_record(domain_id, record);
        }
        self
    }
}

impl RecordSource for InMemorySource {
    fn fetch_domain(&self, domain: &DomainRef) -> Result<Option<DomainDescriptor>> {
        let found = self.domains.iter().find(|d| match domain {
            DomainRef::Name(name) => d.name == *name,
            DomainRef::Id(id) => d.id == *id,
        });
        Ok(found.cloned())
    }

    fn fetch_active_records(&self, domain_id: i64) -> Result<Vec<RawRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|(id, record)| *id == domain_id && !record.disabled)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
