// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed DNS records.
//!
//! PowerDNS stores the record type as a free-form string. Rows are classified
//! into [`RecordData`] once, up front, so the rest of the pipeline works on a
//! closed set of variants. Rows of any other type are carried along as
//! [`RecordData::Unsupported`]: the workarounds may still drop them, and only
//! the ones that survive to rendering are an error.

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::constants::WILDCARD_LABEL;
use crate::source::RawRecord;

/// Record types understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Cname,
    Mx,
    Ns,
    Sshfp,
    Srv,
    Txt,
    Soa,
}

impl RecordType {
    /// Mnemonic as written in a zone file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Sshfp => "SSHFP",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Soa => "SOA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "NS" => Ok(Self::Ns),
            "SSHFP" => Ok(Self::Sshfp),
            "SRV" => Ok(Self::Srv),
            "TXT" => Ok(Self::Txt),
            "SOA" => Ok(Self::Soa),
            _ => Err(s.to_string()),
        }
    }
}

/// Type-specific payload of a non-SOA record.
///
/// SOA has no variant of its own: it is pulled out of the row set before
/// classification and only ever feeds the zone header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(String),
    Cname(String),
    Mx { priority: u32, exchange: String },
    Ns(String),
    Sshfp(String),
    /// `target` holds PowerDNS' remaining SRV fields: `<weight> <port> <target>`
    Srv { priority: u32, target: String },
    Txt(String),
    /// A row whose type the renderer cannot express, kept verbatim
    Unsupported {
        record_type: String,
        content: String,
    },
}

impl RecordData {
    /// The supported type, `None` for [`RecordData::Unsupported`].
    #[must_use]
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            Self::A(_) => Some(RecordType::A),
            Self::Cname(_) => Some(RecordType::Cname),
            Self::Mx { .. } => Some(RecordType::Mx),
            Self::Ns(_) => Some(RecordType::Ns),
            Self::Sshfp(_) => Some(RecordType::Sshfp),
            Self::Srv { .. } => Some(RecordType::Srv),
            Self::Txt(_) => Some(RecordType::Txt),
            Self::Unsupported { .. } => None,
        }
    }

    /// Type mnemonic, as stored for unsupported rows.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unsupported { record_type, .. } => record_type,
            supported => supported.record_type().map_or("", RecordType::as_str),
        }
    }

    /// The stored content, without priority.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::A(content)
            | Self::Cname(content)
            | Self::Ns(content)
            | Self::Sshfp(content)
            | Self::Txt(content)
            | Self::Mx {
                exchange: content, ..
            }
            | Self::Srv {
                target: content, ..
            }
            | Self::Unsupported { content, .. } => content,
        }
    }
}

/// A non-SOA resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name; absolute until normalized, then zone-relative (`""` = apex)
    pub name: String,
    /// Per-record TTL, `None` to inherit `$TTL`
    pub ttl: Option<u32>,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl: None,
            data,
        }
    }

    /// Classify a raw row.
    ///
    /// MX and SRV rows without a priority get priority 0. Types outside the
    /// supported set, and SOA rows, become [`RecordData::Unsupported`].
    #[must_use]
    pub fn from_raw(raw: &RawRecord) -> Self {
        let content = raw.content.clone();
        let priority = || {
            raw.priority.unwrap_or_else(|| {
                debug!(
                    "{} record {} has no priority, using 0",
                    raw.record_type, raw.name
                );
                0
            })
        };

        let data = match raw.record_type.parse::<RecordType>() {
            Ok(RecordType::A) => RecordData::A(content),
            Ok(RecordType::Cname) => RecordData::Cname(content),
            Ok(RecordType::Mx) => RecordData::Mx {
                priority: priority(),
                exchange: content,
            },
            Ok(RecordType::Ns) => RecordData::Ns(content),
            Ok(RecordType::Sshfp) => RecordData::Sshfp(content),
            Ok(RecordType::Srv) => RecordData::Srv {
                priority: priority(),
                target: content,
            },
            Ok(RecordType::Txt) => RecordData::Txt(content),
            Ok(RecordType::Soa) | Err(_) => {
                debug!("Unsupported {} record {}", raw.record_type, raw.name);
                RecordData::Unsupported {
                    record_type: raw.record_type.clone(),
                    content,
                }
            }
        };

        Self {
            name: raw.name.clone(),
            ttl: raw.ttl,
            data,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn record_type(&self) -> Option<RecordType> {
        self.data.record_type()
    }

    #[must_use]
    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type() == Some(record_type)
    }

    /// True when the owner name contains a wildcard label.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.name.contains(WILDCARD_LABEL)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
