// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for zone generation and configuration.
//!
//! This module provides specialized error types for:
//! - Looking up the domain and its records in a record source
//! - Shaping PowerDNS rows into BIND records (SOA, record types)
//! - Applying the misconfiguration workarounds
//! - Validating the tool configuration
//!
//! Every zone generation error is terminal for the conversion: no partial zone
//! is ever returned alongside one.

use thiserror::Error;

/// Errors that abort the conversion of one domain into a zone file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneGenError {
    /// Domain name or id not present in the record source
    #[error("Domain '{domain}' not found in record source")]
    DomainNotFound {
        /// The domain name or numeric id that was requested
        domain: String,
    },

    /// Domain has no SOA record
    ///
    /// BIND refuses to load a zone without a start of authority, so there is
    /// nothing sensible to emit.
    #[error("Domain '{domain}' has no SOA record")]
    MissingSoa {
        /// The domain being converted
        domain: String,
    },

    /// Domain has more than one SOA record
    #[error("Domain '{domain}' has {count} SOA records, expected exactly one")]
    DuplicateSoa {
        /// The domain being converted
        domain: String,
        /// Number of SOA rows found
        count: usize,
    },

    /// SOA content is not the seven-field PowerDNS form
    ///
    /// Expected `"<primary-ns> <hostmaster> <serial> <refresh> <retry> <expire> <minimum>"`.
    #[error("Invalid SOA content for '{domain}': '{content}'")]
    InvalidSoaContent {
        /// The domain being converted
        domain: String,
        /// The offending SOA content
        content: String,
    },

    /// The zone has no apex NS record and no `default_ns` was configured
    #[error(
        "Domain '{domain}' has no NS record at the apex and no default_ns is configured"
    )]
    MissingDefaultNs {
        /// The domain being converted
        domain: String,
    },

    /// A row carries a record type outside the supported set
    #[error("Unsupported record type '{record_type}' for '{name}'")]
    UnsupportedRecordType {
        /// The type string as stored in the record source
        record_type: String,
        /// Owner name of the offending record as written in the zone, `@` for the apex
        name: String,
    },

    /// The record source itself failed
    #[error("Record source failed: {0}")]
    Source(String),
}

impl ZoneGenError {
    /// Returns a short, stable reason code for this error.
    ///
    /// Used as a structured field when the failure is logged.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::DomainNotFound { .. } => "DomainNotFound",
            Self::MissingSoa { .. } => "MissingSOA",
            Self::DuplicateSoa { .. } => "DuplicateSOA",
            Self::InvalidSoaContent { .. } => "InvalidSOAContent",
            Self::MissingDefaultNs { .. } => "MissingDefaultNS",
            Self::UnsupportedRecordType { .. } => "UnsupportedRecordType",
            Self::Source(_) => "RecordSourceFailed",
        }
    }
}

// Record sources report through anyhow; keep the message, drop the chain.
impl From<anyhow::Error> for ZoneGenError {
    fn from(err: anyhow::Error) -> Self {
        Self::Source(format!("{err:#}"))
    }
}

/// Errors raised while validating configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither `domain` nor `domain_id` was given
    #[error("One of 'domain' or 'domain_id' is required")]
    MissingDomain,

    /// Both `domain` and `domain_id` were given
    #[error("Only one of 'domain' ({domain}) or 'domain_id' ({domain_id}) may be set")]
    ConflictingDomain {
        /// The configured domain name
        domain: String,
        /// The configured domain id
        domain_id: i64,
    },

    /// `master_host` was not given or is blank
    #[error("'master_host' is required")]
    MissingMasterHost,

    /// A `default_ns` entry is blank
    #[error("'default_ns' entry {index} is empty")]
    EmptyDefaultNs {
        /// Position of the blank entry
        index: usize,
    },

    /// The config file could not be parsed
    #[error("Failed to parse config file '{path}': {reason}")]
    Parse {
        /// Path of the config file
        path: String,
        /// Parser message
        reason: String,
    },
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
