// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! SOA extraction and rewriting.
//!
//! PowerDNS keeps the SOA as one space-separated string:
//!
//! ```text
//! ns1.example.com hostmaster.example.com 2019072401 7200 1800 1209600 300
//! ```
//!
//! BIND wants the two names absolute and the five timers parenthesized:
//!
//! ```text
//! ns1.example.com. hostmaster.example.com. (2019072401 7200 1800 1209600 300)
//! ```

use crate::constants::{APEX_OWNER, DEFAULT_ZONE_TTL_SECS};
use crate::errors::ZoneGenError;
use crate::source::RawRecord;

use super::record::RecordType;

/// The zone's start of authority, as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaRecord {
    pub ttl: Option<u32>,
    pub content: String,
}

impl SoaRecord {
    /// TTL used for both `$TTL` and the SOA line.
    #[must_use]
    pub fn zone_ttl(&self) -> u32 {
        self.ttl.unwrap_or(DEFAULT_ZONE_TTL_SECS)
    }

    /// Rewrite the content into BIND's parenthesized form.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneGenError::InvalidSoaContent`] unless the content has
    /// exactly seven whitespace-separated fields.
    pub fn rewrite_content(&self, domain: &str) -> Result<String, ZoneGenError> {
        let fields: Vec<&str> = self.content.split_whitespace().collect();
        let [primary, hostmaster, serial, refresh, retry, expire, minimum] = fields[..] else {
            return Err(ZoneGenError::InvalidSoaContent {
                domain: domain.to_string(),
                content: self.content.clone(),
            });
        };

        Ok(format!(
            "{primary}. {hostmaster}. ({serial} {refresh} {retry} {expire} {minimum})"
        ))
    }

    /// The apex SOA line, `@ IN <ttl> SOA <content>;`.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::rewrite_content`] failures.
    pub fn render(&self, domain: &str) -> Result<String, ZoneGenError> {
        Ok(format!(
            "{APEX_OWNER} IN {} SOA {};",
            self.zone_ttl(),
            self.rewrite_content(domain)?
        ))
    }
}

fn is_soa(record: &RawRecord) -> bool {
    record
        .record_type
        .parse::<RecordType>()
        .is_ok_and(|t| t == RecordType::Soa)
}

/// Split the SOA row out of the domain's rows.
///
/// # Errors
///
/// Returns [`ZoneGenError::MissingSoa`] when there is no SOA row and
/// [`ZoneGenError::DuplicateSoa`] when there is more than one.
pub fn extract_soa(
    domain: &str,
    rows: Vec<RawRecord>,
) -> Result<(SoaRecord, Vec<RawRecord>), ZoneGenError> {
    let (mut soa_rows, others): (Vec<RawRecord>, Vec<RawRecord>) =
        rows.into_iter().partition(is_soa);

    let soa = match soa_rows.len() {
        0 => {
            return Err(ZoneGenError::MissingSoa {
                domain: domain.to_string(),
            })
        }
        1 => soa_rows.swap_remove(0),
        count => {
            return Err(ZoneGenError::DuplicateSoa {
                domain: domain.to_string(),
                count,
            })
        }
    };

    Ok((
        SoaRecord {
            ttl: soa.ttl,
            content: soa.content,
        },
        others,
    ))
}

#[cfg(test)]
#[path = "soa_tests.rs"]
mod soa_tests;
