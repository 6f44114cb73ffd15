// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! BIND text for individual records.

use super::record::{RecordData, ResourceRecord};
use crate::constants::APEX_OWNER;
use crate::errors::ZoneGenError;

/// Type-specific part of a record line, `None` for an unsupported type.
///
/// Hostname targets get a trailing dot so BIND does not append the origin.
/// TXT content is quoted as-is: embedded quotes and backslashes are not
/// escaped.
#[must_use]
pub fn render_rdata(data: &RecordData) -> Option<String> {
    let rdata = match data {
        RecordData::A(addr) => addr.clone(),
        RecordData::Cname(target) => format!("{target}."),
        RecordData::Mx { priority, exchange } => format!("{priority} {exchange}."),
        RecordData::Ns(host) => format!("{host}."),
        RecordData::Sshfp(fingerprint) => fingerprint.clone(),
        RecordData::Srv { priority, target } => format!("{priority} {target}"),
        RecordData::Txt(text) => format!("\"{text}\""),
        RecordData::Unsupported { .. } => return None,
    };
    Some(rdata)
}

/// Render one record as `<name> [<ttl> ]IN <TYPE> <rdata>`.
///
/// The apex has an empty name, so its line starts with a space and BIND
/// reuses the origin. A zero or missing TTL is left out.
///
/// # Errors
///
/// Returns [`ZoneGenError::UnsupportedRecordType`] for a record of a type
/// outside the supported set. The error names the owner as it appears in the
/// zone, `@` for the apex.
pub fn render_record(record: &ResourceRecord) -> Result<String, ZoneGenError> {
    let Some(rdata) = render_rdata(&record.data) else {
        let name = if record.name.is_empty() {
            APEX_OWNER.to_string()
        } else {
            record.name.clone()
        };
        return Err(ZoneGenError::UnsupportedRecordType {
            record_type: record.data.type_name().to_string(),
            name,
        });
    };

    let ttl = match record.ttl {
        Some(ttl) if ttl > 0 => format!("{ttl} "),
        _ => String::new(),
    };

    Ok(format!(
        "{} {}IN {} {}",
        record.name,
        ttl,
        record.data.type_name(),
        rdata
    ))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
