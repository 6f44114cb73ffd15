// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! BIND zone file generation from PowerDNS rows.
//!
//! The pipeline, in order:
//!
//! 1. [`soa::extract_soa`] pulls the SOA row out for the header
//! 2. [`record::ResourceRecord::from_raw`] classifies the remaining rows
//! 3. [`normalize::normalize_records`] makes owner names zone-relative
//! 4. [`workarounds::apply_workarounds`] fixes what BIND would reject
//! 5. [`ordering::sort_records`] puts the body in loadable order
//! 6. [`render::render_record`] turns each record into a line, failing on
//!    any record of an unsupported type still present
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use pdns2bind::source::{DomainRef, InMemorySource, RawRecord};
//! use pdns2bind::zone::{ZoneGenerator, ZoneOptions};
//!
//! let mut source = InMemorySource::new();
//! source.add_domain(1, "example.com");
//! source.add_record(
//!     1,
//!     RawRecord::new(
//!         "example.com",
//!         "SOA",
//!         "ns1.example.com hostmaster.example.com 1 7200 1800 1209600 300",
//!     )
//!     .with_ttl(3600),
//! );
//! source.add_record(1, RawRecord::new("example.com", "NS", "ns1.example.com"));
//! source.add_record(1, RawRecord::new("www.example.com", "A", "192.0.2.1"));
//!
//! let generator = ZoneGenerator::new(&source, ZoneOptions::default());
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let zone = generator
//!     .generate_at(&DomainRef::Name("example.com".to_string()), now)
//!     .unwrap();
//!
//! assert!(zone.text().contains("www IN A 192.0.2.1\n"));
//! ```

pub mod named_conf;
pub mod normalize;
pub mod ordering;
pub mod record;
pub mod render;
pub mod soa;
pub mod workarounds;

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use tracing::{debug, info};

use crate::config::{Settings, Workarounds};
use crate::constants::ZONE_HEADER_COMMENT;
use crate::errors::ZoneGenError;
use crate::source::{DomainDescriptor, DomainRef, RawRecord, RecordSource};

pub use record::{RecordData, RecordType, ResourceRecord};
pub use soa::SoaRecord;
pub use workarounds::ZoneWarning;

/// Knobs for one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneOptions {
    pub workarounds: Workarounds,
    /// Nameservers added at the apex by the missing-NS workaround
    pub default_ns: Vec<String>,
}

impl From<&Settings> for ZoneOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            workarounds: settings.workarounds(),
            default_ns: settings.default_ns.clone(),
        }
    }
}

/// A generated zone: its lines plus the corrections made on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFile {
    domain: String,
    generated_at: DateTime<Utc>,
    lines: Vec<String>,
    warnings: Vec<ZoneWarning>,
}

impl ZoneFile {
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// All lines, header comment first, without line terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Everything after the header comment.
    #[must_use]
    pub fn body(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// Warnings raised by the workarounds.
    #[must_use]
    pub fn warnings(&self) -> &[ZoneWarning] {
        &self.warnings
    }

    /// The zone file text, every line newline-terminated.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ZoneFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// The leading comment line of a zone file.
#[must_use]
pub fn header_line(domain: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "; {ZONE_HEADER_COMMENT} for {domain} at {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Turn a domain's rows into a zone file.
///
/// Pure apart from logging: the same rows, options and timestamp always give
/// the same zone.
///
/// # Errors
///
/// Returns a [`ZoneGenError`] for a missing or malformed SOA, a missing-NS
/// zone without `default_ns`, or a record of an unsupported type that the
/// workarounds did not drop.
pub fn build_zone(
    domain: &DomainDescriptor,
    rows: Vec<RawRecord>,
    options: &ZoneOptions,
    generated_at: DateTime<Utc>,
) -> Result<ZoneFile, ZoneGenError> {
    let zone = domain.name.as_str();

    let rows: Vec<RawRecord> = rows
        .into_iter()
        .filter(|row| {
            if row.disabled {
                debug!("Skipping disabled {} record {}", row.record_type, row.name);
            }
            !row.disabled
        })
        .collect();

    let (soa, rows) = soa::extract_soa(zone, rows)?;
    let soa_line = soa.render(zone)?;

    let records: Vec<ResourceRecord> = rows.iter().map(ResourceRecord::from_raw).collect();
    let records = normalize::normalize_records(zone, records);
    let (records, warnings) =
        workarounds::apply_workarounds(zone, records, options.workarounds, &options.default_ns)?;
    let records = ordering::sort_records(records);
    let rendered = records
        .iter()
        .map(render::render_record)
        .collect::<Result<Vec<_>, _>>()?;

    let lines: Vec<String> = [
        header_line(zone, generated_at),
        format!("$TTL {}", soa.zone_ttl()),
        soa_line,
    ]
    .into_iter()
    .chain(rendered)
    .collect();

    debug!("Zone {} rendered with {} record(s)", zone, records.len());

    Ok(ZoneFile {
        domain: domain.name.clone(),
        generated_at,
        lines,
        warnings,
    })
}

/// Generates zone files from a [`RecordSource`].
pub struct ZoneGenerator<'a> {
    source: &'a dyn RecordSource,
    options: ZoneOptions,
}

impl<'a> ZoneGenerator<'a> {
    pub fn new(source: &'a dyn RecordSource, options: ZoneOptions) -> Self {
        Self { source, options }
    }

    /// Generate the zone for `domain`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_at`].
    pub fn generate(&self, domain: &DomainRef) -> Result<ZoneFile, ZoneGenError> {
        self.generate_at(domain, Utc::now())
    }

    /// Generate the zone for `domain`, stamped with `generated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneGenError::DomainNotFound`] if the source has no such
    /// domain, [`ZoneGenError::Source`] if the source fails, and any
    /// [`build_zone`] error.
    pub fn generate_at(
        &self,
        domain: &DomainRef,
        generated_at: DateTime<Utc>,
    ) -> Result<ZoneFile, ZoneGenError> {
        let descriptor =
            self.source
                .fetch_domain(domain)?
                .ok_or_else(|| ZoneGenError::DomainNotFound {
                    domain: domain.to_string(),
                })?;
        debug!("Resolved domain {} to id {}", descriptor.name, descriptor.id);

        let rows = self.source.fetch_active_records(descriptor.id)?;
        info!(
            "Generating zone {} from {} record(s)",
            descriptor.name,
            rows.len()
        );

        let zone = build_zone(&descriptor, rows, &self.options, generated_at)?;
        info!(
            "Generated zone {} ({} lines, {} warning(s))",
            zone.domain(),
            zone.lines().len(),
            zone.warnings().len()
        );
        Ok(zone)
    }
}
