// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # pdns2bind - BIND9 zone files from PowerDNS
//!
//! pdns2bind reads the `domains` and `records` tables of a PowerDNS
//! authoritative server and writes a BIND9 master zone file for one domain.
//!
//! ## Overview
//!
//! Rows are not copied verbatim. On the way to the zone file they are:
//!
//! - made relative to the zone origin
//! - corrected for two mistakes BIND refuses to load (no NS at the apex,
//!   CNAME sharing a name with other data)
//! - ordered so CNAME and wildcard records load cleanly
//! - rendered with per-type BIND syntax
//!
//! ## Modules
//!
//! - [`zone`] - The normalization, workaround, ordering and rendering pipeline
//! - [`source`] - Record source trait and the in-memory source
//! - [`dump`] - Record source reading a JSON/YAML export of the PowerDNS tables
//! - [`config`] - Settings file and validation
//! - [`errors`] - Error types
//! - [`constants`] - Shared constants
//!
//! ## Example
//!
//! ```rust,no_run
//! use pdns2bind::dump::DumpSource;
//! use pdns2bind::source::DomainRef;
//! use pdns2bind::zone::{ZoneGenerator, ZoneOptions};
//!
//! let source = DumpSource::from_path("pdns-tables.yaml").unwrap();
//! let generator = ZoneGenerator::new(&source, ZoneOptions::default());
//! let zone = generator
//!     .generate(&DomainRef::Name("example.com".to_string()))
//!     .unwrap();
//! print!("{zone}");
//! ```

pub mod config;
pub mod constants;
pub mod dump;
pub mod errors;
pub mod source;
pub mod zone;
