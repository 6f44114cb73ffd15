// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for pdns2bind.
//!
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Zone File Constants
// ============================================================================

/// `$TTL` used when the SOA row carries no TTL (1 hour)
pub const DEFAULT_ZONE_TTL_SECS: u32 = 3600;

/// Text placed in the header comment of every generated zone
pub const ZONE_HEADER_COMMENT: &str = "Zone file generated by pdns2bind from PowerDNS records";

/// Owner name written for the zone apex in the SOA line
pub const APEX_OWNER: &str = "@";

/// Character marking a wildcard owner name
pub const WILDCARD_LABEL: char = '*';

// ============================================================================
// Configuration Constants
// ============================================================================

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_PATH_ENV: &str = "PDNS2BIND_CONFIG";

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
