// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `named.conf` stanza for serving a generated zone as a secondary.

/// Render a secondary zone declaration pulling `domain` from `master_host`.
///
/// ```
/// use pdns2bind::zone::named_conf::secondary_zone_stanza;
///
/// let stanza = secondary_zone_stanza("example.com", "192.0.2.53", "db.example.com");
/// assert!(stanza.contains("masters { 192.0.2.53; };"));
/// ```
#[must_use]
pub fn secondary_zone_stanza(domain: &str, master_host: &str, zone_file: &str) -> String {
    format!(
        r#"zone "{domain}" {{
    type slave;
    masters {{ {master_host}; }};
    file "{zone_file}";
}};
"#
    )
}
