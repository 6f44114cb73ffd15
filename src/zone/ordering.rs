// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record ordering for the zone body.
//!
//! BIND's loader is sensitive to sequencing where CNAME and wildcard records
//! interact. Records are sorted by:
//!
//! 1. NS before everything else
//! 2. CNAME, then wildcard owners, then the rest
//! 3. owner name
//!
//! The sort is stable, so records equal on all three keys keep their source
//! order.

use std::cmp::Ordering;

use super::record::{RecordType, ResourceRecord};

fn ns_rank(record: &ResourceRecord) -> u8 {
    u8::from(!record.is_type(RecordType::Ns))
}

fn kind_rank(record: &ResourceRecord) -> u8 {
    if record.is_type(RecordType::Cname) {
        1
    } else if record.is_wildcard() {
        2
    } else {
        3
    }
}

/// Total order used for the zone body.
#[must_use]
pub fn compare_records(a: &ResourceRecord, b: &ResourceRecord) -> Ordering {
    ns_rank(a)
        .cmp(&ns_rank(b))
        .then_with(|| kind_rank(a).cmp(&kind_rank(b)))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort records into zone body order.
pub fn sort_records(mut records: Vec<ResourceRecord>) -> Vec<ResourceRecord> {
    records.sort_by(compare_records);
    records
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
