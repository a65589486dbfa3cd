//! Removal of aggregate-total rows.
//!
//! The provider ships pre-summed rows ("All ages", "All external causes")
//! alongside the detail rows. Summing them again would double-count.

use crate::loader::schema::{Record, SubsetKind};
use crate::utils::config::{ALL_AGES_SENTINEL, ALL_CAUSES_SENTINEL};
use log::debug;

/// Does this record carry an aggregate total for the given subset?
pub fn is_sentinel(kind: SubsetKind, record: &Record) -> bool {
    if record.injury_type == ALL_CAUSES_SENTINEL {
        return true;
    }

    kind == SubsetKind::AgeIndexed && record.category == ALL_AGES_SENTINEL
}

/// Keep only the detail rows
pub fn retain_observations(kind: SubsetKind, mut records: Vec<Record>) -> Vec<Record> {
    let before = records.len();
    records.retain(|record| !is_sentinel(kind, record));

    let dropped = before - records.len();
    if dropped > 0 {
        debug!("Dropped {} sentinel rows from {} subset", dropped, kind.label());
    }

    records
}
