//! # Name Search Engine
//!
//! Classic binary search over records already ordered by name. The caller is
//! responsible for the ordering precondition (see `commands::find`); this module
//! only walks the slice and counts probes.

use crate::model::Record;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Index of the matching record, if any.
    pub index: Option<usize>,
    pub comparisons: u64,
}

/// Binary search for `name` in `records`, which must be sorted by name.
///
/// Probes `mid = (lo + hi) / 2` over the inclusive window `[lo, hi]`. The window
/// is tracked as the half-open `[lo, end)` so the upper bound never underflows.
pub fn binary_search_by_name(records: &[Record], name: &str) -> SearchOutcome {
    let mut lo = 0usize;
    let mut end = records.len();
    let mut comparisons = 0;

    while lo < end {
        let mid = (lo + end - 1) / 2;
        comparisons += 1;
        match records[mid].name.as_str().cmp(name) {
            Ordering::Equal => {
                return SearchOutcome {
                    index: Some(mid),
                    comparisons,
                }
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => end = mid,
        }
    }

    SearchOutcome {
        index: None,
        comparisons,
    }
}
