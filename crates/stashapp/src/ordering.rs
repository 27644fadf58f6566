//! # Ordering Engine
//!
//! Reordering uses a plain insertion sort. Backpacks are tiny, and insertion sort
//! is stable and in place, and its comparison count is easy to report.
//!
//! [`insertion_sort`] knows nothing about records. It takes a `must_shift`
//! predicate: given the element currently at `j` and the key being inserted, should
//! the element move one slot to the right? The predicate must be *strict*: it
//! answers `false` for ties, which is what keeps equal elements in their original
//! relative order.
//!
//! [`Criterion`] pairs each supported ordering with its predicate:
//!
//! | Criterion               | Shift when               | Result          |
//! |-------------------------|--------------------------|-----------------|
//! | `ByName`                | `elem.name > key.name`   | A→Z by name     |
//! | `ByType`                | `elem.kind > key.kind`   | A→Z by type     |
//! | `ByPriorityDescending`  | `elem.priority < key.priority` | 5→1       |
//!
//! Text comparison is byte-lexicographic (`str` ordering), so uppercase sorts
//! before lowercase.

use crate::error::{Result, StashError};
use crate::model::Record;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    ByName,
    ByType,
    ByPriorityDescending,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [
        Criterion::ByName,
        Criterion::ByType,
        Criterion::ByPriorityDescending,
    ];

    /// Menu selector for this criterion (1, 2 or 3).
    pub fn selector(self) -> u8 {
        match self {
            Criterion::ByName => 1,
            Criterion::ByType => 2,
            Criterion::ByPriorityDescending => 3,
        }
    }

    pub fn from_selector(selector: i64) -> Result<Self> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.selector() as i64 == selector)
            .ok_or_else(|| StashError::InvalidCriterion(selector.to_string()))
    }

    /// True when `existing` has to move right of `key`.
    pub fn must_shift(self, existing: &Record, key: &Record) -> bool {
        match self {
            Criterion::ByName => existing.name > key.name,
            Criterion::ByType => existing.kind > key.kind,
            Criterion::ByPriorityDescending => existing.priority < key.priority,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::ByName => "name (A-Z)",
            Criterion::ByType => "type (A-Z)",
            Criterion::ByPriorityDescending => "priority (high-low)",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Criterion {
    type Err = StashError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map_err(|_| StashError::InvalidCriterion(trimmed.to_string()))
            .and_then(Criterion::from_selector)
    }
}

/// Stable in-place insertion sort. Returns the number of `must_shift` calls.
pub fn insertion_sort<T, F>(items: &mut [T], mut must_shift: F) -> u64
where
    F: FnMut(&T, &T) -> bool,
{
    let mut comparisons = 0;
    for i in 1..items.len() {
        // `hole` is where the key currently sits; it walks left as elements shift.
        let mut hole = i;
        while hole > 0 {
            comparisons += 1;
            if !must_shift(&items[hole - 1], &items[hole]) {
                break;
            }
            items.swap(hole - 1, hole);
            hole -= 1;
        }
    }
    comparisons
}

/// Sorts records by `criterion`, returning the comparison count.
pub fn sort_records(records: &mut [Record], criterion: Criterion) -> u64 {
    insertion_sort(records, |existing, key| criterion.must_shift(existing, key))
}
