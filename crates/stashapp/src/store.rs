//! # Inventory Store
//!
//! [`Inventory`] is the context object that owns the backpack: a bounded, ordered
//! list of [`Record`]s plus the [`SortState`] that says whether that order is known
//! to be by name. It is the only place records are appended or removed.
//!
//! Capacity is fixed at construction. Adding to a full inventory fails with
//! [`StashError::Full`] and leaves it untouched.
//!
//! Every mutation (add, remove) resets the sort-state to [`SortState::Unsorted`].
//! Reordering goes through [`Inventory::reorder`], which hands the records to a
//! sorting closure and then records the resulting state.

use crate::error::{Result, StashError};
use crate::model::Record;

/// Default number of records a backpack can hold.
pub const DEFAULT_CAPACITY: usize = 10;

/// Whether the current order is the product of the latest name sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    SortedByName,
}

impl SortState {
    pub fn is_sorted_by_name(self) -> bool {
        matches!(self, SortState::SortedByName)
    }
}

#[derive(Debug, Clone)]
pub struct Inventory {
    records: Vec<Record>,
    capacity: usize,
    sort_state: SortState,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            sort_state: SortState::Unsorted,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    /// Records in their current order, empty or not.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            return Err(StashError::Full {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        self.sort_state = SortState::Unsorted;
        Ok(())
    }

    /// Removes the first record named exactly `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        let position = self
            .records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| StashError::not_found(name))?;
        let removed = self.records.remove(position);
        self.sort_state = SortState::Unsorted;
        Ok(removed)
    }

    /// Records in their current order; `Empty` when there is nothing to show.
    pub fn list(&self) -> Result<&[Record]> {
        if self.records.is_empty() {
            return Err(StashError::Empty);
        }
        Ok(&self.records)
    }

    /// Reorders the records in place with `sort` and sets the resulting state.
    pub(crate) fn reorder<T>(
        &mut self,
        sort: impl FnOnce(&mut [Record]) -> T,
        state: SortState,
    ) -> T {
        let out = sort(&mut self.records);
        self.sort_state = state;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    #[test]
    fn starts_empty_and_unsorted() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.capacity(), DEFAULT_CAPACITY);
        assert_eq!(inv.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut inv = Inventory::new();
        inv.add(record("Rifle", "arma", 1, 3)).unwrap();
        inv.add(record("Bandagem", "cura", 5, 5)).unwrap();
        let names: Vec<_> = inv.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Rifle", "Bandagem"]);
    }

    #[test]
    fn add_fails_closed_at_capacity() {
        let mut inv = Inventory::with_capacity(2);
        inv.add(record("A", "x", 1, 1)).unwrap();
        inv.add(record("B", "x", 1, 1)).unwrap();
        let before = inv.records().to_vec();

        let err = inv.add(record("C", "x", 1, 1)).unwrap_err();
        assert!(matches!(err, StashError::Full { capacity: 2 }));
        assert_eq!(inv.records(), before.as_slice());
    }

    #[test]
    fn add_clears_sort_state() {
        let mut inv = Inventory::new();
        inv.reorder(|_| (), SortState::SortedByName);
        inv.add(record("A", "x", 1, 1)).unwrap();
        assert_eq!(inv.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn remove_takes_first_match_and_preserves_order() {
        let mut inv = Inventory::new();
        inv.add(record("A", "x", 1, 1)).unwrap();
        inv.add(record("B", "first", 1, 1)).unwrap();
        inv.add(record("C", "x", 1, 1)).unwrap();
        inv.add(record("B", "second", 1, 1)).unwrap();

        let removed = inv.remove("B").unwrap();
        assert_eq!(removed.kind, "first");
        let left: Vec<_> = inv
            .records()
            .iter()
            .map(|r| (r.name.as_str(), r.kind.as_str()))
            .collect();
        assert_eq!(left, vec![("A", "x"), ("C", "x"), ("B", "second")]);
    }

    #[test]
    fn remove_is_case_sensitive() {
        let mut inv = Inventory::new();
        inv.add(record("Rifle", "arma", 1, 3)).unwrap();
        assert!(matches!(
            inv.remove("rifle"),
            Err(StashError::NotFound { comparisons: None, .. })
        ));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_missing_leaves_everything_unchanged() {
        let mut inv = Inventory::new();
        inv.add(record("A", "x", 1, 1)).unwrap();
        inv.add(record("B", "y", 2, 2)).unwrap();
        inv.reorder(|_| (), SortState::SortedByName);
        let before = inv.records().to_vec();

        assert!(inv.remove("Z").is_err());
        assert_eq!(inv.records(), before.as_slice());
        assert_eq!(inv.sort_state(), SortState::SortedByName);
    }

    #[test]
    fn remove_clears_sort_state() {
        let mut inv = Inventory::new();
        inv.add(record("A", "x", 1, 1)).unwrap();
        inv.reorder(|_| (), SortState::SortedByName);
        inv.remove("A").unwrap();
        assert_eq!(inv.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn list_on_empty_reports_empty() {
        let inv = Inventory::new();
        assert!(matches!(inv.list(), Err(StashError::Empty)));
    }
}
