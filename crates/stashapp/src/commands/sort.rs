use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::ordering::{sort_records, Criterion};
use crate::store::{Inventory, SortState};

/// Sorting needs at least two records.
pub fn check(inventory: &Inventory) -> Result<()> {
    if inventory.len() < 2 {
        return Err(StashError::InsufficientItems {
            len: inventory.len(),
        });
    }
    Ok(())
}

/// Reorders the inventory by `criterion` and updates its sort-state.
///
/// Only a name sort leaves the inventory searchable; type and priority sorts mark
/// it `Unsorted`.
pub fn run(inventory: &mut Inventory, criterion: Criterion) -> Result<CmdResult> {
    check(inventory)?;

    let state = match criterion {
        Criterion::ByName => SortState::SortedByName,
        Criterion::ByType | Criterion::ByPriorityDescending => SortState::Unsorted,
    };
    let comparisons = inventory.reorder(|records| sort_records(records, criterion), state);
    tracing::debug!(%criterion, comparisons, len = inventory.len(), "inventory sorted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Backpack sorted by {}", criterion)));
    Ok(result
        .with_listed_records(inventory.records().to_vec())
        .with_comparisons(comparisons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::test_utils::{record, InventoryFixture};

    fn names(inv: &Inventory) -> Vec<&str> {
        inv.records().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn priority_sort_orders_and_leaves_unsorted() {
        let mut inv = InventoryFixture::new().with_scenario().inventory;
        let result = run(&mut inv, Criterion::ByPriorityDescending).unwrap();

        assert_eq!(names(&inv), vec!["Bandagem", "Rifle", "Municao"]);
        assert_eq!(inv.sort_state(), SortState::Unsorted);
        assert_eq!(result.listed_records.len(), 3);
        assert!(result.comparisons.is_some());
    }

    #[test]
    fn name_sort_marks_sorted_by_name() {
        let mut inv = InventoryFixture::new().with_scenario().inventory;
        let result = run(&mut inv, Criterion::ByName).unwrap();

        assert_eq!(names(&inv), vec!["Bandagem", "Municao", "Rifle"]);
        assert_eq!(inv.sort_state(), SortState::SortedByName);
        // Rifle,Bandagem,Municao: key Bandagem 1 probe, key Municao 2 probes.
        assert_eq!(result.comparisons, Some(3));
    }

    #[test]
    fn type_sort_after_name_sort_clears_state() {
        let mut inv = InventoryFixture::new().with_scenario().inventory;
        run(&mut inv, Criterion::ByName).unwrap();
        run(&mut inv, Criterion::ByType).unwrap();
        assert_eq!(inv.sort_state(), SortState::Unsorted);
        assert_eq!(names(&inv), vec!["Rifle", "Bandagem", "Municao"]);
    }

    #[test]
    fn fewer_than_two_is_insufficient_and_untouched() {
        let mut inv = Inventory::new();
        assert!(matches!(
            run(&mut inv, Criterion::ByName),
            Err(StashError::InsufficientItems { len: 0 })
        ));

        add::run(&mut inv, record("Solo", "x", 1, 1)).unwrap();
        assert!(matches!(
            run(&mut inv, Criterion::ByName),
            Err(StashError::InsufficientItems { len: 1 })
        ));
        assert_eq!(inv.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn comparison_count_resets_each_call() {
        let mut inv = InventoryFixture::new().with_scenario().inventory;
        run(&mut inv, Criterion::ByName).unwrap();
        // Already in name order: one probe per key.
        let again = run(&mut inv, Criterion::ByName).unwrap();
        assert_eq!(again.comparisons, Some(2));
    }
}
