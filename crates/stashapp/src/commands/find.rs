use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::search::binary_search_by_name;
use crate::store::Inventory;

/// Preconditions for a binary search: records exist and are ordered by name.
///
/// An empty inventory reports `Empty` ahead of `NotSorted`.
pub fn check(inventory: &Inventory) -> Result<()> {
    if inventory.is_empty() {
        return Err(StashError::Empty);
    }
    if !inventory.sort_state().is_sorted_by_name() {
        return Err(StashError::NotSorted);
    }
    Ok(())
}

/// Binary search for `name`. Misses carry the probe count in `NotFound`.
pub fn run(inventory: &Inventory, name: &str) -> Result<CmdResult> {
    check(inventory)?;

    let outcome = binary_search_by_name(inventory.records(), name);
    tracing::debug!(
        name,
        found = outcome.index.is_some(),
        comparisons = outcome.comparisons,
        "binary search"
    );

    let index = outcome.index.ok_or_else(|| StashError::NotFound {
        name: name.to_string(),
        comparisons: Some(outcome.comparisons),
    })?;
    let found = inventory.records()[index].clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item '{}' found", found.name)));
    Ok(result
        .with_listed_records(vec![found])
        .with_comparisons(outcome.comparisons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, sort};
    use crate::ordering::Criterion;
    use crate::test_utils::{record, InventoryFixture};

    fn sorted_scenario() -> Inventory {
        let mut inv = InventoryFixture::new().with_scenario().inventory;
        sort::run(&mut inv, Criterion::ByName).unwrap();
        inv
    }

    #[test]
    fn finds_after_name_sort() {
        let inv = sorted_scenario();
        let result = run(&inv, "Rifle").unwrap();
        let found = &result.listed_records[0];
        assert_eq!(found.kind, "arma");
        assert_eq!(found.quantity, 1);
        assert_eq!(found.priority.get(), 3);
        assert_eq!(result.comparisons, Some(2));
    }

    #[test]
    fn unsorted_is_rejected_for_any_name() {
        let inv = InventoryFixture::new().with_scenario().inventory;
        for name in ["Rifle", "", "nope"] {
            assert!(matches!(run(&inv, name), Err(StashError::NotSorted)));
        }
    }

    #[test]
    fn priority_sort_does_not_enable_search() {
        let mut inv = InventoryFixture::new().with_scenario().inventory;
        sort::run(&mut inv, Criterion::ByPriorityDescending).unwrap();
        assert!(matches!(run(&inv, "Rifle"), Err(StashError::NotSorted)));
    }

    #[test]
    fn empty_inventory_reports_empty() {
        assert!(matches!(run(&Inventory::new(), "x"), Err(StashError::Empty)));
    }

    #[test]
    fn miss_reports_comparisons() {
        let inv = sorted_scenario();
        match run(&inv, "Granada") {
            Err(StashError::NotFound {
                name,
                comparisons: Some(n),
            }) => {
                assert_eq!(name, "Granada");
                assert!(n >= 1 && n <= 3);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn add_after_sort_blocks_search() {
        let mut inv = sorted_scenario();
        add::run(&mut inv, record("Colete", "armadura", 1, 4)).unwrap();
        assert!(matches!(run(&inv, "Colete"), Err(StashError::NotSorted)));
    }
}
