use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::model::Record;
use crate::store::Inventory;

/// Fails with `Full` when there is no room for another record.
pub fn check(inventory: &Inventory) -> Result<()> {
    if inventory.is_full() {
        return Err(StashError::Full {
            capacity: inventory.capacity(),
        });
    }
    Ok(())
}

pub fn run(inventory: &mut Inventory, record: Record) -> Result<CmdResult> {
    inventory.add(record.clone())?;
    tracing::debug!(
        name = %record.name,
        len = inventory.len(),
        capacity = inventory.capacity(),
        "record added"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item '{}' added ({}/{})",
        record.name,
        inventory.len(),
        inventory.capacity()
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SortState;
    use crate::test_utils::{record, InventoryFixture};

    #[test]
    fn adds_record_and_reports_success() {
        let mut inv = Inventory::new();
        let result = run(&mut inv, record("Rifle", "arma", 1, 3)).unwrap();

        assert_eq!(inv.len(), 1);
        assert_eq!(result.affected_records[0].name, "Rifle");
        assert!(result.messages[0].content.contains("Rifle"));
    }

    #[test]
    fn tenth_add_succeeds_eleventh_is_full() {
        let mut inv = Inventory::new();
        for i in 0..10 {
            run(&mut inv, record(&format!("Item {}", i), "misc", 1, 1)).unwrap();
        }
        assert_eq!(inv.len(), 10);

        let err = run(&mut inv, record("Extra", "misc", 1, 1)).unwrap_err();
        assert!(matches!(err, StashError::Full { capacity: 10 }));
        assert_eq!(inv.len(), 10);
        assert!(inv.records().iter().all(|r| r.name != "Extra"));
    }

    #[test]
    fn check_reports_full_before_any_input() {
        let fixture = InventoryFixture::with_capacity(3).filled();
        assert!(matches!(
            check(&fixture.inventory),
            Err(StashError::Full { capacity: 3 })
        ));
        assert!(check(&Inventory::new()).is_ok());
    }

    #[test]
    fn add_invalidates_name_order() {
        let mut inv = InventoryFixture::new().with_scenario().inventory;
        crate::commands::sort::run(&mut inv, crate::ordering::Criterion::ByName).unwrap();
        assert_eq!(inv.sort_state(), SortState::SortedByName);

        run(&mut inv, record("Colete", "armadura", 1, 4)).unwrap();
        assert_eq!(inv.sort_state(), SortState::Unsorted);
    }
}
