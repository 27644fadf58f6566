use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let records = inventory.list()?;
    let mut result = CmdResult::default().with_listed_records(records.to_vec());
    result.add_message(CmdMessage::info(format!(
        "{} of {} slots used",
        inventory.len(),
        inventory.capacity()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::StashError;
    use crate::test_utils::InventoryFixture;

    #[test]
    fn lists_in_current_order() {
        let inv = InventoryFixture::new().with_scenario().inventory;
        let result = run(&inv).unwrap();
        let names: Vec<_> = result
            .listed_records
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rifle", "Bandagem", "Municao"]);
    }

    #[test]
    fn reports_fill_level_as_info() {
        let inv = InventoryFixture::new().with_scenario().inventory;
        let result = run(&inv).unwrap();
        assert_eq!(
            result.messages,
            vec![CmdMessage::info("3 of 10 slots used")]
        );
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn empty_inventory_has_nothing_to_show() {
        assert!(matches!(run(&Inventory::new()), Err(StashError::Empty)));
    }
}
