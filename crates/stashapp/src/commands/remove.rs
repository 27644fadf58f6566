use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::store::Inventory;

/// Fails with `Empty` when there is nothing to remove.
pub fn check(inventory: &Inventory) -> Result<()> {
    if inventory.is_empty() {
        return Err(StashError::Empty);
    }
    Ok(())
}

/// Removes the first record named exactly `name`.
pub fn run(inventory: &mut Inventory, name: &str) -> Result<CmdResult> {
    let removed = inventory.remove(name)?;
    tracing::debug!(name = %removed.name, len = inventory.len(), "record removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item '{}' removed",
        removed.name
    )));
    Ok(result.with_affected_records(vec![removed]))
}
