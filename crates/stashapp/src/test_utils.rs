use crate::model::{Priority, Record};
use crate::store::Inventory;

/// Builds a record, panicking on an out-of-range priority.
pub fn record(name: &str, kind: &str, quantity: i64, priority: i64) -> Record {
    let priority = Priority::new(priority).expect("fixture priority must be 1-5");
    Record::new(name, kind, quantity, priority)
}

pub struct InventoryFixture {
    pub inventory: Inventory,
}

impl Default for InventoryFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFixture {
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inventory: Inventory::with_capacity(capacity),
        }
    }

    pub fn with_record(mut self, name: &str, kind: &str, quantity: i64, priority: i64) -> Self {
        self.inventory
            .add(record(name, kind, quantity, priority))
            .expect("fixture inventory is full");
        self
    }

    /// Rifle, Bandagem, Municao in that insertion order.
    pub fn with_scenario(self) -> Self {
        self.with_record("Rifle", "arma", 1, 3)
            .with_record("Bandagem", "cura", 5, 5)
            .with_record("Municao", "municao", 30, 1)
    }

    pub fn filled(mut self) -> Self {
        let mut i = self.inventory.len();
        while !self.inventory.is_full() {
            i += 1;
            self = self.with_record(&format!("Item {}", i), "misc", 1, 1);
        }
        self
    }
}
