//! # API Facade
//!
//! [`StashApi`] is the single entry point for UI clients. It owns the
//! [`Inventory`] context object, so there is exactly one backpack per API value and
//! no ambient global state.
//!
//! The facade:
//! - **Dispatches** to the matching command in [`crate::commands`]
//! - **Normalizes inputs**: raw names and types are trimmed and truncated to the
//!   configured bounds before they reach the commands
//! - **Exposes pre-checks** (`check_*`) so a UI can avoid prompting for input an
//!   operation would reject anyway
//!
//! Business logic stays in the command modules; presentation stays in the UI.

use crate::commands::{self, CmdResult};
use crate::config::StashConfig;
use crate::error::{Result, StashError};
use crate::model::{normalize_field, Priority, Record};
use crate::ordering::Criterion;
use crate::store::{Inventory, SortState};

pub struct StashApi {
    inventory: Inventory,
    name_max_len: usize,
    kind_max_len: usize,
}

impl Default for StashApi {
    fn default() -> Self {
        Self::new(&StashConfig::default())
    }
}

impl StashApi {
    pub fn new(config: &StashConfig) -> Self {
        Self {
            inventory: Inventory::with_capacity(config.capacity),
            name_max_len: config.name_max_len,
            kind_max_len: config.kind_max_len,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn sort_state(&self) -> SortState {
        self.inventory.sort_state()
    }

    pub fn normalize_name(&self, raw: &str) -> String {
        normalize_field(raw, self.name_max_len)
    }

    pub fn normalize_kind(&self, raw: &str) -> String {
        normalize_field(raw, self.kind_max_len)
    }

    pub fn add_record(
        &mut self,
        name: &str,
        kind: &str,
        quantity: i64,
        priority: Priority,
    ) -> Result<CmdResult> {
        let name = self.normalize_name(name);
        if name.is_empty() {
            return Err(StashError::EmptyName);
        }
        let record = Record::new(name, self.normalize_kind(kind), quantity, priority);
        commands::add::run(&mut self.inventory, record)
    }

    pub fn remove_record(&mut self, name: &str) -> Result<CmdResult> {
        let name = self.normalize_name(name);
        commands::remove::run(&mut self.inventory, &name)
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn sort_records(&mut self, criterion: Criterion) -> Result<CmdResult> {
        commands::sort::run(&mut self.inventory, criterion)
    }

    pub fn find_record(&self, name: &str) -> Result<CmdResult> {
        let name = self.normalize_name(name);
        commands::find::run(&self.inventory, &name)
    }

    pub fn check_add(&self) -> Result<()> {
        commands::add::check(&self.inventory)
    }

    pub fn check_remove(&self) -> Result<()> {
        commands::remove::check(&self.inventory)
    }

    pub fn check_sort(&self) -> Result<()> {
        commands::sort::check(&self.inventory)
    }

    pub fn check_find(&self) -> Result<()> {
        commands::find::check(&self.inventory)
    }
}
