//! # Command Layer
//!
//! Each operation on the backpack lives in its own submodule as plain functions over
//! an [`Inventory`](crate::store::Inventory). Commands:
//! - check preconditions and return the matching [`StashError`](crate::error::StashError)
//! - apply sort-state transitions through the store
//! - return a structured [`CmdResult`], never strings printed to a terminal
//!
//! Commands do no I/O and never prompt. Modules whose preconditions do not depend
//! on user input also expose a `check` function, so a UI can skip prompting for an
//! operation that would fail anyway.
//!
//! ## Command Modules
//!
//! - [`add`]: Append a record
//! - [`remove`]: Remove the first record with a given name
//! - [`list`]: Current records in current order
//! - [`sort`]: Reorder by a [`Criterion`](crate::ordering::Criterion)
//! - [`find`]: Binary search by name

use crate::model::Record;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;
pub mod sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records added or removed by the operation.
    pub affected_records: Vec<Record>,
    /// Records to display, in display order.
    pub listed_records: Vec<Record>,
    /// Comparison count for sort and search operations.
    pub comparisons: Option<u64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_comparisons(mut self, comparisons: u64) -> Self {
        self.comparisons = Some(comparisons);
        self
    }
}
