//! # Stash Architecture
//!
//! Stash is a **UI-agnostic inventory library** for a small survival backpack. The
//! interactive menu in `crates/stash` is one client of it; nothing in here knows
//! about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (crates/stash)                                       │
//! │  - Prompts, menu, rendering, exit codes                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Inventory context object                        │
//! │  - Normalizes raw names before they reach commands          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Preconditions, sort-state transitions, CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engines + Storage                                          │
//! │  - store.rs: bounded Inventory + SortState                  │
//! │  - ordering.rs: stable insertion sort, Criterion            │
//! │  - search.rs: binary search by name                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sort-State
//!
//! The backpack remembers whether its current order came from the most recent name
//! sort ([`store::SortState::SortedByName`]). Adding or removing a record, or
//! sorting by any other criterion, drops it back to
//! [`store::SortState::Unsorted`]. Binary search refuses to run from `Unsorted`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The bounded inventory and its sort-state
//! - [`ordering`]: Sort criteria and the stable insertion sort
//! - [`search`]: Binary search over name-ordered records
//! - [`model`]: `Record`, `Priority`, field normalization
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod ordering;
pub mod search;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
