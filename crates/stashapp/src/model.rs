//! # Domain Model
//!
//! A [`Record`] is one thing in the backpack: a name, a type (stored as `kind`), a
//! quantity and a [`Priority`].
//!
//! ## Field Normalization
//!
//! Names and types come from free-form user input. Before they reach the store they
//! go through [`normalize_field`]:
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. The result is cut to the configured maximum number of characters, always on a
//!    character boundary.
//!
//! Lookups (`remove`, `find`) normalize their target the same way, so a name typed
//! with trailing spaces still matches the stored one. Matching itself is exact and
//! case-sensitive.
//!
//! ## Priority
//!
//! Priorities range from 1 (low) to 5 (high). [`Priority::new`] is the only way to
//! build one, so a `Record` can never carry an out-of-range value. The store does
//! not re-check it.

use crate::error::{Result, StashError};
use std::fmt;

/// Default maximum length of a record name, in characters.
pub const NAME_MAX_LEN: usize = 29;

/// Default maximum length of a record type, in characters.
pub const KIND_MAX_LEN: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Priority(value as u8))
        } else {
            Err(StashError::InvalidPriority(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub kind: String,
    pub quantity: i64,
    pub priority: Priority,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        quantity: i64,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            quantity,
            priority,
        }
    }
}

/// Trims `raw` and keeps at most `max_chars` characters.
pub fn normalize_field(raw: &str, max_chars: usize) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
