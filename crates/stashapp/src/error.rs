use thiserror::Error;

#[derive(Error, Debug)]
pub enum StashError {
    #[error("The backpack is full (capacity {capacity}). Remove something before adding more.")]
    Full { capacity: usize },

    #[error("Item '{name}' not found")]
    NotFound {
        name: String,
        /// Set when the miss comes from a binary search.
        comparisons: Option<u64>,
    },

    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("The backpack is empty")]
    Empty,

    #[error("Not enough items to sort ({len}); at least 2 are needed")]
    InsufficientItems { len: usize },

    #[error("The backpack must be sorted by name before a binary search. Sort by name first.")]
    NotSorted,

    #[error("Invalid option: {0}")]
    InvalidChoice(String),

    #[error("Invalid sort criterion: {0}")]
    InvalidCriterion(String),

    #[error("Invalid priority {0}: enter a value between 1 and 5")]
    InvalidPriority(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl StashError {
    pub fn not_found(name: impl Into<String>) -> Self {
        StashError::NotFound {
            name: name.into(),
            comparisons: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StashError>;
