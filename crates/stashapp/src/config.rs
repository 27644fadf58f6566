//! # Configuration
//!
//! Stash configuration is loaded with [`confique`] from layered sources.
//! Nothing is ever written back.
//!
//! ## Resolution Order
//!
//! 1. **Command line**: `--capacity` (applied by the CLI via [`StashConfig::with_capacity`]).
//! 2. **Environment variables**: `STASH_CAPACITY`, `STASH_NAME_MAX_LEN`, `STASH_KIND_MAX_LEN`.
//! 3. **Config file**: `--config <path>`, or `stash.toml` in the OS config directory
//!    (via the `directories` crate). A missing file is skipped.
//! 4. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `capacity` | `10` | Maximum number of records in the backpack |
//! | `name_max_len` | `29` | Names are truncated to this many characters |
//! | `kind_max_len` | `19` | Types are truncated to this many characters |

use crate::error::{Result, StashError};
use crate::model::{KIND_MAX_LEN, NAME_MAX_LEN};
use crate::store::DEFAULT_CAPACITY;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "stash.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct StashConfig {
    /// Maximum number of records the backpack holds.
    #[config(default = 10, env = "STASH_CAPACITY")]
    pub capacity: usize,

    /// Maximum characters kept from a record name.
    #[config(default = 29, env = "STASH_NAME_MAX_LEN")]
    pub name_max_len: usize,

    /// Maximum characters kept from a record type.
    #[config(default = 19, env = "STASH_KIND_MAX_LEN")]
    pub kind_max_len: usize,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name_max_len: NAME_MAX_LEN,
            kind_max_len: KIND_MAX_LEN,
        }
    }
}

impl StashConfig {
    /// Loads env + file + defaults. `explicit` replaces the default file location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = StashConfig::builder().env();
        if let Some(path) = explicit.map(Path::to_path_buf).or_else(default_config_path) {
            tracing::debug!(path = %path.display(), "config file");
            builder = builder.file(path);
        }
        let config = builder
            .load()
            .map_err(|e| StashError::Config(e.to_string()))?;
        config.validate()
    }

    pub fn with_capacity(mut self, capacity: Option<usize>) -> Result<Self> {
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.capacity == 0 {
            return Err(StashError::Config("capacity must be at least 1".into()));
        }
        if self.name_max_len == 0 || self.kind_max_len == 0 {
            return Err(StashError::Config(
                "name_max_len and kind_max_len must be at least 1".into(),
            ));
        }
        Ok(self)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "stash", "stash").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_backpack_limits() {
        let config = StashConfig::default();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.name_max_len, 29);
        assert_eq!(config.kind_max_len, 19);
    }

    #[test]
    fn loads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "capacity = 4\nname_max_len = 12\n").unwrap();

        let config = StashConfig::load(Some(&path)).unwrap();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.name_max_len, 12);
        assert_eq!(config.kind_max_len, 19);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StashConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, StashConfig::default());
    }

    #[test]
    fn zero_capacity_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "capacity = 0\n").unwrap();
        assert!(matches!(
            StashConfig::load(Some(&path)),
            Err(StashError::Config(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "capacity = \"lots\"\n").unwrap();
        assert!(matches!(
            StashConfig::load(Some(&path)),
            Err(StashError::Config(_))
        ));
    }

    #[test]
    fn cli_capacity_overrides() {
        let config = StashConfig::default().with_capacity(Some(3)).unwrap();
        assert_eq!(config.capacity, 3);
        let unchanged = StashConfig::default().with_capacity(None).unwrap();
        assert_eq!(unchanged.capacity, 10);
        assert!(StashConfig::default().with_capacity(Some(0)).is_err());
    }
}
