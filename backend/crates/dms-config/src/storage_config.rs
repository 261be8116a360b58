use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_BASE_DIR};

use serde::Deserialize;

/// Root of the on-disk mirror of the location hierarchy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Absolute, or relative to the config directory
    pub base_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_dir: String::from(DEFAULT_STORAGE_BASE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_dir.trim().is_empty() {
            return Err(ConfigError::storage("storage.base_dir cannot be empty"));
        }

        Ok(())
    }
}
