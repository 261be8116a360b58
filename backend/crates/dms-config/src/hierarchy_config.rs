use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FOLDER_CAPACITY, DEFAULT_MAX_UNIT_NAME_LENGTH,
    MAX_CONFIGURABLE_UNIT_NAME_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Capacity given to a bulk-created folder when the caller supplies none
    pub default_folder_capacity: i64,
    pub max_unit_name_length: usize,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            default_folder_capacity: DEFAULT_FOLDER_CAPACITY,
            max_unit_name_length: DEFAULT_MAX_UNIT_NAME_LENGTH,
        }
    }
}

impl HierarchyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_folder_capacity <= 0 {
            return Err(ConfigError::hierarchy(format!(
                "hierarchy.default_folder_capacity must be > 0, got {}",
                self.default_folder_capacity
            )));
        }

        if self.max_unit_name_length == 0
            || self.max_unit_name_length > MAX_CONFIGURABLE_UNIT_NAME_LENGTH
        {
            return Err(ConfigError::hierarchy(format!(
                "hierarchy.max_unit_name_length must be 1-{}, got {}",
                MAX_CONFIGURABLE_UNIT_NAME_LENGTH, self.max_unit_name_length
            )));
        }

        Ok(())
    }
}
