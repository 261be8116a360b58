use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, HierarchyConfig, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub hierarchy: HierarchyConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DMS_CONFIG_DIR env var, else use ./.dms/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DMS_CONFIG_DIR env var > ./.dms/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.storage.validate()?;
        self.hierarchy.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Storage base directory; relative values resolve against the config dir.
    pub fn storage_base_dir(&self) -> ConfigErrorResult<PathBuf> {
        let base_dir = Path::new(&self.storage.base_dir);
        if base_dir.is_absolute() {
            return Ok(base_dir.to_path_buf());
        }

        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(base_dir))
    }

    /// Log file path when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!("  storage: base_dir={}", self.storage.base_dir);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  hierarchy: default_folder_capacity={}, max_unit_name_length={}",
            self.hierarchy.default_folder_capacity, self.hierarchy.max_unit_name_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("DMS_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "DMS_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Storage
        Self::apply_env_string("DMS_STORAGE_BASE_DIR", &mut self.storage.base_dir);

        // Logging
        Self::apply_env_parse("DMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DMS_LOG_FILE", &mut self.logging.file);

        // Hierarchy
        Self::apply_env_parse(
            "DMS_DEFAULT_FOLDER_CAPACITY",
            &mut self.hierarchy.default_folder_capacity,
        );
        Self::apply_env_parse(
            "DMS_MAX_UNIT_NAME_LENGTH",
            &mut self.hierarchy.max_unit_name_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
