mod config;
mod database_config;
mod error;
mod hierarchy_config;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use hierarchy_config::HierarchyConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "DMS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".dms";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "dms.db";
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;
const MIN_MAX_DB_CONNECTIONS: u32 = 1;
const MAX_MAX_DB_CONNECTIONS: u32 = 64;

const DEFAULT_STORAGE_BASE_DIR: &str = "storage";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

pub const DEFAULT_FOLDER_CAPACITY: i64 = 10;
pub const DEFAULT_MAX_UNIT_NAME_LENGTH: usize = 255;
pub const MAX_CONFIGURABLE_UNIT_NAME_LENGTH: usize = 1024;
