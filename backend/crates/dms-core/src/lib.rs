pub mod error;
pub mod hierarchy_validator;
pub mod models;
pub mod path_builder;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use hierarchy_validator::{next_type, suggested_root_type, validate_child};
pub use models::department::Department;
pub use models::log_status::LogStatus;
pub use models::storage_location::{NewStorageLocation, StorageLocation};
pub use models::stored_file::StoredFile;
pub use models::transaction_log::TransactionLog;
pub use models::unit_type::UnitType;
pub use path_builder::build_full_path;
