pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database_connection::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::department_repository::DepartmentRepository;
pub use repositories::file_repository::FileRepository;
pub use repositories::storage_location_repository::StorageLocationRepository;
pub use repositories::transaction_log_repository::TransactionLogRepository;
