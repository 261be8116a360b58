pub mod department_repository;
pub mod file_repository;
pub mod storage_location_repository;
pub mod transaction_log_repository;
