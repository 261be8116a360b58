pub mod department;
pub mod log_status;
pub mod storage_location;
pub mod stored_file;
pub mod transaction_log;
pub mod unit_type;
