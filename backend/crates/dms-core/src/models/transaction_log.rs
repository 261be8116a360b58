use crate::models::log_status::LogStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionLog {
    /// `None` until the record has been stored.
    pub id: Option<i64>,

    pub actor_id: i64,
    pub status: LogStatus,
    pub operation: String,
    pub message: String,

    pub created_at: DateTime<Utc>,
}

impl TransactionLog {
    pub fn new(actor_id: i64, status: LogStatus, operation: &str, message: String) -> Self {
        Self {
            id: None,
            actor_id,
            status,
            operation: operation.to_string(),
            message,
            created_at: Utc::now(),
        }
    }

    pub fn success(actor_id: i64, operation: &str, message: String) -> Self {
        Self::new(actor_id, LogStatus::Success, operation, message)
    }

    pub fn failure(actor_id: i64, operation: &str, message: String) -> Self {
        Self::new(actor_id, LogStatus::Failure, operation, message)
    }
}
