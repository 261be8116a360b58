use crate::{DbError, error::Result as DbErrorResult};

use dms_core::{LogStatus, TransactionLog};
use error_location::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use sqlx::Row;

pub struct TransactionLogRepository;

impl TransactionLogRepository {
    pub async fn create<'e, E>(executor: E, log: &TransactionLog) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
              INSERT INTO transaction_log (actor_id, status, operation, message, created_at)
              VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(log.actor_id)
        .bind(log.status.as_str())
        .bind(&log.operation)
        .bind(&log.message)
        .bind(log.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent entries first.
    pub async fn find_recent<'e, E>(executor: E, limit: i64) -> DbErrorResult<Vec<TransactionLog>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
              SELECT id, actor_id, status, operation, message, created_at
              FROM transaction_log
              ORDER BY created_at DESC, id DESC
              LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(|r| -> DbErrorResult<TransactionLog> {
                let status: String = r.try_get("status")?;
                let created_at: i64 = r.try_get("created_at")?;

                Ok(TransactionLog {
                    id: Some(r.try_get("id")?),
                    actor_id: r.try_get("actor_id")?,
                    status: LogStatus::from_str(&status).map_err(|e| DbError::Decode {
                        message: format!("Invalid LogStatus in transaction_log.status: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?,
                    operation: r.try_get("operation")?,
                    message: r.try_get("message")?,
                    created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                        DbError::Decode {
                            message: "Invalid timestamp in transaction_log.created_at".to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        }
                    })?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
