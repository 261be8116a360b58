use crate::{DbError, error::Result as DbErrorResult};

use dms_core::StoredFile;
use error_location::ErrorLocation;

use std::panic::Location;

use chrono::DateTime;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Read and detach access to scanned files. Upload and content handling
/// belong to the document pipeline; only the location link is managed here.
pub struct FileRepository;

impl FileRepository {
    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<StoredFile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, department_id, file_name, storage_location_id, uploaded_at
                FROM files
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(map_file).transpose()
    }

    pub async fn find_by_location<'e, E>(
        executor: E,
        storage_location_id: i64,
    ) -> DbErrorResult<Vec<StoredFile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, department_id, file_name, storage_location_id, uploaded_at
                FROM files
                WHERE storage_location_id = ?
                ORDER BY file_name, id
            "#,
        )
        .bind(storage_location_id)
        .fetch_all(executor)
        .await?;

        rows.iter().map(map_file).collect()
    }

    pub async fn count_by_location<'e, E>(
        executor: E,
        storage_location_id: i64,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE storage_location_id = ?")
                .bind(storage_location_id)
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    /// Sets `storage_location_id` to NULL. Returns the number of rows touched.
    pub async fn clear_location<'e, E>(executor: E, id: i64) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE files SET storage_location_id = NULL WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_file(row: &SqliteRow) -> DbErrorResult<StoredFile> {
    let uploaded_at: i64 = row.try_get("uploaded_at")?;

    Ok(StoredFile {
        id: row.try_get("id")?,
        department_id: row.try_get("department_id")?,
        file_name: row.try_get("file_name")?,
        storage_location_id: row.try_get("storage_location_id")?,
        uploaded_at: DateTime::from_timestamp(uploaded_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in files.uploaded_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
