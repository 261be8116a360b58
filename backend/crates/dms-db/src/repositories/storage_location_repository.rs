use crate::{DbError, error::Result as DbErrorResult};

use dms_core::{NewStorageLocation, StorageLocation, UnitType};
use error_location::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

const LOCATION_COLUMNS: &str = r#"
    id, department_id, sub_department_id, parent_id,
    unit_name, unit_type, folder_capacity, full_path, created_at
"#;

pub struct StorageLocationRepository;

impl StorageLocationRepository {
    /// Inserts a location and returns the id assigned by the store.
    pub async fn create<'e, E>(executor: E, location: &NewStorageLocation) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO storage_locations (
                    department_id, sub_department_id, parent_id,
                    unit_name, unit_type, folder_capacity, full_path, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(location.department_id)
        .bind(location.sub_department_id)
        .bind(location.parent_id)
        .bind(&location.unit_name)
        .bind(location.unit_type.as_str())
        .bind(location.folder_capacity)
        .bind(&location.full_path)
        .bind(location.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<StorageLocation>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM storage_locations WHERE id = ?");

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_location).transpose()
    }

    /// All locations of one partition: the main department when
    /// `sub_department_id` is `None`, otherwise exactly that sub-department.
    pub async fn find_by_department<'e, E>(
        executor: E,
        department_id: i64,
        sub_department_id: Option<i64>,
    ) -> DbErrorResult<Vec<StorageLocation>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = match sub_department_id {
            Some(sub_id) => {
                let sql = format!(
                    "SELECT {LOCATION_COLUMNS} FROM storage_locations
                     WHERE department_id = ? AND sub_department_id = ?
                     ORDER BY unit_name, id"
                );
                sqlx::query(&sql)
                    .bind(department_id)
                    .bind(sub_id)
                    .fetch_all(executor)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {LOCATION_COLUMNS} FROM storage_locations
                     WHERE department_id = ? AND sub_department_id IS NULL
                     ORDER BY unit_name, id"
                );
                sqlx::query(&sql)
                    .bind(department_id)
                    .fetch_all(executor)
                    .await?
            }
        };

        rows.iter().map(map_location).collect()
    }

    pub async fn count_children<'e, E>(executor: E, parent_id: i64) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM storage_locations WHERE parent_id = ?")
                .bind(parent_id)
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    /// Returns the number of rows touched (0 when the id does not exist).
    pub async fn update_capacity<'e, E>(
        executor: E,
        id: i64,
        folder_capacity: i64,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE storage_locations SET folder_capacity = ? WHERE id = ?")
            .bind(folder_capacity)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed (0 when the id does not exist).
    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM storage_locations WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_all<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM storage_locations")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}

fn map_location(row: &SqliteRow) -> DbErrorResult<StorageLocation> {
    let unit_type: String = row.try_get("unit_type")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(StorageLocation {
        id: row.try_get("id")?,
        department_id: row.try_get("department_id")?,
        sub_department_id: row.try_get("sub_department_id")?,
        parent_id: row.try_get("parent_id")?,
        unit_name: row.try_get("unit_name")?,
        unit_type: UnitType::from_str(&unit_type).map_err(|e| DbError::Decode {
            message: format!("Invalid UnitType in storage_locations.unit_type: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        folder_capacity: row.try_get("folder_capacity")?,
        full_path: row.try_get("full_path")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in storage_locations.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
