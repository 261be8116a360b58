use crate::error::Result as DbErrorResult;

use dms_core::Department;

use sqlx::Row;

pub struct DepartmentRepository;

impl DepartmentRepository {
    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Department>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT id, name, folder_path FROM departments WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.map(|r| -> DbErrorResult<Department> {
            Ok(Department {
                id: r.try_get("id")?,
                name: r.try_get("name")?,
                folder_path: r.try_get("folder_path")?,
            })
        })
        .transpose()
    }

    /// Whether `sub_department_id` exists and belongs to `department_id`.
    pub async fn sub_department_belongs_to<'e, E>(
        executor: E,
        department_id: i64,
        sub_department_id: i64,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sub_departments WHERE id = ? AND department_id = ?",
        )
        .bind(sub_department_id)
        .bind(department_id)
        .fetch_one(executor)
        .await?;

        Ok(count > 0)
    }
}
