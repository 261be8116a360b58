#![allow(dead_code)]

use dms_hierarchy::ExecutionContext;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

pub struct CliEnv {
    pub pool: SqlitePool,
    pub base: TempDir,
    pub department_id: i64,
    pub ctx: ExecutionContext,
}

impl CliEnv {
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1) // In-memory needs single connection
            .connect_with(options)
            .await
            .expect("Failed to create test pool");

        dms_db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let department_id =
            sqlx::query("INSERT INTO departments (name, folder_path) VALUES ('Records', 'records')")
                .execute(&pool)
                .await
                .expect("Failed to create test department")
                .last_insert_rowid();

        let base = TempDir::new().expect("Failed to create temp storage dir");
        let ctx = ExecutionContext::new(3, pool.clone(), base.path());

        Self {
            pool,
            base,
            department_id,
            ctx,
        }
    }
}
